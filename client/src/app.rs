//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{admin_dashboard::AdminDashboardPage, home::HomePage, manage_content::ManageContentPage};
use crate::state::session::{Session, SessionProvider};

pub const DASHBOARD_PATH: &str = "/admin";
pub const MANAGE_CONTENT_PATH: &str = "/admin/manage-content";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the one `Session` for the app, restores it from browser storage
/// once mounted, and routes the public and protected pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    // Effects only run in the browser, so the server render stays unrestored.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/atelier.css"/>
        <Title text="Atelier Admin"/>

        <SessionProvider session=session>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("admin")
                        view=move || view! { <ProtectedRoute session=session><AdminDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("manage-content"))
                        view=move || view! { <ProtectedRoute session=session><ManageContentPage/></ProtectedRoute> }
                    />
                </Routes>
            </Router>
        </SessionProvider>
    }
}

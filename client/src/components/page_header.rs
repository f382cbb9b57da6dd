//! Top bar shared by every page.

use leptos::prelude::*;

use crate::app::DASHBOARD_PATH;
use crate::state::session::Session;
use crate::util::auth::SIGN_IN_PATH;

/// Brand link plus, when signed in, the user name and a Logout button.
///
/// Logging out on a protected page hands navigation to the route guard, which
/// sends the visitor back to the sign-in page.
#[component]
pub fn PageHeader(session: Session) -> impl IntoView {
    let on_logout = move |_| {
        if let Err(e) = session.logout() {
            leptos::logging::warn!("logout: {e}");
        }
    };

    view! {
        <header class="page-header toolbar">
            <a href=SIGN_IN_PATH class="page-header__brand">
                "Atelier"
            </a>
            <span class="toolbar__spacer"></span>
            <Show when=move || session.is_authenticated()>
                <a href=DASHBOARD_PATH class="page-header__link">
                    "Dashboard"
                </a>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <span class="toolbar__self">
                    {move || session.current_user().unwrap_or_else(|| "Admin".to_owned())}
                </span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}

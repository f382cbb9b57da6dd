//! Public landing route and sign-in form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes redirect here when signed out. Signing in only records
//! the username in the session; there is no credential check.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::DASHBOARD_PATH;
use crate::components::page_footer::PageFooter;
use crate::components::page_header::PageHeader;
use crate::state::session::{Session, use_session};

/// Trim the entered name and require something to be left.
pub fn validate_username(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() { Err("Enter a username.") } else { Ok(name.to_owned()) }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    // Set by the form; navigation happens here so it outlives the form.
    let signed_in = RwSignal::new(false);
    Effect::new(move || {
        if signed_in.get() {
            signed_in.set(false);
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    view! {
        <div class="home-page">
            <PageHeader session=session/>
            <main class="home-page__main">
                <Show
                    when=move || session.is_authenticated()
                    fallback=move || view! { <SignInForm session=session on_signed_in=Callback::new(move |()| signed_in.set(true))/> }
                >
                    <div class="login-card">
                        <h1>"Welcome back"</h1>
                        <p class="login-card__subtitle">
                            "Signed in as " {move || session.current_user().unwrap_or_else(|| "Admin".to_owned())}
                        </p>
                        <a href=DASHBOARD_PATH class="login-button">
                            "Go to dashboard"
                        </a>
                    </div>
                </Show>
            </main>
            <PageFooter/>
        </div>
    }
}

#[component]
fn SignInForm(session: Session, on_signed_in: Callback<()>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = match validate_username(&username.get()) {
            Ok(name) => name,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        match session.login(&name) {
            Ok(()) => on_signed_in.run(()),
            Err(e) => {
                leptos::logging::warn!("login: {e}");
                info.set(format!("Sign-in failed: {e}"));
            }
        }
    };

    view! {
        <div class="login-card">
            <h1>"Atelier Admin"</h1>
            <p class="login-card__subtitle">"Sign in to manage collections, posts and services."</p>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit">
                    "Sign In"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

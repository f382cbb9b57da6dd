//! Route wrapper that only renders for a signed-in session.

#[cfg(all(test, feature = "ssr"))]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth::{GuardDecision, install_unauth_redirect};
use crate::util::storage::KeyValueStore;

/// Renders `children` while the session is signed in.
///
/// A signed-out session is sent to the sign-in path and nothing is rendered.
/// Before the session has been read from storage nothing is rendered either.
#[component]
pub fn ProtectedRoute(session: Session, children: ChildrenFn) -> impl IntoView {
    install_unauth_redirect(session, use_navigate());
    signed_in_only(session, children)
}

/// `children` while the guard says [`GuardDecision::Render`], empty otherwise.
pub fn signed_in_only<S>(session: Session<S>, children: ChildrenFn) -> impl IntoView
where
    S: KeyValueStore + Send + Sync + 'static,
{
    view! {
        <Show when=move || session.guard() == GuardDecision::Render>
            {children()}
        </Show>
    }
}

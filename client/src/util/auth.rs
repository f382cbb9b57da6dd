//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior, decided
//! from the session alone at render time.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionStore};
use crate::util::storage::KeyValueStore;

/// Where signed-out visitors of a protected route are sent.
pub const SIGN_IN_PATH: &str = "/";

/// Outcome of checking a protected route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Storage has not been read yet (server render, first hydration pass).
    Pending,
    /// Signed out: navigate to [`SIGN_IN_PATH`] and render nothing.
    Redirect,
    /// Signed in: render the protected content.
    Render,
}

pub fn guard_decision<S: KeyValueStore>(store: &SessionStore<S>) -> GuardDecision {
    if !store.is_restored() {
        GuardDecision::Pending
    } else if store.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect
    }
}

/// Navigation used for guard redirects: replaces the protected entry in history.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Send a signed-out session to [`SIGN_IN_PATH`]. Returns whether it navigated.
///
/// Pending sessions are left alone; they have not been read from storage yet.
pub fn redirect_if_signed_out<S, F>(session: Session<S>, navigate: &F) -> bool
where
    S: KeyValueStore + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions),
{
    let signed_out = session.guard() == GuardDecision::Redirect;
    if signed_out {
        navigate(SIGN_IN_PATH, redirect_options());
    }
    signed_out
}

/// Redirect to [`SIGN_IN_PATH`] whenever the session settles as signed out.
pub fn install_unauth_redirect<S, F>(session: Session<S>, navigate: F)
where
    S: KeyValueStore + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        redirect_if_signed_out(session, &navigate);
    });
}

//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: protected
//! pages bounce unauthenticated visitors to `/login`, and the auth pages
//! bounce already-signed-in visitors back to the notes view. Both guards
//! re-evaluate whenever the session signal changes, including changes
//! arriving from sibling tabs via the storage listener.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether a protected route should redirect to the login view.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.authenticated
}

/// Whether an auth route (login/signup) should redirect to the main view.
pub fn should_redirect_auth(state: &SessionState) -> bool {
    state.authenticated
}

/// Redirect to `/login` whenever the session loses its credential.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to the notes view whenever the session is already
/// authenticated.
pub fn install_auth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_auth(&session.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

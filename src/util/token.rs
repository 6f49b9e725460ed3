//! Access-token persistence and cross-tab change propagation.
//!
//! The token lives in `localStorage` under a single key; presence of the
//! key is the sole authentication signal. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; non-hydrate paths
//! safely no-op so host-side rendering and tests stay deterministic.
//! Cross-tab sync rides the native `storage` event, which the browser does
//! not fire in the tab that made the change — same-tab updates must go
//! through the session signal directly.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "notesum_token";

/// Read the stored access token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the access token, marking the session authenticated across
/// reloads.
pub fn save_token(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}

/// Remove the stored access token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Whether a token is currently stored.
pub fn has_token() -> bool {
    load_token().is_some()
}

/// Subscribe the session signal to the window `storage` event so a login or
/// logout in a sibling tab is reflected here without user action.
///
/// The listener lives for the page lifetime; the closure is leaked on
/// `forget`, which is the intended shape for an app-scoped subscription.
pub fn install_storage_sync(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::wrap(Box::new(move |_event: web_sys::StorageEvent| {
            session.set(SessionState::from_token_presence(has_token()));
        }) as Box<dyn FnMut(web_sys::StorageEvent)>);
        if window
            .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach storage listener; cross-tab logout sync disabled");
        }
        callback.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

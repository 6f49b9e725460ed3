//! Session state derived from access-token presence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the login/logout flows to coordinate redirects.
//! The credential itself stays in browser storage (`util::token`); this
//! state is only the process-wide "is there a credential" bit, injected via
//! context rather than read ambiently.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Authentication state for the current browser session.
///
/// Presence of the stored token is the sole authentication signal; no
/// client-side expiry or refresh is modeled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
}

impl SessionState {
    /// Derive the session state from whether a token is currently stored.
    pub fn from_token_presence(present: bool) -> Self {
        Self {
            authenticated: present,
        }
    }
}

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, submits, redirects)
//! and delegates rendering details to `components`.

pub mod login;
pub mod notes;
pub mod signup;

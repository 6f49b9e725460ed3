//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `notes`) so pages can depend on
//! small focused models whose transitions are pure and host-testable.

pub mod notes;
pub mod session;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentation-only: behavior arrives as callbacks and
//! signals from the owning page.

pub mod note_card;

//! Networking modules for the remote notes API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and bearer-credential attachment; `types`
//! defines the wire schema shared with the backend.

pub mod api;
pub mod types;

//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads so serde round-trips stay
//! lossless. The backend emits Mongo-style `_id` identifiers; the serde
//! alias keeps the client tolerant of either spelling.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A note as represented in the wire protocol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Optional display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Note body.
    pub content: String,
    /// AI-generated summary, present only after a summarize call.
    #[serde(default)]
    pub summary: Option<String>,
}

/// Body for note create and update calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

/// Success payload of the login endpoint.
///
/// `token` is optional on purpose: a 2xx response without a token is
/// treated as a failed login, not as a parse error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Success payload of the summarize endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Error body shape shared by all endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

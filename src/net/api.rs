//! REST API helpers for communicating with the notes backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each authenticated
//! call attaching the stored token as a bearer credential. Server-side:
//! stubs returning [`ApiError::Unavailable`] since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Only the note-list fetch maps
//! 401 to [`ApiError::Unauthorized`] — that is the one place server-side
//! token invalidation is detected. Any other non-2xx maps to the
//! server-provided message when the error body carries one, else to a
//! formatted status message. No call retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{LoginResponse, Note, NotePayload, SummarizeResponse};

/// Failure modes of the remote API boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the stored credential on the note-list fetch.
    #[error("unauthorized")]
    Unauthorized,
    /// Transport error, non-2xx status, or malformed payload.
    #[error("{0}")]
    Message(String),
    /// Browser-only call invoked outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{API_BASE}/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint() -> String {
    format!("{API_BASE}/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn notes_endpoint() -> String {
    format!("{API_BASE}/notes")
}

#[cfg(any(test, feature = "hydrate"))]
fn note_endpoint(id: &str) -> String {
    format!("{API_BASE}/notes/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn summarize_endpoint(id: &str) -> String {
    format!("{API_BASE}/notes/{id}/summarize")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Map a non-OK response to the error the caller should see, preferring the
/// server-provided message over a generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body_message: Option<String>) -> ApiError {
    match body_message {
        Some(message) => ApiError::Message(message),
        None => ApiError::Message(request_failed_message(status)),
    }
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    status_error(status, message)
}

/// Attach the stored bearer credential, if any. Attaching the credential is
/// this module's sole responsibility beyond request dispatch.
#[cfg(feature = "hydrate")]
fn with_bearer(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::token::load_token() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

/// Log in with username + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error when the HTTP request fails or the server responds with
/// a non-OK status. A 2xx response without a token field is NOT an error
/// here; callers decide what a missing token means.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .json(&payload)
            .map_err(|e| ApiError::Message(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Register a new account via `POST /api/auth/register`.
///
/// The success body is ignored; registration does not log the user in.
///
/// # Errors
///
/// Returns an error when the HTTP request fails or the server responds with
/// a non-OK status.
pub async fn register(username: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(&register_endpoint())
            .json(&payload)
            .map_err(|e| ApiError::Message(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every note belonging to the authenticated user via `GET /api/notes`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] on 401 so the notes page can force a
/// logout; any other failure maps to [`ApiError::Message`].
pub async fn fetch_notes() -> Result<Vec<Note>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(&notes_endpoint()))
            .send()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))?;
        if resp.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Vec<Note>>()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a note via `POST /api/notes`.
///
/// # Errors
///
/// Returns an error when the HTTP request fails or the server responds with
/// a non-OK status.
pub async fn create_note(payload: &NotePayload) -> Result<Note, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(&notes_endpoint()))
            .json(payload)
            .map_err(|e| ApiError::Message(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Note>()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Update a note by identifier via `PUT /api/notes/{id}`.
///
/// # Errors
///
/// Returns an error when the HTTP request fails or the server responds with
/// a non-OK status.
pub async fn update_note(id: &str, payload: &NotePayload) -> Result<Note, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::put(&note_endpoint(id)))
            .json(payload)
            .map_err(|e| ApiError::Message(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Note>()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

/// Delete a note by identifier via `DELETE /api/notes/{id}`.
///
/// # Errors
///
/// Returns an error when the HTTP request fails or the server responds with
/// a non-OK status.
pub async fn delete_note(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::delete(&note_endpoint(id)))
            .send()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Request an AI summary for a note via `POST /api/notes/{id}/summarize`.
///
/// # Errors
///
/// Returns an error when the HTTP request fails or the server responds with
/// a non-OK status.
pub async fn summarize_note(id: &str) -> Result<SummarizeResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(&summarize_endpoint(id)))
            .send()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<SummarizeResponse>()
            .await
            .map_err(|e| ApiError::Message(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

use super::*;
use crate::net::api::ApiError;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "secret"),
        Ok(("alice".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "secret"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("alice", ""),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both username and password.")
    );
}

#[test]
fn missing_token_message_is_exact() {
    assert_eq!(NO_TOKEN_MESSAGE, "Login failed: No token received");
}

#[test]
fn login_error_message_prefers_server_text() {
    assert_eq!(
        login_error_message(&ApiError::Message("Invalid credentials".to_owned())),
        "Invalid credentials"
    );
}

#[test]
fn login_error_message_falls_back_to_generic() {
    assert_eq!(login_error_message(&ApiError::Unauthorized), "Login failed");
    assert_eq!(login_error_message(&ApiError::Unavailable), "Login failed");
}

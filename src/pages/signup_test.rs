use super::*;
use crate::net::api::ApiError;

#[test]
fn validate_signup_input_trims_username() {
    assert_eq!(
        validate_signup_input(" bob ", "hunter2"),
        Ok(("bob".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_signup_input_requires_both_fields() {
    assert_eq!(
        validate_signup_input("", "hunter2"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_signup_input("bob", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn success_message_is_exact() {
    assert_eq!(SUCCESS_MESSAGE, "Registration successful! Please login.");
}

#[test]
fn redirect_delay_is_two_seconds() {
    assert_eq!(REDIRECT_DELAY, std::time::Duration::from_secs(2));
}

#[test]
fn signup_error_message_prefers_server_text() {
    assert_eq!(
        signup_error_message(&ApiError::Message("Username taken".to_owned())),
        "Username taken"
    );
}

#[test]
fn signup_error_message_falls_back_to_generic() {
    assert_eq!(signup_error_message(&ApiError::Unavailable), "Registration failed");
}

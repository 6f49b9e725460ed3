use super::*;

#[test]
fn auth_endpoints_format_expected_paths() {
    assert_eq!(login_endpoint(), "/api/auth/login");
    assert_eq!(register_endpoint(), "/api/auth/register");
}

#[test]
fn note_endpoints_format_expected_paths() {
    assert_eq!(notes_endpoint(), "/api/notes");
    assert_eq!(note_endpoint("n1"), "/api/notes/n1");
    assert_eq!(summarize_endpoint("n1"), "/api/notes/n1/summarize");
}

#[test]
fn bearer_value_prefixes_the_token() {
    assert_eq!(bearer_value("abc123"), "Bearer abc123");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
}

#[test]
fn status_error_prefers_the_server_message() {
    assert_eq!(
        status_error(400, Some("Invalid credentials".to_owned())),
        ApiError::Message("Invalid credentials".to_owned())
    );
}

#[test]
fn status_error_falls_back_to_status_line() {
    assert_eq!(
        status_error(503, None),
        ApiError::Message("request failed: 503".to_owned())
    );
}

#[test]
fn api_error_display_matches_wire_facing_strings() {
    assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(ApiError::Message("boom".to_owned()).to_string(), "boom");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

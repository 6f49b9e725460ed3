use super::*;

#[test]
fn unauthenticated_sessions_redirect_off_protected_routes() {
    let state = SessionState { authenticated: false };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_auth(&state));
}

#[test]
fn authenticated_sessions_redirect_off_auth_routes() {
    let state = SessionState { authenticated: true };
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_auth(&state));
}

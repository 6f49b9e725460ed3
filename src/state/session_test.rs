use super::*;

#[test]
fn session_state_defaults_to_unauthenticated() {
    assert!(!SessionState::default().authenticated);
}

#[test]
fn from_token_presence_tracks_the_flag() {
    assert!(SessionState::from_token_presence(true).authenticated);
    assert!(!SessionState::from_token_presence(false).authenticated);
}

use super::*;

#[test]
fn default_session_starts_hydrating() {
    let state = SessionState::default();
    assert!(state.hydrating);
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
}

#[test]
fn hydrating_session_is_not_authenticated() {
    let state = SessionState {
        token: Some("abc123".to_owned()),
        user: None,
        hydrating: true,
    };
    assert!(!state.authenticated());
}

#[test]
fn hydrated_session_with_token_is_authenticated() {
    let state = SessionState {
        token: Some("abc123".to_owned()),
        user: None,
        hydrating: false,
    };
    assert!(state.authenticated());
}

#[test]
fn empty_token_is_not_authenticated() {
    let state = SessionState {
        token: Some(String::new()),
        user: None,
        hydrating: false,
    };
    assert!(!state.authenticated());
}

#[test]
fn absent_token_is_not_authenticated() {
    let state = SessionState {
        token: None,
        user: None,
        hydrating: false,
    };
    assert!(!state.authenticated());
}

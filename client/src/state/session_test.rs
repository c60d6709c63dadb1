use super::*;

#[test]
fn default_session_is_anonymous_create_phase() {
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Create);
    assert!(state.meeting_id.is_none());
    assert!(state.member_name.is_none());
    assert!(state.meeting_name.is_none());
    assert!(state.poller.is_none());
    assert!(!state.is_active());
}

#[test]
fn activate_sets_identity_pair_and_phase() {
    let mut state = SessionState::default();
    state.activate("m1".to_owned(), "Alice".to_owned(), "Standup".to_owned());
    assert!(state.is_active());
    assert_eq!(state.phase, SessionPhase::Active);
    assert_eq!(state.meeting_id.as_deref(), Some("m1"));
    assert_eq!(state.member_name.as_deref(), Some("Alice"));
    assert_eq!(state.meeting_name.as_deref(), Some("Standup"));
}

#[test]
fn is_active_requires_both_halves_of_the_pair() {
    let mut state = SessionState::default();
    state.meeting_id = Some("m1".to_owned());
    assert!(!state.is_active());
    state.meeting_id = None;
    state.member_name = Some("Alice".to_owned());
    assert!(!state.is_active());
}

#[test]
fn clear_resets_identity_and_releases_poller() {
    let mut state = SessionState::default();
    state.activate("m1".to_owned(), "Alice".to_owned(), "Standup".to_owned());
    let handle = state.install_poller();
    assert!(handle.is_live());

    state.clear();
    assert!(!state.is_active());
    assert!(state.poller.is_none());
    assert!(!handle.is_live());
    assert_eq!(state.phase, SessionPhase::Create);
}

#[test]
fn install_poller_releases_the_previous_handle() {
    let mut state = SessionState::default();
    let first = state.install_poller();
    assert!(first.is_live());

    let second = state.install_poller();
    assert!(!first.is_live());
    assert!(second.is_live());
    assert!(state.poller.is_some());
}

#[test]
fn clear_without_poller_is_harmless() {
    let mut state = SessionState::default();
    state.clear();
    assert!(state.poller.is_none());
}

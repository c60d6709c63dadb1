use super::*;

// =============================================================
// Cookie helpers
// =============================================================

#[test]
fn session_cookie_name_is_scoped_per_meeting() {
    assert_eq!(session_cookie_name("m1"), "meeting_m1");
    assert_ne!(session_cookie_name("m1"), session_cookie_name("m2"));
}

#[test]
fn session_cookie_carries_member_name() {
    let cookie = session_cookie("m1", "Alice");
    assert_eq!(cookie.name(), "meeting_m1");
    assert_eq!(cookie.value(), "Alice");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
}

#[test]
fn expired_session_cookie_clears_immediately() {
    let cookie = expired_session_cookie("m1");
    assert_eq!(cookie.name(), "meeting_m1");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn meeting_errors_map_to_not_found() {
    assert_eq!(meeting_error_to_status(&MeetingError::MeetingNotFound), StatusCode::NOT_FOUND);
    assert_eq!(meeting_error_to_status(&MeetingError::MemberNotFound), StatusCode::NOT_FOUND);
}

// =============================================================
// Field presence
// =============================================================

#[test]
fn presence_rejects_missing_and_empty() {
    assert_eq!(presence(None), None);
    assert_eq!(presence(Some(String::new())), None);
    assert_eq!(presence(Some("Alice".to_owned())), Some("Alice".to_owned()));
}

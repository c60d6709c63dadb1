use super::*;

// =============================================================
// SessionCheck
// =============================================================

#[test]
fn session_check_logged_in_resumes() {
    let reply: SessionCheck =
        serde_json::from_str(r#"{"status":"logged_in","member_name":"Alice","meeting_name":"Standup"}"#).unwrap();
    assert_eq!(
        reply.outcome(),
        SessionOutcome::Active { member_name: "Alice".to_owned(), meeting_name: "Standup".to_owned() }
    );
}

#[test]
fn session_check_not_logged_in_needs_join() {
    let reply: SessionCheck = serde_json::from_str(r#"{"status":"not_logged_in","meeting_name":"Standup"}"#).unwrap();
    assert_eq!(reply.outcome(), SessionOutcome::NeedsJoin { meeting_name: "Standup".to_owned() });
}

#[test]
fn session_check_no_session_is_unknown() {
    let reply: SessionCheck = serde_json::from_str(r#"{"status":"no_session"}"#).unwrap();
    assert_eq!(reply.outcome(), SessionOutcome::Unknown);
}

#[test]
fn session_check_absent_status_is_unknown() {
    let reply: SessionCheck = serde_json::from_str("{}").unwrap();
    assert_eq!(reply.outcome(), SessionOutcome::Unknown);
}

#[test]
fn session_check_logged_in_without_names_is_unknown() {
    let reply: SessionCheck = serde_json::from_str(r#"{"status":"logged_in"}"#).unwrap();
    assert_eq!(reply.outcome(), SessionOutcome::Unknown);
}

// =============================================================
// CreateReply
// =============================================================

#[test]
fn create_reply_with_id_succeeds() {
    let reply: CreateReply =
        serde_json::from_str(r#"{"meeting_id":"m1","meeting_name":"Standup"}"#).unwrap();
    assert_eq!(reply.into_outcome(), Ok("m1".to_owned()));
}

#[test]
fn create_reply_error_text_is_surfaced() {
    let reply: CreateReply = serde_json::from_str(r#"{"error":"meeting name and member name are required"}"#).unwrap();
    assert_eq!(reply.into_outcome(), Err("meeting name and member name are required".to_owned()));
}

#[test]
fn create_reply_without_error_uses_generic_text() {
    let reply = CreateReply::default();
    assert_eq!(reply.into_outcome(), Err("unknown error".to_owned()));
}

// =============================================================
// JoinReply
// =============================================================

#[test]
fn join_reply_success_carries_meeting_name() {
    let reply: JoinReply = serde_json::from_str(r#"{"status":"success","meeting_name":"Standup"}"#).unwrap();
    assert_eq!(reply.into_outcome(), Ok("Standup".to_owned()));
}

#[test]
fn join_reply_failure_surfaces_error() {
    let reply: JoinReply = serde_json::from_str(r#"{"error":"meeting not found"}"#).unwrap();
    assert_eq!(reply.into_outcome(), Err("meeting not found".to_owned()));
}

#[test]
fn join_reply_non_success_status_fails() {
    let reply: JoinReply = serde_json::from_str(r#"{"status":"nope","meeting_name":"Standup"}"#).unwrap();
    assert_eq!(reply.into_outcome(), Err("unknown error".to_owned()));
}

// =============================================================
// AckReply
// =============================================================

#[test]
fn ack_reply_success() {
    let reply: AckReply = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
    assert_eq!(reply.into_outcome(), Ok(()));
}

#[test]
fn ack_reply_failure_surfaces_error() {
    let reply: AckReply = serde_json::from_str(r#"{"error":"member not found"}"#).unwrap();
    assert_eq!(reply.into_outcome(), Err("member not found".to_owned()));
}

// =============================================================
// MeetingSnapshot
// =============================================================

#[test]
fn meeting_snapshot_decodes_roster_and_log() {
    let snapshot: MeetingSnapshot = serde_json::from_str(
        r#"{"members":["Alice","Bob"],"messages":[{"sender":"Alice","content":"hi","time":"10:00:00"}]}"#,
    )
    .unwrap();
    assert_eq!(snapshot.members, vec!["Alice".to_owned(), "Bob".to_owned()]);
    assert_eq!(
        snapshot.messages,
        vec![ChatMessage { sender: "Alice".to_owned(), content: "hi".to_owned(), time: "10:00:00".to_owned() }]
    );
}

#[test]
fn meeting_snapshot_rejects_error_body() {
    let result: Result<MeetingSnapshot, _> = serde_json::from_str(r#"{"error":"meeting not found"}"#);
    assert!(result.is_err());
}

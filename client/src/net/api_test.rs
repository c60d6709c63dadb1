use super::*;

#[test]
fn check_session_endpoint_carries_meeting_id() {
    assert_eq!(check_session_endpoint("m1"), "/api/check_session?meeting_id=m1");
}

#[test]
fn messages_endpoint_carries_meeting_id() {
    assert_eq!(messages_endpoint("m1"), "/api/messages?meeting_id=m1");
}

use super::*;

#[test]
fn own_messages_get_own_class() {
    assert_eq!(message_class("Alice", Some("Alice")), "message message--own");
}

#[test]
fn other_messages_get_other_class() {
    assert_eq!(message_class("Bob", Some("Alice")), "message message--other");
}

#[test]
fn without_local_identity_everything_is_other() {
    assert_eq!(message_class("Alice", None), "message message--other");
}

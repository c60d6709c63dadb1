use super::*;

fn snapshot(members: &[&str], messages: &[(&str, &str, &str)]) -> MeetingSnapshot {
    MeetingSnapshot {
        members: members.iter().map(|&m| m.to_owned()).collect(),
        messages: messages
            .iter()
            .map(|&(sender, content, time)| ChatMessage {
                sender: sender.to_owned(),
                content: content.to_owned(),
                time: time.to_owned(),
            })
            .collect(),
    }
}

#[test]
fn default_state_is_empty() {
    let state = MeetingState::default();
    assert!(state.members.is_empty());
    assert!(state.messages.is_empty());
}

#[test]
fn begin_fetch_is_monotonic() {
    let mut state = MeetingState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    assert!(second > first);
}

#[test]
fn apply_snapshot_replaces_both_collections() {
    let mut state = MeetingState::default();
    let seq = state.begin_fetch();
    assert!(state.apply_snapshot(seq, snapshot(&["Alice"], &[("Alice", "hi", "10:00:00")])));
    assert_eq!(state.members, vec!["Alice".to_owned()]);
    assert_eq!(state.messages.len(), 1);

    // A later snapshot fully replaces, never accumulates.
    let seq = state.begin_fetch();
    assert!(state.apply_snapshot(seq, snapshot(&["Bob"], &[])));
    assert_eq!(state.members, vec!["Bob".to_owned()]);
    assert!(state.messages.is_empty());
}

#[test]
fn stale_response_does_not_overwrite_newer_snapshot() {
    let mut state = MeetingState::default();
    let early = state.begin_fetch();
    let late = state.begin_fetch();

    assert!(state.apply_snapshot(late, snapshot(&["Alice", "Bob"], &[])));
    assert!(!state.apply_snapshot(early, snapshot(&["Alice"], &[])));
    assert_eq!(state.members, vec!["Alice".to_owned(), "Bob".to_owned()]);
}

#[test]
fn same_sequence_applies_at_most_once() {
    let mut state = MeetingState::default();
    let seq = state.begin_fetch();
    assert!(state.apply_snapshot(seq, snapshot(&["Alice"], &[])));
    assert!(!state.apply_snapshot(seq, snapshot(&["Bob"], &[])));
    assert_eq!(state.members, vec!["Alice".to_owned()]);
}

#[test]
fn clear_drops_snapshots() {
    let mut state = MeetingState::default();
    let seq = state.begin_fetch();
    state.apply_snapshot(seq, snapshot(&["Alice"], &[("Alice", "hi", "10:00:00")]));
    state.clear();
    assert!(state.members.is_empty());
    assert!(state.messages.is_empty());
}

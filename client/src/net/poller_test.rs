use super::*;

#[test]
fn new_handle_is_live() {
    let handle = PollHandle::new();
    assert!(handle.is_live());
}

#[test]
fn stop_releases_all_clones() {
    let handle = PollHandle::new();
    let clone = handle.clone();
    clone.stop();
    assert!(!handle.is_live());
    assert!(!clone.is_live());
}

#[test]
fn stop_is_idempotent() {
    let handle = PollHandle::new();
    handle.stop();
    handle.stop();
    assert!(!handle.is_live());
}

#[test]
fn poll_interval_is_two_seconds() {
    assert_eq!(POLL_INTERVAL_SECS, 2);
}

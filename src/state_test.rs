use super::*;

#[tokio::test]
async fn fresh_state_has_no_meetings() {
    let state = AppState::new();
    assert!(state.meetings.read().await.is_empty());
}

#[tokio::test]
async fn clones_share_the_same_rooms() {
    let state = AppState::new();
    let clone = state.clone();
    state.meetings.write().await.insert("m1".to_owned(), Meeting::default());
    assert!(clone.meetings.read().await.contains_key("m1"));
}

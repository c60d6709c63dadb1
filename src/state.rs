//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. All
//! meeting data lives in one in-memory map guarded by an async `RwLock`;
//! nothing is persisted, so a restart forgets every room.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

/// One chat message as stored and served.
#[derive(Debug, Clone, Serialize)]
pub struct StoredMessage {
    pub sender: String,
    pub content: String,
    /// Wall-clock `HH:MM:SS` string assigned when the message arrived.
    pub time: String,
}

/// A live meeting room.
#[derive(Debug, Default)]
pub struct Meeting {
    /// Display name chosen at creation.
    pub name: String,
    /// Member display names in join order. Names are not unique identities;
    /// rejoining under the same name keeps a single membership.
    pub members: Vec<String>,
    /// Message log in arrival order.
    pub messages: Vec<StoredMessage>,
}

/// Shared application state. Clone is required by Axum; the map is
/// Arc-wrapped so all clones observe the same rooms.
#[derive(Clone, Default)]
pub struct AppState {
    pub meetings: Arc<RwLock<HashMap<String, Meeting>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

//! Roster and message-log snapshots for the active meeting.

#[cfg(test)]
#[path = "meeting_test.rs"]
mod meeting_test;

use crate::net::types::{ChatMessage, MeetingSnapshot};

/// The latest roster and message log as reported by the service.
///
/// Both collections are replaced wholesale on every applied poll; nothing is
/// diffed, re-sorted, or deduplicated, so displayed content always equals
/// one server response. Fetches are sequence-numbered so that a response
/// completing out of order cannot overwrite a newer snapshot.
#[derive(Clone, Debug, Default)]
pub struct MeetingState {
    /// Member display names, in the order the server returned them.
    pub members: Vec<String>,
    /// Message log, in the order the server returned it.
    pub messages: Vec<ChatMessage>,
    next_seq: u64,
    applied_seq: u64,
}

impl MeetingState {
    /// Reserve a sequence number for a fetch that is about to be issued.
    pub fn begin_fetch(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Replace both snapshots with a completed fetch's response.
    ///
    /// Returns `false` (leaving state untouched) when a fetch issued later
    /// has already been applied.
    pub fn apply_snapshot(&mut self, seq: u64, snapshot: MeetingSnapshot) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.members = snapshot.members;
        self.messages = snapshot.messages;
        true
    }

    /// Drop all snapshot data, e.g. when the session ends.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

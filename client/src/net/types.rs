//! Wire DTOs for the meeting service's JSON API.
//!
//! DESIGN
//! ======
//! Response fields are all optional so a decode never fails on the error
//! shape of an endpoint; classifying a decoded reply into an outcome is a
//! pure method on each type, which keeps the branching testable without a
//! browser.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Fallback shown when the service reports failure without an `error` field.
const GENERIC_ERROR: &str = "unknown error";

fn error_text(error: Option<String>) -> String {
    error.unwrap_or_else(|| GENERIC_ERROR.to_owned())
}

/// One chat message as stored and returned by the service.
///
/// `time` is a preformatted clock string; the client displays it verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub content: String,
    pub time: String,
}

/// Reply to `GET /api/messages`: the full roster and message log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MeetingSnapshot {
    pub members: Vec<String>,
    pub messages: Vec<ChatMessage>,
}

/// Reply to `GET /api/check_session`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SessionCheck {
    pub status: Option<String>,
    pub member_name: Option<String>,
    pub meeting_name: Option<String>,
}

/// What a session check means for this browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The service already recognizes a membership; resume directly.
    Active { member_name: String, meeting_name: String },
    /// The meeting exists but this browser holds no membership.
    NeedsJoin { meeting_name: String },
    /// The meeting does not exist (or the reply was malformed).
    Unknown,
}

impl SessionCheck {
    /// Classify the reply. Any status other than the two recognized ones,
    /// including an absent status, means the meeting is unknown.
    #[must_use]
    pub fn outcome(self) -> SessionOutcome {
        match self.status.as_deref() {
            Some("logged_in") => match (self.member_name, self.meeting_name) {
                (Some(member_name), Some(meeting_name)) => SessionOutcome::Active { member_name, meeting_name },
                _ => SessionOutcome::Unknown,
            },
            Some("not_logged_in") => SessionOutcome::NeedsJoin {
                meeting_name: self.meeting_name.unwrap_or_default(),
            },
            _ => SessionOutcome::Unknown,
        }
    }
}

/// Reply to `POST /api/create`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateReply {
    pub meeting_id: Option<String>,
    pub meeting_name: Option<String>,
    pub error: Option<String>,
}

impl CreateReply {
    /// The allocated meeting identifier, or the failure text to show.
    ///
    /// # Errors
    ///
    /// Returns the server-supplied `error` (or a generic fallback) when no
    /// `meeting_id` was allocated.
    pub fn into_outcome(self) -> Result<String, String> {
        match self.meeting_id {
            Some(meeting_id) => Ok(meeting_id),
            None => Err(error_text(self.error)),
        }
    }
}

/// Reply to `POST /api/join`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct JoinReply {
    pub status: Option<String>,
    pub meeting_name: Option<String>,
    pub error: Option<String>,
}

impl JoinReply {
    /// The joined meeting's display name, or the failure text to show.
    ///
    /// # Errors
    ///
    /// Returns the server-supplied `error` (or a generic fallback) when the
    /// status is anything but `"success"`.
    pub fn into_outcome(self) -> Result<String, String> {
        if self.status.as_deref() == Some("success") {
            Ok(self.meeting_name.unwrap_or_default())
        } else {
            Err(error_text(self.error))
        }
    }
}

/// Reply to `POST /api/leave` and `POST /api/send`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AckReply {
    pub status: Option<String>,
    pub error: Option<String>,
}

impl AckReply {
    /// Success, or the failure text to show.
    ///
    /// # Errors
    ///
    /// Returns the server-supplied `error` (or a generic fallback) when the
    /// status is anything but `"success"`.
    pub fn into_outcome(self) -> Result<(), String> {
        if self.status.as_deref() == Some("success") {
            Ok(())
        } else {
            Err(error_text(self.error))
        }
    }
}

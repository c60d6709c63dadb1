//! Meeting service - room lifecycle, membership, and the message log.
//!
//! ERROR HANDLING
//! ==============
//! Routes translate `MeetingError` variants into HTTP statuses; the variant
//! display text becomes the `error` field of the response body.

#[cfg(test)]
#[path = "meeting_test.rs"]
mod meeting_test;

use time::OffsetDateTime;
use time::macros::format_description;
use uuid::Uuid;

use crate::state::{AppState, Meeting, StoredMessage};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MeetingError {
    #[error("meeting not found")]
    MeetingNotFound,
    #[error("member not found")]
    MemberNotFound,
}

/// What a session check learned about the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// The cookie names a current member of this meeting.
    LoggedIn { member_name: String, meeting_name: String },
    /// The meeting exists but the caller is not a recognized member.
    NotLoggedIn { meeting_name: String },
    /// No such meeting.
    NoSession,
}

fn format_clock(at: OffsetDateTime) -> String {
    let format = format_description!("[hour]:[minute]:[second]");
    at.format(&format).unwrap_or_default()
}

/// Current wall clock as the `HH:MM:SS` string stored on messages.
fn clock_now() -> String {
    format_clock(OffsetDateTime::now_utc())
}

/// Allocate a meeting with the caller as its sole initial member and return
/// the freshly minted identifier.
pub async fn create(state: &AppState, meeting_name: String, member_name: String) -> String {
    let meeting_id = Uuid::new_v4().to_string();
    let mut meetings = state.meetings.write().await;
    meetings.insert(
        meeting_id.clone(),
        Meeting { name: meeting_name, members: vec![member_name], messages: Vec::new() },
    );
    meeting_id
}

/// Register a member with an existing meeting and return the meeting's
/// display name. Rejoining under an existing name keeps one membership.
///
/// # Errors
///
/// `MeetingNotFound` if no such meeting exists.
pub async fn join(state: &AppState, meeting_id: &str, member_name: &str) -> Result<String, MeetingError> {
    let mut meetings = state.meetings.write().await;
    let meeting = meetings.get_mut(meeting_id).ok_or(MeetingError::MeetingNotFound)?;
    if !meeting.members.iter().any(|m| m == member_name) {
        meeting.members.push(member_name.to_owned());
    }
    Ok(meeting.name.clone())
}

/// Resolve what the caller's cookie value means for this meeting.
pub async fn session_status(state: &AppState, meeting_id: &str, cookie_member: Option<&str>) -> SessionStatus {
    let meetings = state.meetings.read().await;
    let Some(meeting) = meetings.get(meeting_id) else {
        return SessionStatus::NoSession;
    };
    match cookie_member {
        Some(member) if meeting.members.iter().any(|m| m == member) => SessionStatus::LoggedIn {
            member_name: member.to_owned(),
            meeting_name: meeting.name.clone(),
        },
        _ => SessionStatus::NotLoggedIn { meeting_name: meeting.name.clone() },
    }
}

/// The meeting's current roster and message log.
///
/// # Errors
///
/// `MeetingNotFound` if no such meeting exists.
pub async fn snapshot(state: &AppState, meeting_id: &str) -> Result<(Vec<String>, Vec<StoredMessage>), MeetingError> {
    let meetings = state.meetings.read().await;
    let meeting = meetings.get(meeting_id).ok_or(MeetingError::MeetingNotFound)?;
    Ok((meeting.members.clone(), meeting.messages.clone()))
}

/// Append a message from a current member, stamping the arrival clock.
///
/// # Errors
///
/// `MeetingNotFound` if no such meeting exists; `MemberNotFound` if the
/// sender holds no membership.
pub async fn send(state: &AppState, meeting_id: &str, member_name: &str, content: String) -> Result<(), MeetingError> {
    let mut meetings = state.meetings.write().await;
    let meeting = meetings.get_mut(meeting_id).ok_or(MeetingError::MeetingNotFound)?;
    if !meeting.members.iter().any(|m| m == member_name) {
        return Err(MeetingError::MemberNotFound);
    }
    meeting.messages.push(StoredMessage {
        sender: member_name.to_owned(),
        content,
        time: clock_now(),
    });
    Ok(())
}

/// Remove a member from the meeting. Removing a name that is not a member
/// succeeds anyway; the meeting itself must exist.
///
/// # Errors
///
/// `MeetingNotFound` if no such meeting exists.
pub async fn leave(state: &AppState, meeting_id: &str, member_name: &str) -> Result<(), MeetingError> {
    let mut meetings = state.meetings.write().await;
    let meeting = meetings.get_mut(meeting_id).ok_or(MeetingError::MeetingNotFound)?;
    meeting.members.retain(|m| m != member_name);
    Ok(())
}

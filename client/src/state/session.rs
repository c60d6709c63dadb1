//! Session identity and lifecycle for the current page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionState` value exists per page load, provided as a signal
//! context by the root component. Membership actions are the only writers of
//! the identity pair; the sync loop runs only while the pair is populated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::poller::PollHandle;

/// Where the session currently is in its lifecycle.
///
/// `Active` is the only phase in which the sync loop runs. `Resolving` is
/// transient and only occurs on meeting-reference routes while the status
/// query is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No meeting reference in the URL; the create panel is shown.
    #[default]
    Create,
    /// A reference exists and the one-shot status query is in flight.
    Resolving,
    /// The meeting exists but this browser holds no membership.
    Join,
    /// Membership established; chat is live and polling.
    Active,
}

/// The client's view of its own membership.
///
/// `meeting_id` and `member_name` are `None` until a membership action
/// succeeds, and from then on are always `Some` together. They are only ever
/// written as a pair, through [`SessionState::activate`] and
/// [`SessionState::clear`].
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    /// Server-assigned identifier of the joined meeting.
    pub meeting_id: Option<String>,
    /// Display name this browser is registered under.
    pub member_name: Option<String>,
    /// Display name of the meeting, shown as the chat title and on the
    /// join panel before a membership exists.
    pub meeting_name: Option<String>,
    /// Handle of the running sync loop. At most one live instance exists.
    pub poller: Option<PollHandle>,
}

impl SessionState {
    /// True once a membership action has populated the identity pair.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.meeting_id.is_some() && self.member_name.is_some()
    }

    /// Enter the active-chat state: set the identity pair atomically and
    /// record the meeting's display name.
    pub fn activate(&mut self, meeting_id: String, member_name: String, meeting_name: String) {
        self.meeting_id = Some(meeting_id);
        self.member_name = Some(member_name);
        self.meeting_name = Some(meeting_name);
        self.phase = SessionPhase::Active;
    }

    /// End the session: release the poll handle and clear the identity pair.
    pub fn clear(&mut self) {
        if let Some(handle) = self.poller.take() {
            handle.stop();
        }
        self.meeting_id = None;
        self.member_name = None;
        self.meeting_name = None;
        self.phase = SessionPhase::Create;
    }

    /// Install a fresh poll handle, releasing any prior one first so that at
    /// most one timer is ever live.
    pub fn install_poller(&mut self) -> PollHandle {
        if let Some(prev) = self.poller.take() {
            prev.stop();
        }
        let handle = PollHandle::new();
        self.poller = Some(handle.clone());
        handle
    }
}

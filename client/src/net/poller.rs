//! The sync loop: timed polling of the meeting snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one loop runs while a membership is active. Its liveness flag is
//! owned through [`PollHandle`]; releasing the handle is the only way the
//! loop stops. Fetch failures are logged and never stop it.
//!
//! Ticks fire every [`POLL_INTERVAL_SECS`] between fetch *initiations*: each
//! tick spawns its fetch as an independent task, so a slow response never
//! delays the next one. Responses apply through the sequence gate in
//! `MeetingState`, and only while the handle that issued them is still live.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::meeting::MeetingState;
use crate::state::session::SessionState;

/// Seconds between poll initiations.
pub const POLL_INTERVAL_SECS: u64 = 2;

/// Liveness handle for the running sync loop.
///
/// Clones share one flag; stopping any clone stops the loop at its next tick
/// and causes in-flight responses to be discarded.
#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl PollHandle {
    /// A fresh, live handle.
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Release the handle: the loop exits at its next tick and pending
    /// responses are dropped.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the sync loop for the active session.
///
/// Installs a fresh handle (releasing any prior one), fetches once
/// immediately, then keeps fetching on the fixed interval until the handle
/// is released.
pub fn start(session: RwSignal<SessionState>, meeting: RwSignal<MeetingState>) {
    let mut installed = None;
    session.update(|s| installed = Some(s.install_poller()));
    let Some(handle) = installed else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        loop {
            spawn_fetch(session, meeting, handle.clone());
            gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
            if !handle.is_live() {
                break;
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (meeting, handle);
}

/// One immediate out-of-band fetch, used after a successful send so the new
/// message shows without waiting for the next tick.
pub fn refresh_now(session: RwSignal<SessionState>, meeting: RwSignal<MeetingState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(handle) = session.get_untracked().poller else {
            return;
        };
        if handle.is_live() {
            spawn_fetch(session, meeting, handle);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, meeting);
}

#[cfg(feature = "hydrate")]
fn spawn_fetch(session: RwSignal<SessionState>, meeting: RwSignal<MeetingState>, handle: PollHandle) {
    let Some(meeting_id) = session.get_untracked().meeting_id else {
        return;
    };
    let mut seq = 0;
    meeting.update(|m| seq = m.begin_fetch());

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_meeting(&meeting_id).await {
            Ok(snapshot) => {
                // A response landing after teardown must not touch the UI.
                if handle.is_live() {
                    meeting.update(|m| {
                        m.apply_snapshot(seq, snapshot);
                    });
                }
            }
            Err(e) => leptos::logging::warn!("meeting poll failed: {e}"),
        }
    });
}

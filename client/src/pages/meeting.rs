//! Meeting page: resolve the session for a URL-referenced meeting, then
//! show the join panel or go straight to the chat room.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resolver runs exactly once per page load and is the only place a
//! status query is issued; it is never retried. Its fatal outcome (unknown
//! meeting, or a failed query) is the only path that abandons the page.

#[cfg(test)]
#[path = "meeting_test.rs"]
mod meeting_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_room::ChatRoom;
use crate::state::meeting::MeetingState;
use crate::state::session::{SessionPhase, SessionState};
use crate::util::dialog;

/// Validate join-form input: a member name, non-empty after trimming.
fn validate_join_input(member_name: &str) -> Result<String, &'static str> {
    let member_name = member_name.trim();
    if member_name.is_empty() {
        return Err("Member name is required.");
    }
    Ok(member_name.to_owned())
}

/// The `/{id}` route. Resolves the browser's membership status once, then
/// renders whichever of {join panel, chat room} the outcome calls for.
#[component]
pub fn MeetingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let meeting = expect_context::<RwSignal<MeetingState>>();
    let params = use_params_map();

    let meeting_ref = move || params.read().get("id");

    let member_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let resolved = RwSignal::new(false);

    // One status query per page load.
    Effect::new(move || {
        if resolved.get() {
            return;
        }
        let Some(meeting_id) = meeting_ref() else {
            return;
        };
        resolved.set(true);
        session.update(|s| s.phase = SessionPhase::Resolving);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(resolve_session(session, meeting, meeting_id));
        #[cfg(not(feature = "hydrate"))]
        let _ = (meeting, meeting_id);
    });

    let on_join = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let member = match validate_join_input(&member_name.get()) {
            Ok(member) => member,
            Err(message) => {
                dialog::alert(message);
                return;
            }
        };
        let Some(meeting_id) = meeting_ref() else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::join_meeting(&meeting_id, &member)
                .await
                .and_then(crate::net::types::JoinReply::into_outcome);
            match result {
                Ok(meeting_label) => {
                    session.update(|s| s.activate(meeting_id, member, meeting_label));
                    crate::net::poller::start(session, meeting);
                }
                Err(e) => dialog::alert(&format!("Failed to join meeting: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (meeting_id, member, meeting);
    };

    view! {
        <div class="meeting-route">
            {move || match session.get().phase {
                SessionPhase::Active => view! { <ChatRoom/> }.into_any(),
                SessionPhase::Join => {
                    view! {
                        <div class="panel-page">
                            <div class="panel-card">
                                <h1>{move || session.get().meeting_name.clone().unwrap_or_default()}</h1>
                                <p class="panel-card__subtitle">"Join this meeting"</p>
                                <form class="panel-form" on:submit=on_join>
                                    <input
                                        class="panel-input"
                                        type="text"
                                        placeholder="Your name"
                                        prop:value=move || member_name.get()
                                        on:input=move |ev| member_name.set(event_target_value(&ev))
                                    />
                                    <button class="panel-button" type="submit" disabled=move || busy.get()>
                                        "Join Meeting"
                                    </button>
                                </form>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                _ => view! { <div class="panel-page"><p>"Checking meeting..."</p></div> }.into_any(),
            }}
        </div>
    }
}

/// Drive the one-shot session resolution for `meeting_id`.
#[cfg(feature = "hydrate")]
async fn resolve_session(session: RwSignal<SessionState>, meeting: RwSignal<MeetingState>, meeting_id: String) {
    use crate::net::types::SessionOutcome;

    let reply = match crate::net::api::check_session(&meeting_id).await {
        Ok(reply) => reply,
        Err(e) => {
            leptos::logging::warn!("session check failed: {e}");
            dialog::alert("Session check failed.");
            crate::util::url::goto_root();
            return;
        }
    };

    match reply.outcome() {
        SessionOutcome::Active { member_name, meeting_name } => {
            session.update(|s| s.activate(meeting_id, member_name, meeting_name));
            crate::net::poller::start(session, meeting);
        }
        SessionOutcome::NeedsJoin { meeting_name } => {
            session.update(|s| {
                s.meeting_name = Some(meeting_name);
                s.phase = SessionPhase::Join;
            });
        }
        SessionOutcome::Unknown => {
            dialog::alert("Meeting not found.");
            crate::util::url::goto_root();
        }
    }
}

//! Active-chat screen: title, roster, message log, composer, leave button.

use leptos::prelude::*;

use crate::components::member_list::MemberList;
use crate::components::message_list::MessageList;
use crate::state::meeting::MeetingState;
use crate::state::session::SessionState;
use crate::util::dialog;

/// The chat room shown while a membership is active.
///
/// Sending performs one immediate out-of-band snapshot fetch on success, so
/// the new message appears without waiting for the next poll tick. Leaving
/// asks for confirmation, and only a confirmed, successful leave stops the
/// sync loop and abandons the page.
#[component]
pub fn ChatRoom() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let meeting = expect_context::<RwSignal<MeetingState>>();

    let input = RwSignal::new(String::new());

    let do_send = move || {
        let text = input.get();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let text = text.to_owned();
        let state = session.get_untracked();
        let (Some(meeting_id), Some(member)) = (state.meeting_id, state.member_name) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_message(&meeting_id, &member, &text)
                .await
                .and_then(crate::net::types::AckReply::into_outcome);
            match result {
                Ok(()) => {
                    input.set(String::new());
                    crate::net::poller::refresh_now(session, meeting);
                }
                Err(e) => dialog::alert(&format!("Failed to send message: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (meeting_id, member, text, meeting);
    };

    let on_send_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_leave = move |_| {
        if !dialog::confirm("Leave this meeting?") {
            return;
        }
        let state = session.get_untracked();
        let (Some(meeting_id), Some(member)) = (state.meeting_id, state.member_name) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::leave_meeting(&meeting_id, &member)
                .await
                .and_then(crate::net::types::AckReply::into_outcome);
            match result {
                Ok(()) => {
                    // Stop polling and drop the identity pair before leaving
                    // the page; a failed leave touches neither.
                    session.update(|s| s.clear());
                    meeting.update(|m| m.clear());
                    crate::util::url::goto_root();
                }
                Err(e) => dialog::alert(&format!("Failed to leave meeting: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (meeting_id, member, meeting);
    };

    let placeholder = move || {
        let member = session
            .get()
            .member_name
            .unwrap_or_else(|| "you".to_owned());
        format!("Message as {member}...")
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-room">
            <header class="chat-room__header">
                <h1 class="chat-room__title">
                    {move || session.get().meeting_name.clone().unwrap_or_default()}
                </h1>
                <button class="btn chat-room__leave" on:click=on_leave>
                    "Leave Meeting"
                </button>
            </header>

            <div class="chat-room__body">
                <MemberList/>
                <MessageList/>
            </div>

            <div class="chat-room__input-row">
                <input
                    class="chat-room__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-room__send" on:click=on_send_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

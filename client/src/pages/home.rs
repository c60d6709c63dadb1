//! Landing page: create a meeting and become its first member.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::chat_room::ChatRoom;
use crate::state::meeting::MeetingState;
use crate::state::session::SessionState;
use crate::util::dialog;

/// Validate create-form input. Both names must be non-empty after trimming;
/// no other format constraints apply.
fn validate_create_input(meeting_name: &str, member_name: &str) -> Result<(String, String), &'static str> {
    let meeting_name = meeting_name.trim();
    let member_name = member_name.trim();
    if meeting_name.is_empty() || member_name.is_empty() {
        return Err("Meeting name and member name are required.");
    }
    Ok((meeting_name.to_owned(), member_name.to_owned()))
}

/// Create panel for the `/` route, where no meeting reference exists.
/// No network call happens until the form passes validation; a successful
/// create adopts the allocated identifier into the URL in place and
/// switches to the chat room without navigating.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let meeting = expect_context::<RwSignal<MeetingState>>();

    let meeting_name = RwSignal::new(String::new());
    let member_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (meeting_label, member) = match validate_create_input(&meeting_name.get(), &member_name.get()) {
            Ok(input) => input,
            Err(message) => {
                dialog::alert(message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_meeting(&meeting_label, &member)
                .await
                .and_then(crate::net::types::CreateReply::into_outcome);
            match result {
                Ok(meeting_id) => {
                    crate::util::url::push_path(&crate::util::url::meeting_path(&meeting_id));
                    session.update(|s| s.activate(meeting_id, member, meeting_label));
                    crate::net::poller::start(session, meeting);
                }
                Err(e) => dialog::alert(&format!("Failed to create meeting: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (meeting_label, member, meeting);
    };

    view! {
        <Show
            when=move || session.get().is_active()
            fallback=move || {
                view! {
                    <div class="panel-page">
                        <div class="panel-card">
                            <h1>"Huddle"</h1>
                            <p class="panel-card__subtitle">"Start a meeting"</p>
                            <form class="panel-form" on:submit=on_create>
                                <input
                                    class="panel-input"
                                    type="text"
                                    placeholder="Meeting name"
                                    prop:value=move || meeting_name.get()
                                    on:input=move |ev| meeting_name.set(event_target_value(&ev))
                                />
                                <input
                                    class="panel-input"
                                    type="text"
                                    placeholder="Your name"
                                    prop:value=move || member_name.get()
                                    on:input=move |ev| member_name.set(event_target_value(&ev))
                                />
                                <button class="panel-button" type="submit" disabled=move || busy.get()>
                                    "Create Meeting"
                                </button>
                            </form>
                        </div>
                    </div>
                }
            }
        >
            <ChatRoom/>
        </Show>
    }
}

//! Message log with own/other styling and stick-to-bottom scrolling.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::state::meeting::MeetingState;
use crate::state::session::SessionState;

/// Messages from the local member get distinct styling; identity is by
/// display name only, so two members with the same name are
/// indistinguishable.
fn message_class(sender: &str, local: Option<&str>) -> &'static str {
    if local == Some(sender) {
        "message message--own"
    } else {
        "message message--other"
    }
}

/// Message log panel. Content is a pure projection of the latest snapshot;
/// each applied poll replaces it entirely.
#[component]
pub fn MessageList() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let meeting = expect_context::<RwSignal<MeetingState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view as the log grows.
    Effect::new(move || {
        let _ = meeting.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="message-list" node_ref=messages_ref>
            {move || {
                let local = session.get().member_name;
                let messages = meeting.get().messages;
                if messages.is_empty() {
                    return view! { <div class="message-list__empty">"No messages yet"</div> }.into_any();
                }

                messages
                    .into_iter()
                    .map(|msg| {
                        let class = message_class(&msg.sender, local.as_deref());
                        view! {
                            <div class=class>
                                <div class="message__sender">{msg.sender}</div>
                                <div class="message__content">{msg.content}</div>
                                <div class="message__time">{msg.time}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

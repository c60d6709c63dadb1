//! Live member roster.

use leptos::prelude::*;

use crate::state::meeting::MeetingState;

/// Roster panel. Rebuilt wholesale from the latest snapshot on every applied
/// poll, so departed members never linger.
#[component]
pub fn MemberList() -> impl IntoView {
    let meeting = expect_context::<RwSignal<MeetingState>>();

    view! {
        <aside class="member-list">
            <h2 class="member-list__title">"Members"</h2>
            <ul class="member-list__items">
                {move || {
                    meeting
                        .get()
                        .members
                        .into_iter()
                        .map(|name| view! { <li class="member-list__item">{name}</li> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </aside>
    }
}

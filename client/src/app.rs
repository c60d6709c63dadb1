//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, meeting::MeetingPage};
use crate::state::{meeting::MeetingState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session and meeting state contexts and sets up
/// client-side routing. The path itself carries the meeting reference:
/// `/` has none (create panel), `/{id}` names a meeting to resolve.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let meeting = RwSignal::new(MeetingState::default());

    provide_context(session);
    provide_context(meeting);

    view! {
        <Stylesheet id="leptos" href="/pkg/huddle.css"/>
        <Title text="Huddle"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=ParamSegment("id") view=MeetingPage/>
            </Routes>
        </Router>
    }
}

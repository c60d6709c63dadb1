//! Meeting URL helpers.
//!
//! The browser path, stripped of its leading separator, is the meeting
//! reference. A successful create adopts the freshly allocated identifier by
//! rewriting the path in place, without navigation or reload.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// Canonical path for a meeting identifier.
#[must_use]
pub fn meeting_path(meeting_id: &str) -> String {
    format!("/{meeting_id}")
}

/// Rewrite the visible URL in place via the history API. No reload, no
/// router navigation. No-op outside the browser.
pub fn push_path(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = path;
}

/// Hard-navigate to the application root, abandoning the page.
pub fn goto_root() {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

//! Blocking user notification wrappers over the browser dialogs.
//!
//! Membership actions report their own failures through these; background
//! poll failures never do.

/// Blocking alert. No-op outside the browser.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = message;
}

/// Blocking confirmation prompt. Always declines outside the browser.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

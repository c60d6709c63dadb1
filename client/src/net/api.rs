//! HTTP operations against the meeting service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, String>`; an `Err` is a transport or
//! decode failure. Service-level failure (an `error` field in the body)
//! still decodes as `Ok` and is classified by the reply types, mirroring
//! how the service answers non-2xx statuses with JSON bodies.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AckReply, CreateReply, JoinReply, MeetingSnapshot, SessionCheck};

#[cfg(any(test, feature = "hydrate"))]
fn check_session_endpoint(meeting_id: &str) -> String {
    format!("/api/check_session?meeting_id={meeting_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(meeting_id: &str) -> String {
    format!("/api/messages?meeting_id={meeting_id}")
}

/// One-shot membership status query for a meeting reference.
///
/// # Errors
///
/// Returns an error string on transport or decode failure; callers treat
/// that as the fatal resolution outcome.
pub async fn check_session(meeting_id: &str) -> Result<SessionCheck, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = check_session_endpoint(meeting_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<SessionCheck>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = meeting_id;
        Err("not available on server".to_owned())
    }
}

/// Allocate a new meeting with the caller as its first member.
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn create_meeting(meeting_name: &str, member_name: &str) -> Result<CreateReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "meeting_name": meeting_name, "member_name": member_name });
        let resp = gloo_net::http::Request::post("/api/create")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<CreateReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (meeting_name, member_name);
        Err("not available on server".to_owned())
    }
}

/// Register the caller as a member of an existing meeting.
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn join_meeting(meeting_id: &str, member_name: &str) -> Result<JoinReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "meeting_id": meeting_id, "member_name": member_name });
        let resp = gloo_net::http::Request::post("/api/join")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<JoinReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (meeting_id, member_name);
        Err("not available on server".to_owned())
    }
}

/// Deregister the caller from the meeting.
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn leave_meeting(meeting_id: &str, member_name: &str) -> Result<AckReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "meeting_id": meeting_id, "member_name": member_name });
        let resp = gloo_net::http::Request::post("/api/leave")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<AckReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (meeting_id, member_name);
        Err("not available on server".to_owned())
    }
}

/// Append a message to the meeting's log.
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn send_message(meeting_id: &str, member_name: &str, message: &str) -> Result<AckReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "meeting_id": meeting_id,
            "member_name": member_name,
            "message": message
        });
        let resp = gloo_net::http::Request::post("/api/send")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<AckReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (meeting_id, member_name, message);
        Err("not available on server".to_owned())
    }
}

/// Fetch the current roster and message log.
///
/// # Errors
///
/// Returns an error string on transport or decode failure; the sync loop
/// logs it and keeps the previous snapshots.
pub async fn fetch_meeting(meeting_id: &str) -> Result<MeetingSnapshot, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = messages_endpoint(meeting_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<MeetingSnapshot>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = meeting_id;
        Err("not available on server".to_owned())
    }
}

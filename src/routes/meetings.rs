//! Meeting API routes - create/join/leave/send, the session check, and the
//! poll endpoint.
//!
//! Session recognition is a per-meeting cookie `meeting_{id}` holding the
//! member's display name, set on create/join and cleared on leave. Failure
//! bodies always carry an `error` string so the client can surface the text
//! verbatim.

#[cfg(test)]
#[path = "meetings_test.rs"]
mod meetings_test;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use serde_json::json;

use crate::services::meeting::{self, MeetingError, SessionStatus};
use crate::state::AppState;

fn session_cookie_name(meeting_id: &str) -> String {
    format!("meeting_{meeting_id}")
}

fn session_cookie(meeting_id: &str, member_name: &str) -> Cookie<'static> {
    Cookie::build((session_cookie_name(meeting_id), member_name.to_owned()))
        .path("/")
        .http_only(true)
        .build()
}

fn expired_session_cookie(meeting_id: &str) -> Cookie<'static> {
    Cookie::build((session_cookie_name(meeting_id), ""))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::ZERO)
        .build()
}

fn meeting_error_to_status(err: &MeetingError) -> StatusCode {
    match err {
        MeetingError::MeetingNotFound | MeetingError::MemberNotFound => StatusCode::NOT_FOUND,
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Missing and empty request fields are treated alike.
fn presence(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub meeting_name: Option<String>,
    pub member_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MembershipRequest {
    pub meeting_id: Option<String>,
    pub member_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub meeting_id: Option<String>,
    pub member_name: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MeetingQuery {
    pub meeting_id: Option<String>,
}

/// `POST /api/create` - allocate a meeting, register the caller as its
/// first member, and set the session cookie.
pub async fn create_meeting(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CreateRequest>,
) -> Response {
    let (Some(meeting_name), Some(member_name)) = (presence(body.meeting_name), presence(body.member_name)) else {
        return error_response(StatusCode::BAD_REQUEST, "meeting name and member name are required");
    };

    let meeting_id = meeting::create(&state, meeting_name.clone(), member_name.clone()).await;
    tracing::info!(%meeting_id, "meeting created");

    let jar = jar.add(session_cookie(&meeting_id, &member_name));
    (jar, Json(json!({ "meeting_id": meeting_id, "meeting_name": meeting_name }))).into_response()
}

/// `POST /api/join` - register the caller with an existing meeting and set
/// the session cookie.
pub async fn join_meeting(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<MembershipRequest>,
) -> Response {
    let (Some(meeting_id), Some(member_name)) = (presence(body.meeting_id), presence(body.member_name)) else {
        return error_response(StatusCode::BAD_REQUEST, "meeting id and member name are required");
    };

    match meeting::join(&state, &meeting_id, &member_name).await {
        Ok(meeting_name) => {
            let jar = jar.add(session_cookie(&meeting_id, &member_name));
            (jar, Json(json!({ "status": "success", "meeting_name": meeting_name }))).into_response()
        }
        Err(err) => error_response(meeting_error_to_status(&err), &err.to_string()),
    }
}

/// `POST /api/leave` - deregister the caller and clear the session cookie.
pub async fn leave_meeting(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<MembershipRequest>,
) -> Response {
    let (Some(meeting_id), Some(member_name)) = (presence(body.meeting_id), presence(body.member_name)) else {
        return error_response(StatusCode::BAD_REQUEST, "meeting id and member name are required");
    };

    match meeting::leave(&state, &meeting_id, &member_name).await {
        Ok(()) => {
            let jar = jar.add(expired_session_cookie(&meeting_id));
            (jar, Json(json!({ "status": "success" }))).into_response()
        }
        Err(err) => error_response(meeting_error_to_status(&err), &err.to_string()),
    }
}

/// `POST /api/send` - append a message from a current member.
pub async fn send_message(State(state): State<AppState>, Json(body): Json<SendRequest>) -> Response {
    let (Some(meeting_id), Some(member_name), Some(message)) =
        (presence(body.meeting_id), presence(body.member_name), presence(body.message))
    else {
        return error_response(StatusCode::BAD_REQUEST, "meeting id, member name, and message are required");
    };

    match meeting::send(&state, &meeting_id, &member_name, message).await {
        Ok(()) => Json(json!({ "status": "success" })).into_response(),
        Err(err) => error_response(meeting_error_to_status(&err), &err.to_string()),
    }
}

/// `GET /api/check_session` - resolve whether this browser already holds a
/// membership in the named meeting.
pub async fn check_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<MeetingQuery>,
) -> Response {
    let Some(meeting_id) = presence(query.meeting_id) else {
        return Json(json!({ "status": "no_session" })).into_response();
    };

    let cookie_member = jar
        .get(&session_cookie_name(&meeting_id))
        .map(|cookie| cookie.value().to_owned());

    match meeting::session_status(&state, &meeting_id, cookie_member.as_deref()).await {
        SessionStatus::LoggedIn { member_name, meeting_name } => Json(json!({
            "status": "logged_in",
            "member_name": member_name,
            "meeting_name": meeting_name,
        }))
        .into_response(),
        SessionStatus::NotLoggedIn { meeting_name } => Json(json!({
            "status": "not_logged_in",
            "meeting_name": meeting_name,
        }))
        .into_response(),
        SessionStatus::NoSession => Json(json!({ "status": "no_session" })).into_response(),
    }
}

/// `GET /api/messages` - the roster and message log for one meeting.
pub async fn get_messages(State(state): State<AppState>, Query(query): Query<MeetingQuery>) -> Response {
    let Some(meeting_id) = presence(query.meeting_id) else {
        return error_response(StatusCode::NOT_FOUND, "meeting not found");
    };

    match meeting::snapshot(&state, &meeting_id).await {
        Ok((members, messages)) => Json(json!({ "members": members, "messages": messages })).into_response(),
        Err(err) => error_response(meeting_error_to_status(&err), &err.to_string()),
    }
}

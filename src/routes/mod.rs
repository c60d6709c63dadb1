//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the JSON meeting API and the Leptos SSR frontend under a single
//! Axum router. Page routes (`/` and `/{meeting_id}`) render the app shell;
//! the compiled WASM bundle is served from `/pkg`.

pub mod meetings;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes backing the client's session, membership, and sync calls.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/create", post(meetings::create_meeting))
        .route("/api/join", post(meetings::join_meeting))
        .route("/api/leave", post(meetings::leave_meeting))
        .route("/api/send", post(meetings::send_message))
        .route("/api/check_session", get(meetings::check_session))
        .route("/api/messages", get(meetings::get_messages))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by any [`UserService`]. Every route is
//! wrapped in request tracing and panic recovery; TLS and transport concerns
//! are the caller's responsibility.
//!
//! # Serving
//!
//! ```rust,ignore
//! let app = roster_api::api_router(Arc::new(service));
//! axum::serve(listener, app).await?;
//! ```

pub mod dto;
pub mod error;
pub mod health;
pub mod openapi;
pub mod users;
pub mod validation;

use std::sync::Arc;

use axum::{Router, body::Body, http::Request, routing::get};
use roster_core::UserService;
use tower_http::{
  LatencyUnit,
  catch_panic::CatchPanicLayer,
  trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub use error::ApiError;

/// Build the complete API router for `service`.
///
/// The returned `Router<()>` can be served directly or nested into a parent
/// router regardless of its own state type.
pub fn api_router(service: Arc<dyn UserService>) -> Router<()> {
  let trace = TraceLayer::new_for_http()
    .make_span_with(|req: &Request<Body>| {
      let user_agent = req
        .headers()
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
      tracing::info_span!(
        "http_request",
        method = %req.method(),
        path = %req.uri().path(),
        user_agent = %user_agent
      )
    })
    .on_response(
      DefaultOnResponse::new()
        .level(Level::INFO)
        .latency_unit(LatencyUnit::Millis),
    );

  Router::new()
    .route("/health", get(health::handler))
    .route("/openapi.json", get(openapi::handler))
    // Users
    .route("/users", get(users::list).post(users::create))
    .route(
      "/users/{id}",
      get(users::get_one).put(users::update).delete(users::delete),
    )
    .layer(CatchPanicLayer::custom(error::panic_response))
    .layer(trace)
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────

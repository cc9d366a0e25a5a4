//! HTTP layer for the recruiting example API.
//!
//! Exposes an axum [`Router`] serving the two mock endpoints at `/` and, by
//! default, again under `/recruiting/exampleApi`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/get-user-info` | Usage guide |
//! | `POST` | `/get-user-info` | `bland-api-key` header; body `{first_name, last_name}` |
//! | `GET`  | `/book-appointment` | Usage guide |
//! | `POST` | `/book-appointment` | `bland-api-key` header; body adds `interview_date`, `interview_time` |
//!
//! Every response, including 404/405 and caught panics, is a JSON
//! [`recruit_core::Envelope`].

pub mod auth;
pub mod error;
pub mod handlers;
pub mod settings;

pub use error::ApiError;
pub use settings::ServerConfig;

use std::{any::Any, sync::Arc};

use axum::{
  Router,
  response::{IntoResponse, Response},
  routing::get,
};
use recruit_core::key::{EmptyKey, KeyPolicy};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use handlers::{applicant, appointment, fallback, usage};

pub const GET_USER_INFO_PATH: &str = "/get-user-info";
pub const BOOK_APPOINTMENT_PATH: &str = "/book-appointment";

// ─── Application state ────────────────────────────────────────────────────────

/// Shared, read-only state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub keys:   Arc<dyn KeyPolicy>,
  pub config: Arc<ServerConfig>,
}

impl AppState {
  /// Fails if the configured key policy cannot be built.
  pub fn new(config: ServerConfig) -> Result<Self, EmptyKey> {
    Ok(Self {
      keys:   Arc::from(config.key_policy()?),
      config: Arc::new(config),
    })
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

fn endpoints() -> Router<AppState> {
  Router::new()
    .route(
      GET_USER_INFO_PATH,
      get(usage::get_user_info).post(applicant::handler),
    )
    .route(
      BOOK_APPOINTMENT_PATH,
      get(usage::book_appointment).post(appointment::handler),
    )
    .method_not_allowed_fallback(fallback::method_not_allowed)
}

/// Build the full application router for `state`.
pub fn router(state: AppState) -> Router {
  let mut app = endpoints();
  if let Some(prefix) = state.config.mount_prefix() {
    app = app.nest(&prefix, endpoints());
  }
  with_layers(app.fallback(fallback::not_found).with_state(state))
}

fn with_layers(app: Router) -> Router {
  app
    .layer(CatchPanicLayer::custom(panic_response))
    .layer(TraceLayer::new_for_http())
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
  let detail = panic
    .downcast_ref::<String>()
    .map(String::as_str)
    .or_else(|| panic.downcast_ref::<&str>().copied())
    .unwrap_or("non-string panic payload");
  ApiError::Unexpected(format!("handler panicked: {detail}")).into_response()
}

// ─── Integration tests ────────────────────────────────────────────────────────

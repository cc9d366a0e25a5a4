//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error becomes an [`Envelope`] with `data: null`. Internal details
//! are logged and never sent to the caller.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use recruit_core::{Envelope, ErrorKind, ValidationError};
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] recruit_core::Error),

  #[error("no endpoint at {0}")]
  NotFound(String),

  #[error("method {method} not allowed on {path}")]
  MethodNotAllowed { method: String, path: String },

  /// Anything else that went wrong; the string is for the log only.
  #[error("unexpected error: {0}")]
  Unexpected(String),
}

impl ApiError {
  fn status(&self) -> StatusCode {
    let code = match self {
      ApiError::Core(e) => e.status(),
      ApiError::NotFound(_) => ErrorKind::NotFound.status(),
      ApiError::MethodNotAllowed { .. } => ErrorKind::MethodNotAllowed.status(),
      ApiError::Unexpected(_) => ErrorKind::UnexpectedError.status(),
    };
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
  }

  fn into_errors(self) -> Vec<ValidationError> {
    match self {
      ApiError::Core(e) => e.into_errors(),
      ApiError::NotFound(path) => vec![ValidationError::new(
        ErrorKind::NotFound,
        format!("No endpoint at {path}"),
      )],
      ApiError::MethodNotAllowed { method, path } => vec![ValidationError::new(
        ErrorKind::MethodNotAllowed,
        format!("{method} is not supported on {path}; use GET or POST"),
      )],
      ApiError::Unexpected(_) => vec![ValidationError::unexpected()],
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      ApiError::Core(recruit_core::Error::Validation(errors)) => {
        tracing::debug!(count = errors.len(), "request failed validation");
      }
      ApiError::Core(
        e @ (recruit_core::Error::MalformedBody(_)
        | recruit_core::Error::NotAnObject),
      ) => {
        tracing::error!(error = %e, "could not decode request body");
      }
      ApiError::Unexpected(detail) => {
        tracing::error!(%detail, "unexpected error while handling request");
      }
      _ => {}
    }
    let status = self.status();
    let envelope = Envelope::<()>::errors(self.into_errors());
    (status, Json(envelope)).into_response()
  }
}

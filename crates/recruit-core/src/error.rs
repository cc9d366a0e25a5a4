//! Error types for `recruit-core`.

use serde::Serialize;
use thiserror::Error;

/// Returned in place of internal details whenever something unexpected
/// happens while handling a request.
pub const SUPPORT_MESSAGE: &str = "An unexpected error occurred. Please try \
                                   again later or contact support@bland.ai.";

/// Returned when the `bland-api-key` header is missing or rejected.
pub const INVALID_API_KEY_MESSAGE: &str =
  "The API key provided is invalid or missing";

/// The public error vocabulary. Serialised as `SCREAMING_SNAKE_CASE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
  InvalidApiKey,
  MissingRequiredBody,
  InvalidNameFormat,
  InvalidDateFormat,
  InvalidTimeFormat,
  NotFound,
  MethodNotAllowed,
  UnexpectedError,
}

impl ErrorKind {
  /// HTTP status code carried by a response reporting this kind.
  pub const fn status(self) -> u16 {
    match self {
      ErrorKind::InvalidApiKey => 401,
      ErrorKind::MissingRequiredBody
      | ErrorKind::InvalidNameFormat
      | ErrorKind::InvalidDateFormat
      | ErrorKind::InvalidTimeFormat => 400,
      ErrorKind::NotFound => 404,
      ErrorKind::MethodNotAllowed => 405,
      ErrorKind::UnexpectedError => 500,
    }
  }
}

/// A single entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
  #[serde(rename = "error")]
  pub kind:    ErrorKind,
  pub message: String,
  /// Body field the error refers to, if any.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field:   Option<String>,
}

impl ValidationError {
  pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
    Self { kind, message: message.into(), field: None }
  }

  pub fn for_field(
    kind: ErrorKind,
    field: &str,
    message: impl Into<String>,
  ) -> Self {
    Self { kind, message: message.into(), field: Some(field.to_owned()) }
  }

  /// The generic `UNEXPECTED_ERROR` entry.
  pub fn unexpected() -> Self {
    Self::new(ErrorKind::UnexpectedError, SUPPORT_MESSAGE)
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid or missing api key")]
  InvalidApiKey,

  /// One or more body fields failed validation. Never empty.
  #[error("request failed validation ({} error(s))", .0.len())]
  Validation(Vec<ValidationError>),

  #[error("malformed request body: {0}")]
  MalformedBody(#[from] serde_json::Error),

  #[error("request body is not a JSON object")]
  NotAnObject,
}

impl Error {
  /// HTTP status code for this error.
  pub fn status(&self) -> u16 {
    match self {
      Error::InvalidApiKey => ErrorKind::InvalidApiKey.status(),
      Error::Validation(errors) => errors
        .first()
        .map_or(400, |e| e.kind.status()),
      Error::MalformedBody(_) | Error::NotAnObject => {
        ErrorKind::UnexpectedError.status()
      }
    }
  }

  /// Converts the error into the list exposed to callers. Parser details of
  /// malformed bodies are dropped in favour of [`SUPPORT_MESSAGE`].
  pub fn into_errors(self) -> Vec<ValidationError> {
    match self {
      Error::InvalidApiKey => vec![ValidationError::new(
        ErrorKind::InvalidApiKey,
        INVALID_API_KEY_MESSAGE,
      )],
      Error::Validation(errors) => errors,
      Error::MalformedBody(_) | Error::NotAnObject => {
        vec![ValidationError::unexpected()]
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

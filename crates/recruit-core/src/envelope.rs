//! The `{ "data": ..., "errors": ... }` wrapper used for every response.

use serde::Serialize;

use crate::ValidationError;

/// Exactly one of `data` and `errors` is `Some`; the other serialises as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
  pub data:   Option<T>,
  pub errors: Option<Vec<ValidationError>>,
}

impl<T> Envelope<T> {
  pub fn data(data: T) -> Self { Self { data: Some(data), errors: None } }

  pub fn errors(errors: Vec<ValidationError>) -> Self {
    Self { data: None, errors: Some(errors) }
  }
}

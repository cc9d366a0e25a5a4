//! JSON responses for unknown paths and unsupported methods.

use axum::{extract::OriginalUri, http::Method};

use crate::error::ApiError;

pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
  ApiError::NotFound(uri.path().to_owned())
}

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
  ApiError::MethodNotAllowed {
    method: method.to_string(),
    path:   uri.path().to_owned(),
  }
}

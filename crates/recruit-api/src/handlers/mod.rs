pub mod applicant;
pub mod appointment;
pub mod fallback;
pub mod usage;

use axum::extract::rejection::BytesRejection;
use bytes::Bytes;
use recruit_core::body::{self, Body};

use crate::error::ApiError;

/// Read and decode a JSON object body. A body that cannot be read at all
/// (e.g. over the size limit) is reported as unexpected.
fn decode(raw: Result<Bytes, BytesRejection>) -> Result<Body, ApiError> {
  let raw = raw.map_err(|e| ApiError::Unexpected(e.body_text()))?;
  Ok(body::parse(&raw)?)
}

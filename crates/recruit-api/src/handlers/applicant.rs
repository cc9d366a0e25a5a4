//! `POST /get-user-info`.

use axum::{Json, extract::rejection::BytesRejection};
use bytes::Bytes;
use recruit_core::{Envelope, applicant::{self, ApplicantRecord}};

use crate::{auth::Authorized, error::ApiError};

/// Body: `{"first_name":"john","last_name":"doe"}`.
pub async fn handler(
  _: Authorized,
  raw: Result<Bytes, BytesRejection>,
) -> Result<Json<Envelope<ApplicantRecord>>, ApiError> {
  let body = super::decode(raw)?;
  let record = applicant::get_user_info(&body)?;
  Ok(Json(Envelope::data(record)))
}

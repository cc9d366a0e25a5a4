//! `POST /book-appointment`.

use axum::{Json, extract::rejection::BytesRejection};
use bytes::Bytes;
use recruit_core::{Envelope, appointment::{self, Booking}};

use crate::{auth::Authorized, error::ApiError};

/// Body: `first_name`, `last_name`, `interview_date` (`DD-MM-YYYY`) and
/// `interview_time` (`HH:MM`). Nothing is persisted.
pub async fn handler(
  _: Authorized,
  raw: Result<Bytes, BytesRejection>,
) -> Result<Json<Envelope<Booking>>, ApiError> {
  let body = super::decode(raw)?;
  let booking = appointment::book_appointment(&body)?;
  tracing::info!(
    date = %booking.interview_date,
    time = %booking.interview_time,
    "interview booked"
  );
  Ok(Json(Envelope::data(booking)))
}

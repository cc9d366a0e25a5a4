//! `book-appointment`: validates an interview request and confirms it.
//!
//! Checks run in a fixed order and stop at the first failure: presence of all
//! four fields, name types, name formats, date, time. Nothing is stored and
//! no conflicts are checked.

use serde::Serialize;

use crate::{
  ErrorKind, Result,
  applicant::{FIRST_NAME, LAST_NAME, names},
  body::Body,
  checks::{Checks, Mode},
  format,
};

pub const INTERVIEW_DATE: &str = "interview_date";
pub const INTERVIEW_TIME: &str = "interview_time";

pub const BOOKED_MESSAGE: &str = "Appointment booked successfully";

const DATE_RULE: &str = "must be in DD-MM-YYYY format";
const TIME_RULE: &str = "must be in HH:MM 24-hour format";

/// Confirmation echoing the booked slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
  pub status:         &'static str,
  pub message:        &'static str,
  pub first_name:     String,
  pub last_name:      String,
  pub interview_date: String,
  pub interview_time: String,
}

/// Validates `body` and confirms the booking.
pub fn book_appointment(body: &Body) -> Result<Booking> {
  let mut checks = Checks::new(Mode::FirstError);

  let first = checks.require(body, FIRST_NAME);
  let last = checks.require(body, LAST_NAME);
  let date = checks.require(body, INTERVIEW_DATE);
  let time = checks.require(body, INTERVIEW_TIME);
  let (Some(first), Some(last), Some(date), Some(time)) =
    (first, last, date, time)
  else {
    return Err(checks.into_error());
  };

  let Some((first, last)) = names(&mut checks, first, last) else {
    return Err(checks.into_error());
  };

  let Some(date) =
    checks.string(date, INTERVIEW_DATE, ErrorKind::InvalidDateFormat)
  else {
    return Err(checks.into_error());
  };
  checks.matches(
    date,
    INTERVIEW_DATE,
    ErrorKind::InvalidDateFormat,
    format::is_date,
    DATE_RULE,
  );

  let Some(time) =
    checks.string(time, INTERVIEW_TIME, ErrorKind::InvalidTimeFormat)
  else {
    return Err(checks.into_error());
  };
  checks.matches(
    time,
    INTERVIEW_TIME,
    ErrorKind::InvalidTimeFormat,
    format::is_time,
    TIME_RULE,
  );

  checks.finish()?;

  Ok(Booking {
    status:         "success",
    message:        BOOKED_MESSAGE,
    first_name:     first.to_owned(),
    last_name:      last.to_owned(),
    interview_date: date.to_owned(),
    interview_time: time.to_owned(),
  })
}

#[cfg(test)]
mod tests {
  use serde_json::{Value, json};

  use super::*;
  use crate::{Error, ValidationError, body};

  fn valid() -> Value {
    json!({
      "first_name": "john",
      "last_name": "doe",
      "interview_date": "15-06-2023",
      "interview_time": "14:30",
    })
  }

  fn with(key: &str, value: Value) -> Value {
    let mut v = valid();
    v[key] = value;
    v
  }

  fn run(value: Value) -> Result<Booking> {
    let raw = serde_json::to_vec(&value).unwrap();
    book_appointment(&body::parse(&raw).unwrap())
  }

  fn only_error(value: Value) -> ValidationError {
    match run(value) {
      Err(Error::Validation(mut errors)) => {
        assert_eq!(errors.len(), 1, "short-circuit must report one error");
        errors.remove(0)
      }
      other => panic!("expected validation error, got {other:?}"),
    }
  }

  #[test]
  fn valid_booking_echoes_the_slot() {
    let booking = run(valid()).unwrap();
    assert_eq!(booking.status, "success");
    assert_eq!(booking.message, BOOKED_MESSAGE);
    assert_eq!(booking.first_name, "john");
    assert_eq!(booking.last_name, "doe");
    assert_eq!(booking.interview_date, "15-06-2023");
    assert_eq!(booking.interview_time, "14:30");
  }

  #[test]
  fn missing_field() {
    let mut v = valid();
    v.as_object_mut().unwrap().remove(INTERVIEW_TIME);
    let err = only_error(v);
    assert_eq!(err.kind, ErrorKind::MissingRequiredBody);
    assert_eq!(err.field.as_deref(), Some(INTERVIEW_TIME));
  }

  #[test]
  fn null_field_is_missing() {
    let err = only_error(with(INTERVIEW_DATE, Value::Null));
    assert_eq!(err.kind, ErrorKind::MissingRequiredBody);
  }

  #[test]
  fn bad_name() {
    assert_eq!(only_error(with(LAST_NAME, json!("Doe"))).kind, ErrorKind::InvalidNameFormat);
    assert_eq!(only_error(with(FIRST_NAME, json!(1))).kind, ErrorKind::InvalidNameFormat);
  }

  #[test]
  fn bad_date() {
    let err = only_error(with(INTERVIEW_DATE, json!("2023-06-15")));
    assert_eq!(err.kind, ErrorKind::InvalidDateFormat);
    assert_eq!(err.message, "interview_date must be in DD-MM-YYYY format");
    let err = only_error(with(INTERVIEW_DATE, json!(15062023)));
    assert_eq!(err.kind, ErrorKind::InvalidDateFormat);
  }

  #[test]
  fn bad_time() {
    let err = only_error(with(INTERVIEW_TIME, json!("25:00")));
    assert_eq!(err.kind, ErrorKind::InvalidTimeFormat);
    assert_eq!(err.message, "interview_time must be in HH:MM 24-hour format");
  }

  #[test]
  fn impossible_date_is_still_booked() {
    let booking = run(with(INTERVIEW_DATE, json!("31-02-2023"))).unwrap();
    assert_eq!(booking.interview_date, "31-02-2023");
  }

  #[test]
  fn checks_run_in_order() {
    // Every field is bad; only the name is reported.
    let err = only_error(json!({
      "first_name": "John",
      "last_name": "Doe",
      "interview_date": "bad",
      "interview_time": "bad",
    }));
    assert_eq!(err.kind, ErrorKind::InvalidNameFormat);
    assert_eq!(err.field.as_deref(), Some(FIRST_NAME));

    // Date before time.
    let err = only_error(json!({
      "first_name": "john",
      "last_name": "doe",
      "interview_date": "bad",
      "interview_time": "bad",
    }));
    assert_eq!(err.kind, ErrorKind::InvalidDateFormat);

    // Presence before format.
    let err = only_error(json!({ "first_name": "John", "interview_time": "99:99" }));
    assert_eq!(err.kind, ErrorKind::MissingRequiredBody);
    assert_eq!(err.field.as_deref(), Some(LAST_NAME));
  }
}

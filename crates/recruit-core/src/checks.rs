//! Ordered validation with a choice of failure policy.
//!
//! Operations run their checks in a fixed order through a [`Checks`]
//! accumulator. In [`Mode::FirstError`] the first failure halts every later
//! check. In [`Mode::AllErrors`] every check of a stage runs; operations stop
//! between stages once something has been recorded, since later stages depend
//! on earlier ones (a missing field cannot be format-checked).
//!
//! Each check returns `None`/`false` on failure *or* when halted, so whenever a
//! check fails to produce a value the accumulator is guaranteed to be
//! non-empty and [`Checks::into_error`] is a valid report.

use serde_json::Value;

use crate::{
  Error, ErrorKind, Result, ValidationError,
  body::{self, Body},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Stop at the first failing check.
  FirstError,
  /// Report every failure of the stage that failed.
  AllErrors,
}

#[derive(Debug)]
pub struct Checks {
  mode:   Mode,
  errors: Vec<ValidationError>,
}

impl Checks {
  pub const fn new(mode: Mode) -> Self { Self { mode, errors: Vec::new() } }

  fn halted(&self) -> bool {
    self.mode == Mode::FirstError && !self.errors.is_empty()
  }

  fn record(&mut self, error: ValidationError) {
    if !self.halted() {
      self.errors.push(error);
    }
  }

  /// The field must be present and non-null.
  pub fn require<'a>(&mut self, body: &'a Body, name: &str) -> Option<&'a Value> {
    if self.halted() {
      return None;
    }
    let value = body::field(body, name);
    if value.is_none() {
      self.record(ValidationError::for_field(
        ErrorKind::MissingRequiredBody,
        name,
        format!("{name} is required"),
      ));
    }
    value
  }

  /// The value must be a JSON string; otherwise `kind` is recorded.
  pub fn string<'a>(
    &mut self,
    value: &'a Value,
    name: &str,
    kind: ErrorKind,
  ) -> Option<&'a str> {
    if self.halted() {
      return None;
    }
    let s = value.as_str();
    if s.is_none() {
      self.record(ValidationError::for_field(
        kind,
        name,
        format!("{name} must be a string"),
      ));
    }
    s
  }

  /// `value` must satisfy `predicate`; otherwise `kind` is recorded with the
  /// message `"{name} {rule}"`.
  pub fn matches(
    &mut self,
    value: &str,
    name: &str,
    kind: ErrorKind,
    predicate: fn(&str) -> bool,
    rule: &str,
  ) -> bool {
    if self.halted() {
      return false;
    }
    let ok = predicate(value);
    if !ok {
      self.record(ValidationError::for_field(kind, name, format!("{name} {rule}")));
    }
    ok
  }

  /// Everything recorded so far, as an error.
  pub fn into_error(self) -> Error { Error::Validation(self.errors) }

  /// `Ok` if nothing was recorded.
  pub fn finish(self) -> Result<()> {
    if self.errors.is_empty() { Ok(()) } else { Err(self.into_error()) }
  }
}

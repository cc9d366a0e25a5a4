//! `get-user-info`: validates the applicant's names and returns a canned
//! applicant record built around them.
//!
//! Name errors are aggregated: a body with two bad names reports both.

use serde::Serialize;
use serde_json::Value;

use crate::{
  ErrorKind, Result,
  body::Body,
  checks::{Checks, Mode},
  format,
};

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";

pub(crate) const NAME_RULE: &str = "must be all lowercase letters";

pub const JOB_ID: &str = "1234567890";
pub const JOB_TITLE: &str = "Support Engineer";
pub const JOB_DESCRIPTION: &str = "Support Engineering at Bland";
pub const APPLICATION_ID: &str = "1234567890";
pub const DATE_APPLIED: &str = "2023-09-09T00:00:00Z";
pub const PHONE_NUMBER: &str = "+1 131 255 0123";
pub const EMAIL_DOMAIN: &str = "bland.ai";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRecord {
  pub job_id:                &'static str,
  pub job_title:             &'static str,
  pub job_description:       &'static str,
  pub applicant_information: ApplicantInformation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantInformation {
  pub application_id: &'static str,
  pub first_name:     String,
  pub last_name:      String,
  pub email:          String,
  pub date_applied:   &'static str,
  #[serde(rename = "phone_number")]
  pub phone_number:   &'static str,
  #[serde(rename = "linkedin_url")]
  pub linkedin_url:   String,
}

impl ApplicantRecord {
  /// Fixed job data around two already-validated names.
  pub fn new(first_name: &str, last_name: &str) -> Self {
    Self {
      job_id:                JOB_ID,
      job_title:             JOB_TITLE,
      job_description:       JOB_DESCRIPTION,
      applicant_information: ApplicantInformation {
        application_id: APPLICATION_ID,
        first_name:     first_name.to_owned(),
        last_name:      last_name.to_owned(),
        email:          format!("{first_name}@{EMAIL_DOMAIN}"),
        date_applied:   DATE_APPLIED,
        phone_number:   PHONE_NUMBER,
        linkedin_url:   format!(
          "https://www.linkedin.com/in/{first_name}-bland-0000000000"
        ),
      },
    }
  }
}

/// Type and format checks shared by both operations: both names must be
/// strings, then both must be lowercase ASCII letters.
pub(crate) fn names<'a>(
  checks: &mut Checks,
  first: &'a Value,
  last: &'a Value,
) -> Option<(&'a str, &'a str)> {
  let first = checks.string(first, FIRST_NAME, ErrorKind::InvalidNameFormat);
  let last = checks.string(last, LAST_NAME, ErrorKind::InvalidNameFormat);
  let (Some(first), Some(last)) = (first, last) else {
    return None;
  };

  let first_ok = checks.matches(
    first,
    FIRST_NAME,
    ErrorKind::InvalidNameFormat,
    format::is_name,
    NAME_RULE,
  );
  let last_ok = checks.matches(
    last,
    LAST_NAME,
    ErrorKind::InvalidNameFormat,
    format::is_name,
    NAME_RULE,
  );
  (first_ok && last_ok).then_some((first, last))
}

/// Validates `body` and builds the applicant record.
pub fn get_user_info(body: &Body) -> Result<ApplicantRecord> {
  let mut checks = Checks::new(Mode::AllErrors);

  let first = checks.require(body, FIRST_NAME);
  let last = checks.require(body, LAST_NAME);
  let (Some(first), Some(last)) = (first, last) else {
    return Err(checks.into_error());
  };

  let Some((first, last)) = names(&mut checks, first, last) else {
    return Err(checks.into_error());
  };

  Ok(ApplicantRecord::new(first, last))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::{Error, body};

  fn run(value: Value) -> Result<ApplicantRecord> {
    let raw = serde_json::to_vec(&value).unwrap();
    get_user_info(&body::parse(&raw).unwrap())
  }

  fn errors(value: Value) -> Vec<crate::ValidationError> {
    match run(value) {
      Err(Error::Validation(errors)) => errors,
      other => panic!("expected validation error, got {other:?}"),
    }
  }

  #[test]
  fn valid_names_build_the_record() {
    let record = run(json!({ "first_name": "john", "last_name": "doe" })).unwrap();
    let info = &record.applicant_information;
    assert_eq!(info.first_name, "john");
    assert_eq!(info.last_name, "doe");
    assert_eq!(info.email, "john@bland.ai");
    assert_eq!(
      info.linkedin_url,
      "https://www.linkedin.com/in/john-bland-0000000000"
    );
    assert_eq!(info.date_applied, DATE_APPLIED);
  }

  #[test]
  fn record_serialises_with_mixed_key_styles() {
    let value = serde_json::to_value(ApplicantRecord::new("john", "doe")).unwrap();
    assert_eq!(value["jobId"], JOB_ID);
    assert_eq!(value["jobTitle"], JOB_TITLE);
    assert_eq!(value["jobDescription"], JOB_DESCRIPTION);
    let info = &value["applicantInformation"];
    assert_eq!(info["applicationId"], APPLICATION_ID);
    assert_eq!(info["firstName"], "john");
    assert_eq!(info["lastName"], "doe");
    assert_eq!(info["dateApplied"], DATE_APPLIED);
    assert_eq!(info["phone_number"], PHONE_NUMBER);
    assert!(info["linkedin_url"].is_string());
  }

  #[test]
  fn extra_fields_are_ignored() {
    assert!(run(json!({ "first_name": "john", "last_name": "doe", "x": 1 })).is_ok());
  }

  #[test]
  fn missing_fields_are_each_reported() {
    let errs = errors(json!({}));
    assert_eq!(errs.len(), 2);
    assert!(errs.iter().all(|e| e.kind == ErrorKind::MissingRequiredBody));

    let errs = errors(json!({ "first_name": "john", "last_name": null }));
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].field.as_deref(), Some(LAST_NAME));
  }

  #[test]
  fn missing_fields_stop_before_format_checks() {
    let errs = errors(json!({ "first_name": "John" }));
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].kind, ErrorKind::MissingRequiredBody);
  }

  #[test]
  fn non_string_names_are_format_errors() {
    let errs = errors(json!({ "first_name": 7, "last_name": ["doe"] }));
    assert_eq!(errs.len(), 2);
    assert!(errs.iter().all(|e| e.kind == ErrorKind::InvalidNameFormat));
    assert_eq!(errs[0].message, "first_name must be a string");
  }

  #[test]
  fn every_bad_name_is_reported() {
    let errs = errors(json!({ "first_name": "John", "last_name": "d0e" }));
    assert_eq!(errs.len(), 2);
    assert_eq!(errs[0].field.as_deref(), Some(FIRST_NAME));
    assert_eq!(errs[1].field.as_deref(), Some(LAST_NAME));
    assert_eq!(errs[0].message, "first_name must be all lowercase letters");
  }

  #[test]
  fn empty_name_is_a_format_error() {
    let errs = errors(json!({ "first_name": "", "last_name": "doe" }));
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].kind, ErrorKind::InvalidNameFormat);
  }

  #[test]
  fn output_is_deterministic() {
    let a = serde_json::to_vec(&ApplicantRecord::new("jane", "roe")).unwrap();
    let b = serde_json::to_vec(&ApplicantRecord::new("jane", "roe")).unwrap();
    assert_eq!(a, b);
  }
}

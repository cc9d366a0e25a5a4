//! Usage guides returned by a plain `GET` on each endpoint.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Value, json};

use crate::key::{API_KEY_HEADER, KeyPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageGuide {
  pub message: String,
  pub method:  &'static str,
  pub headers: BTreeMap<&'static str, String>,
  /// Example request body.
  pub body:    Value,
}

fn guide(message: &str, policy: &dyn KeyPolicy, body: Value) -> UsageGuide {
  let hint = policy.hint();
  UsageGuide {
    message: format!(
      "{message} Remember to include {hint} in the '{API_KEY_HEADER}' header."
    ),
    method: "POST",
    headers: BTreeMap::from([(API_KEY_HEADER, hint)]),
    body,
  }
}

pub fn get_user_info(policy: &dyn KeyPolicy) -> UsageGuide {
  guide(
    "This endpoint is for getting user info. Use POST method with \
     'first_name' and 'last_name' in the request body.",
    policy,
    json!({ "first_name": "john", "last_name": "doe" }),
  )
}

pub fn book_appointment(policy: &dyn KeyPolicy) -> UsageGuide {
  guide(
    "This endpoint is for booking appointments. Use POST method with \
     'first_name', 'last_name', 'interview_date' (DD-MM-YYYY), and \
     'interview_time' (HH:MM, 24-hour) in the request body.",
    policy,
    json!({
      "first_name": "john",
      "last_name": "doe",
      "interview_date": "15-06-2023",
      "interview_time": "14:30",
    }),
  )
}

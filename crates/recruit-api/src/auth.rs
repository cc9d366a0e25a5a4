//! `bland-api-key` extractor and standalone verifier.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use recruit_core::key::{self, API_KEY_HEADER, KeyPolicy};

use crate::{AppState, error::ApiError};

/// Zero-size marker: present in the handler means the request carried an
/// accepted API key.
pub struct Authorized;

/// Check the API key header against `policy`. A header that is not valid
/// visible ASCII counts as missing.
pub fn verify_key(headers: &HeaderMap, policy: &dyn KeyPolicy) -> Result<(), ApiError> {
  let presented = headers
    .get(API_KEY_HEADER)
    .and_then(|v| v.to_str().ok());

  key::authorize(policy, presented).map_err(|e| {
    tracing::warn!(header_present = presented.is_some(), "rejected api key");
    ApiError::from(e)
  })
}

impl FromRequestParts<AppState> for Authorized {
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState,
  ) -> Result<Self, Self::Rejection> {
    verify_key(&parts.headers, state.keys.as_ref())?;
    Ok(Authorized)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::http::{HeaderName, HeaderValue, Request};
  use recruit_core::key::PolicyKind;

  use crate::ServerConfig;

  fn state(policy: PolicyKind) -> AppState {
    AppState::new(ServerConfig { api_key_policy: policy, ..ServerConfig::default() })
      .unwrap()
  }

  async fn extract(req: Request<axum::body::Body>, state: &AppState) -> Result<Authorized, ApiError> {
    let (mut parts, _) = req.into_parts();
    Authorized::from_request_parts(&mut parts, state).await
  }

  #[tokio::test]
  async fn correct_key() {
    let state = state(PolicyKind::Exact);
    let req = Request::builder()
      .header(API_KEY_HEADER, "valid_api_key")
      .body(axum::body::Body::empty()).unwrap();
    assert!(extract(req, &state).await.is_ok());
  }

  #[tokio::test]
  async fn wrong_key() {
    let state = state(PolicyKind::Exact);
    let req = Request::builder()
      .header(API_KEY_HEADER, "sk-123")
      .body(axum::body::Body::empty()).unwrap();
    assert!(matches!(
      extract(req, &state).await,
      Err(ApiError::Core(recruit_core::Error::InvalidApiKey))
    ));
  }

  #[tokio::test]
  async fn prefix_policy() {
    let state = state(PolicyKind::Prefix);
    let req = Request::builder()
      .header(API_KEY_HEADER, "sk-123")
      .body(axum::body::Body::empty()).unwrap();
    assert!(extract(req, &state).await.is_ok());
  }

  #[tokio::test]
  async fn missing_header() {
    let state = state(PolicyKind::Exact);
    let req = Request::builder().body(axum::body::Body::empty()).unwrap();
    assert!(extract(req, &state).await.is_err());
  }

  #[test]
  fn non_ascii_header_counts_as_missing() {
    let mut headers = HeaderMap::new();
    headers.insert(
      API_KEY_HEADER,
      HeaderValue::from_bytes(b"valid_api_key\xff").unwrap(),
    );
    let policy = PolicyKind::Exact.build(None).unwrap();
    assert!(verify_key(&headers, policy.as_ref()).is_err());
  }

  #[test]
  fn header_name_is_case_insensitive() {
    let mut headers = HeaderMap::new();
    headers.insert(
      HeaderName::from_bytes(b"Bland-Api-Key").unwrap(),
      HeaderValue::from_static("valid_api_key"),
    );
    let policy = PolicyKind::Exact.build(None).unwrap();
    assert!(verify_key(&headers, policy.as_ref()).is_ok());
  }
}

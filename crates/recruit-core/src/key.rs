//! API-key acceptance policies.
//!
//! The transport reads the [`API_KEY_HEADER`] and passes its value (if any)
//! to [`authorize`] together with whichever [`KeyPolicy`] the server was
//! configured with.

use serde::Deserialize;
use thiserror::Error;

use crate::{Error, Result};

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "bland-api-key";

/// Secret accepted by [`ExactKey::default`].
pub const DEFAULT_API_KEY: &str = "valid_api_key";

/// Prefix accepted by [`PrefixKey::default`].
pub const DEFAULT_KEY_PREFIX: &str = "sk-";

/// Decides whether a presented, non-empty API key is acceptable.
pub trait KeyPolicy: Send + Sync {
  fn accepts(&self, key: &str) -> bool;

  /// Human-readable description of what the header must contain. Must not
  /// reveal a configured secret.
  fn hint(&self) -> String;
}

/// A policy was configured with an empty secret or prefix. An empty prefix
/// would accept every key; an empty secret would accept none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("api key for the {0:?} policy must not be empty")]
pub struct EmptyKey(pub PolicyKind);

/// Accepts exactly one fixed secret.
#[derive(Debug, Clone)]
pub struct ExactKey(String);

impl ExactKey {
  pub fn new(secret: impl Into<String>) -> Result<Self, EmptyKey> {
    let secret = secret.into();
    if secret.is_empty() {
      return Err(EmptyKey(PolicyKind::Exact));
    }
    Ok(Self(secret))
  }
}

impl Default for ExactKey {
  fn default() -> Self { Self(DEFAULT_API_KEY.to_owned()) }
}

impl KeyPolicy for ExactKey {
  fn accepts(&self, key: &str) -> bool { key == self.0 }

  fn hint(&self) -> String { "the API key issued to you".to_owned() }
}

/// Accepts any key starting with a fixed scheme prefix.
#[derive(Debug, Clone)]
pub struct PrefixKey(String);

impl PrefixKey {
  pub fn new(prefix: impl Into<String>) -> Result<Self, EmptyKey> {
    let prefix = prefix.into();
    if prefix.is_empty() {
      return Err(EmptyKey(PolicyKind::Prefix));
    }
    Ok(Self(prefix))
  }
}

impl Default for PrefixKey {
  fn default() -> Self { Self(DEFAULT_KEY_PREFIX.to_owned()) }
}

impl KeyPolicy for PrefixKey {
  fn accepts(&self, key: &str) -> bool { key.starts_with(&self.0) }

  fn hint(&self) -> String {
    format!("your API key, starting with '{}'", self.0)
  }
}

/// Which [`KeyPolicy`] a server should run with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
  #[default]
  Exact,
  Prefix,
}

impl PolicyKind {
  /// Builds the policy. `value` is the secret for [`PolicyKind::Exact`] and
  /// the prefix for [`PolicyKind::Prefix`]; `None` selects the default.
  pub fn build(
    self,
    value: Option<String>,
  ) -> Result<Box<dyn KeyPolicy>, EmptyKey> {
    Ok(match (self, value) {
      (PolicyKind::Exact, Some(secret)) => Box::new(ExactKey::new(secret)?),
      (PolicyKind::Exact, None) => Box::new(ExactKey::default()),
      (PolicyKind::Prefix, Some(prefix)) => Box::new(PrefixKey::new(prefix)?),
      (PolicyKind::Prefix, None) => Box::new(PrefixKey::default()),
    })
  }
}

/// Gate run before any body handling. A missing or empty key is always
/// rejected, whatever the policy.
pub fn authorize(policy: &dyn KeyPolicy, presented: Option<&str>) -> Result<()> {
  match presented {
    Some(key) if !key.is_empty() && policy.accepts(key) => Ok(()),
    _ => Err(Error::InvalidApiKey),
  }
}

//! Server configuration, deserialised from `config.toml` and `RECRUITING_*`
//! environment variables.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use recruit_core::key::{EmptyKey, KeyPolicy, PolicyKind};
use serde::Deserialize;

/// Environment variables are read as `RECRUITING_<FIELD>`.
pub const ENV_PREFIX: &str = "RECRUITING";

pub const DEFAULT_MOUNT_PREFIX: &str = "/recruiting/exampleApi";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  /// Second mount point for the endpoints besides `/`. Empty disables it.
  pub mount_prefix:   String,
  pub api_key_policy: PolicyKind,
  /// Secret for the `exact` policy, prefix for the `prefix` policy.
  pub api_key:        Option<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:           "127.0.0.1".to_owned(),
      port:           3000,
      mount_prefix:   DEFAULT_MOUNT_PREFIX.to_owned(),
      api_key_policy: PolicyKind::default(),
      api_key:        None,
    }
  }
}

impl ServerConfig {
  /// Layer an optional TOML file under the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::layered(path, environment())
  }

  fn layered(path: &Path, env: Environment) -> Result<Self, ConfigError> {
    Config::builder()
      .add_source(File::from(path).required(false))
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  /// Fails if `api_key` is set but empty.
  pub fn key_policy(&self) -> Result<Box<dyn KeyPolicy>, EmptyKey> {
    self.api_key_policy.build(self.api_key.clone())
  }

  /// `mount_prefix` normalised to `/segment[/segment]`, or `None` if empty.
  pub fn mount_prefix(&self) -> Option<String> {
    let trimmed = self.mount_prefix.trim_matches('/');
    (!trimmed.is_empty()).then(|| format!("/{trimmed}"))
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// Values stay strings until deserialised, so a key such as `007` keeps its
// leading zeros; numeric fields still parse from their string form.
fn environment() -> Environment { Environment::with_prefix(ENV_PREFIX) }

//! Request body decoding.

use serde_json::{Map, Value};

use crate::{Error, Result};

/// A decoded JSON object body.
pub type Body = Map<String, Value>;

/// Parses `raw` as a JSON object. `Content-Type` is not consulted.
pub fn parse(raw: &[u8]) -> Result<Body> {
  match serde_json::from_slice::<Value>(raw)? {
    Value::Object(map) => Ok(map),
    _ => Err(Error::NotAnObject),
  }
}

/// Looks up `name`, treating an explicit `null` as absent.
pub fn field<'a>(body: &'a Body, name: &str) -> Option<&'a Value> {
  body.get(name).filter(|v| !v.is_null())
}

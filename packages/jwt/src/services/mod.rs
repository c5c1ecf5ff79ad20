//! Token services
//!
//! Each service runs validate-inputs, resolve-key, sign or verify, then
//! returns its outputs. Any stage's failure short-circuits the rest and is
//! surfaced as the service's [`ServiceError`](crate::ServiceError) variant.
//! Calls share no state and may run concurrently.

mod create;
mod decode;
mod encode;

pub use create::JwtCreator;
pub use decode::JwtDecoder;
pub use encode::JwtEncoder;

use crate::error::{JwtError, JwtResult};
use crate::types::{Claims, Header};
use serde_json::Value;

/// Parse a caller-supplied JSON object
fn parse_object(json: &str, what: &str) -> JwtResult<serde_json::Map<String, Value>> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(JwtError::invalid_json(format!("{what} must be a JSON object"))),
        Err(e) => Err(JwtError::invalid_json(format!("{what}: {e}"))),
    }
}

pub(crate) fn parse_header(json: &str) -> JwtResult<Header> {
    parse_object(json, "header")
}

pub(crate) fn parse_claims(json: &str) -> JwtResult<Claims> {
    parse_object(json, "claims")
}

//! Expression resolution for created tokens
//!
//! The create service passes issuer, subject, audience and every custom
//! claim value through an [`ExpressionResolver`] before placing it in the
//! claims. Encode and decode never resolve expressions.

use crate::error::{JwtError, JwtResult};
use regex::{Captures, Regex};
use std::collections::HashMap;

const PAYLOAD: &str = "%payload";

/// Turns a configured value into the string placed in the token
pub trait ExpressionResolver {
    /// Resolve every expression in `value`
    fn resolve(&self, value: &str) -> JwtResult<String>;
}

/// Identity resolver: values are used as configured
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl ExpressionResolver for Verbatim {
    fn resolve(&self, value: &str) -> JwtResult<String> {
        Ok(value.to_string())
    }
}

/// Resolves `%message{%payload}` to the message payload and
/// `%message{key}` to a metadata value
#[derive(Debug, Clone)]
pub struct MessageResolver {
    pattern: Regex,
    payload: String,
    metadata: HashMap<String, String>,
}

impl MessageResolver {
    /// Resolver over a payload with no metadata
    pub fn new(payload: impl Into<String>) -> JwtResult<Self> {
        let pattern = Regex::new(r"%message\{([^}]+)\}")
            .map_err(|e| JwtError::configuration(format!("invalid expression pattern: {e}")))?;
        Ok(Self {
            pattern,
            payload: payload.into(),
            metadata: HashMap::new(),
        })
    }

    /// Add a metadata entry
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl ExpressionResolver for MessageResolver {
    fn resolve(&self, value: &str) -> JwtResult<String> {
        let mut missing = None;
        let resolved = self.pattern.replace_all(value, |caps: &Captures<'_>| {
            let key = &caps[1];
            if key == PAYLOAD {
                return self.payload.clone();
            }
            match self.metadata.get(key) {
                Some(found) => found.clone(),
                None => {
                    missing.get_or_insert_with(|| key.to_string());
                    String::new()
                }
            }
        });

        match missing {
            Some(key) => Err(JwtError::UnresolvedExpression(format!(
                "no metadata value for {key}"
            ))),
            None => Ok(resolved.into_owned()),
        }
    }
}

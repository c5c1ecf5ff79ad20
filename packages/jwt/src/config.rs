//! Service configuration
//!
//! A host describes each service as a tagged JSON object:
//!
//! ```json
//! {
//!   "type": "jwt-decode",
//!   "secret": { "type": "base64-encoded-secret", "secret": "..." }
//! }
//! ```

use crate::error::{JwtError, JwtResult};
use crate::services::{JwtCreator, JwtDecoder, JwtEncoder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One configured token service
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum JwtServiceConfig {
    /// Build tokens from configured claims
    #[serde(rename = "jwt-creator")]
    Creator(JwtCreator),
    /// Sign caller-supplied header and claims
    #[serde(rename = "jwt-encode")]
    Encoder(JwtEncoder),
    /// Verify and split tokens
    #[serde(rename = "jwt-decode")]
    Decoder(JwtDecoder),
}

impl JwtServiceConfig {
    /// Parse a service configuration from JSON text
    pub fn from_json(json: &str) -> JwtResult<Self> {
        serde_json::from_str(json).map_err(|e| JwtError::configuration(e.to_string()))
    }

    /// Load a service configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> JwtResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            JwtError::configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&json)?;
        debug!(path = %path.display(), service = config.name(), "loaded service configuration");
        Ok(config)
    }

    /// Configuration tag of the service
    pub fn name(&self) -> &'static str {
        match self {
            JwtServiceConfig::Creator(_) => "jwt-creator",
            JwtServiceConfig::Encoder(_) => "jwt-encode",
            JwtServiceConfig::Decoder(_) => "jwt-decode",
        }
    }
}

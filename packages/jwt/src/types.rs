//! Shared token types

use serde::Deserialize;
use serde_json::{Map, Value};

/// Ordered JOSE header map
pub type Header = Map<String, Value>;

/// Ordered claims map
pub type Claims = Map<String, Value>;

/// A configured custom claim; the value may be an expression the caller's
/// resolver understands
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyValuePair {
    /// Claim name
    pub key: String,
    /// Claim value or expression
    pub value: String,
}

impl KeyValuePair {
    /// New key/value pair
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for KeyValuePair {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Header and claims of a verified token, as compact JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    /// Header JSON
    pub header: String,
    /// Claims JSON
    pub claims: String,
}

/// A key generated during encoding, tagged with where the host should put it
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedKey {
    /// Destination name configured for the key
    pub destination: String,
    /// Standard base64 encoded key
    pub key: String,
}

impl std::fmt::Debug for GeneratedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedKey")
            .field("destination", &self.destination)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Output of the encode service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedToken {
    /// Compact token
    pub token: String,
    /// Present when the key was generated for this call
    pub generated_key: Option<GeneratedKey>,
}

//! JWT error types
//!
//! Two layers: [`JwtError`] is raised by key sources and the token codec,
//! [`ServiceError`] is what the create/encode/decode services surface to the
//! host, always carrying the originating [`JwtError`].

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Failures raised below the service boundary
#[derive(Debug, Error)]
pub enum JwtError {
    /// Key material is unusable: bad encoding, weak key, wrong password,
    /// unreadable keyring or no signing-capable key
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    /// Caller-supplied header or claims JSON could not be parsed
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Token does not have the compact `header.claims.signature` structure
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Signature does not verify against the header and claims
    #[error("Invalid JWT signature")]
    SignatureInvalid,

    /// Self-generated key requested without a destination for the key
    #[error("Key output cannot be empty when a key is generated")]
    MissingKeyOutput,

    /// Header names an algorithm the key material cannot serve
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A custom claim expression could not be resolved
    #[error("Unresolved expression: {0}")]
    UnresolvedExpression(String),

    /// Header or claims could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Service configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl JwtError {
    /// Create an invalid secret error
    #[inline]
    #[must_use]
    pub fn invalid_secret(msg: impl Into<String>) -> Self {
        JwtError::InvalidSecret(msg.into())
    }

    /// Create an invalid JSON error
    #[inline]
    #[must_use]
    pub fn invalid_json(msg: impl Into<String>) -> Self {
        JwtError::InvalidJson(msg.into())
    }

    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        JwtError::MalformedToken(msg.into())
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: impl Into<String>) -> Self {
        JwtError::UnsupportedAlgorithm(alg.into())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        JwtError::Serialization(msg.into())
    }

    /// Create a configuration error
    #[inline]
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        JwtError::Configuration(msg.into())
    }
}

/// Failures surfaced to the host, one per service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The create service failed
    #[error("Could not create JSON Web Token: {0}")]
    TokenCreationFailed(#[source] JwtError),

    /// The encode service failed
    #[error("An error occurred during JWT encoding: {0}")]
    TokenEncodingFailed(#[source] JwtError),

    /// The decode service failed
    #[error("An error occurred during JWT decoding: {0}")]
    TokenDecodingFailed(#[source] JwtError),
}

impl ServiceError {
    /// The failure that caused this service error
    #[must_use]
    pub fn cause(&self) -> &JwtError {
        match self {
            ServiceError::TokenCreationFailed(e)
            | ServiceError::TokenDecodingFailed(e)
            | ServiceError::TokenEncodingFailed(e) => e,
        }
    }

    /// Consume the wrapper and return its cause
    #[must_use]
    pub fn into_cause(self) -> JwtError {
        match self {
            ServiceError::TokenCreationFailed(e)
            | ServiceError::TokenDecodingFailed(e)
            | ServiceError::TokenEncodingFailed(e) => e,
        }
    }
}

//! JWS signature algorithms supported by the codec
//!
//! Only the HMAC-SHA and RSASSA-PKCS1-v1_5 families are implemented: those are
//! the algorithms a base64 secret or an OpenPGP RSA signing key can serve.

pub(crate) mod hmac;
pub(crate) mod rsa;

use crate::error::{JwtError, JwtResult};
use std::fmt;
use std::str::FromStr;

/// Signature algorithm named by the `alg` header field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC using SHA-256
    HS256,
    /// HMAC using SHA-384
    HS384,
    /// HMAC using SHA-512
    HS512,
    /// RSASSA-PKCS1-v1_5 using SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 using SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 using SHA-512
    RS512,
}

impl Algorithm {
    /// Header `alg` value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
            Algorithm::RS256 => "RS256",
            Algorithm::RS384 => "RS384",
            Algorithm::RS512 => "RS512",
        }
    }

    /// Whether this is one of the HMAC algorithms
    #[must_use]
    pub fn is_hmac(self) -> bool {
        matches!(self, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)
    }

    /// Minimum key length in bytes the algorithm accepts.
    ///
    /// HMAC keys must be at least as long as the hash output; RSA moduli must
    /// be at least 2048 bits whatever the hash.
    #[must_use]
    pub fn min_key_len(self) -> usize {
        match self {
            Algorithm::HS256 => 32,
            Algorithm::HS384 => 48,
            Algorithm::HS512 => 64,
            Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => 256,
        }
    }

    /// Strongest HMAC algorithm a key of `len` bytes can serve
    pub(crate) fn hmac_for_key_len(len: usize) -> JwtResult<Self> {
        match len {
            l if l >= 64 => Ok(Algorithm::HS512),
            l if l >= 48 => Ok(Algorithm::HS384),
            l if l >= 32 => Ok(Algorithm::HS256),
            l => Err(JwtError::invalid_secret(format!(
                "HMAC key must be at least 32 bytes, got {l}"
            ))),
        }
    }

    /// Strongest RSA algorithm a modulus of `len` bytes can serve
    pub(crate) fn rsa_for_modulus_len(len: usize) -> JwtResult<Self> {
        match len {
            l if l >= 512 => Ok(Algorithm::RS512),
            l if l >= 384 => Ok(Algorithm::RS384),
            l if l >= 256 => Ok(Algorithm::RS256),
            l => Err(JwtError::invalid_secret(format!(
                "RSA key must be at least 2048 bits, got {}",
                l * 8
            ))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            "RS256" => Ok(Algorithm::RS256),
            "RS384" => Ok(Algorithm::RS384),
            "RS512" => Ok(Algorithm::RS512),
            other => Err(JwtError::unsupported_algorithm(other)),
        }
    }
}

//! Secret configurators
//!
//! A [`KeySource`] resolves the key material a service signs or verifies
//! with. The same source always yields matching halves: the shared secret for
//! both roles, or the private and public half of one keyring key. Nothing is
//! cached; every call re-reads and re-derives.

mod base64_secret;
mod password;
mod pgp_secret;

pub use base64_secret::Base64EncodedSecret;
pub use password::Password;
pub use pgp_secret::PgpSecret;

use crate::error::JwtResult;
use crate::keys::{SigningKey, VerificationKey};
use serde::Deserialize;

/// Source of signing and verification key material
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum KeySource {
    /// Base64 encoded HMAC secret
    Base64EncodedSecret(Base64EncodedSecret),
    /// Signing key from a password protected OpenPGP keyring
    PgpSecret(PgpSecret),
}

impl KeySource {
    /// Symmetric source from a base64 encoded secret
    pub fn base64(secret: impl Into<String>) -> Self {
        KeySource::Base64EncodedSecret(Base64EncodedSecret::new(secret))
    }

    /// Keyring source from a path and password
    pub fn pgp(path: impl Into<std::path::PathBuf>, password: impl Into<Password>) -> Self {
        KeySource::PgpSecret(PgpSecret::new(path, password))
    }

    /// Resolve the key used to build tokens
    pub fn signing_key(&self) -> JwtResult<SigningKey> {
        match self {
            KeySource::Base64EncodedSecret(secret) => secret.signing_key(),
            KeySource::PgpSecret(secret) => secret.signing_key(),
        }
    }

    /// Resolve the key used to parse tokens
    pub fn verification_key(&self) -> JwtResult<VerificationKey> {
        match self {
            KeySource::Base64EncodedSecret(secret) => secret.verification_key(),
            KeySource::PgpSecret(secret) => secret.verification_key(),
        }
    }
}

impl From<Base64EncodedSecret> for KeySource {
    fn from(secret: Base64EncodedSecret) -> Self {
        KeySource::Base64EncodedSecret(secret)
    }
}

impl From<PgpSecret> for KeySource {
    fn from(secret: PgpSecret) -> Self {
        KeySource::PgpSecret(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_sources_deserialize_by_tag() {
        let source: KeySource = serde_json::from_str(
            r#"{"type": "base64-encoded-secret", "secret": "c2VjcmV0"}"#,
        )
        .unwrap();
        assert!(matches!(source, KeySource::Base64EncodedSecret(_)));

        let source: KeySource = serde_json::from_str(
            r#"{"type": "pgp-secret", "path": "/tmp/ring.asc", "password": "pw"}"#,
        )
        .unwrap();
        match source {
            KeySource::PgpSecret(secret) => {
                assert_eq!(secret.path(), std::path::Path::new("/tmp/ring.asc"));
            }
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(serde_json::from_str::<KeySource>(r#"{"type": "jwk", "secret": "x"}"#).is_err());
    }
}

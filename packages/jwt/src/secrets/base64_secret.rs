use crate::error::JwtResult;
use crate::keys::{HmacKey, SigningKey, SigningMaterial, VerificationKey};
use serde::Deserialize;
use std::fmt;

/// HMAC secret supplied as standard base64; the same bytes sign and verify
#[derive(Clone, Deserialize)]
pub struct Base64EncodedSecret {
    secret: String,
}

impl Base64EncodedSecret {
    /// Secret from its base64 form
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub(crate) fn signing_key(&self) -> JwtResult<SigningKey> {
        Ok(SigningKey::new(SigningMaterial::Hmac(HmacKey::from_base64(&self.secret)?)))
    }

    pub(crate) fn verification_key(&self) -> JwtResult<VerificationKey> {
        Ok(VerificationKey::Hmac(HmacKey::from_base64(&self.secret)?))
    }
}

impl fmt::Debug for Base64EncodedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base64EncodedSecret")
            .field("secret", &"<redacted>")
            .finish()
    }
}

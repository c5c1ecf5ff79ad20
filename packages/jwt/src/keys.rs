//! Resolved key material
//!
//! Key sources produce a [`SigningKey`] for building tokens and a
//! [`VerificationKey`] for parsing them. Both are opaque to the codec beyond
//! the algorithm family they serve.

use crate::algorithms::{self, Algorithm};
use crate::error::{JwtError, JwtResult};
use crate::utils::{base64_decode, base64_encode};
use rand::RngCore;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fmt;
use zeroize::Zeroizing;

/// Raw HMAC secret, zeroized on drop
#[derive(Clone)]
pub struct HmacKey(Zeroizing<Vec<u8>>);

impl HmacKey {
    /// Wrap raw secret bytes, rejecting keys too short for HS256
    pub fn new(bytes: Vec<u8>) -> JwtResult<Self> {
        let key = Self(Zeroizing::new(bytes));
        Algorithm::hmac_for_key_len(key.len())?;
        Ok(key)
    }

    /// Decode a standard base64 secret
    pub fn from_base64(encoded: &str) -> JwtResult<Self> {
        let bytes = base64_decode(encoded)
            .map_err(|e| JwtError::invalid_secret(format!("secret is not valid base64: {e}")))?;
        Self::new(bytes)
    }

    /// Generate a random key sized for `alg`, which must be an HMAC algorithm
    pub fn generate(alg: Algorithm) -> JwtResult<Self> {
        if !alg.is_hmac() {
            return Err(JwtError::unsupported_algorithm(format!(
                "cannot generate a secret key for {alg}"
            )));
        }
        let mut bytes = Zeroizing::new(vec![0u8; alg.min_key_len()]);
        rand::rng().fill_bytes(&mut bytes);
        Ok(Self(bytes))
    }

    /// Standard base64 form of the key
    #[must_use]
    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(base64_encode(&self.0))
    }

    /// Key length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty; never true for a constructed key
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey({} bytes)", self.0.len())
    }
}

/// Key material used to sign a token
#[derive(Clone)]
pub enum SigningMaterial {
    /// Shared HMAC secret
    Hmac(HmacKey),
    /// RSA private key
    Rsa(Box<RsaPrivateKey>),
}

/// Signing key plus the header fields it binds
#[derive(Clone)]
pub struct SigningKey {
    material: SigningMaterial,
    key_id: Option<String>,
}

impl SigningKey {
    /// Signing key without a key identifier
    #[must_use]
    pub fn new(material: SigningMaterial) -> Self {
        Self {
            material,
            key_id: None,
        }
    }

    /// Bind a `kid` header value to this key
    #[must_use]
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.key_id = Some(kid.into());
        self
    }

    /// The `kid` header value, if the key source binds one
    #[must_use]
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// Algorithm implied by the key: the strongest the key length allows
    pub fn algorithm(&self) -> JwtResult<Algorithm> {
        match &self.material {
            SigningMaterial::Hmac(key) => Algorithm::hmac_for_key_len(key.len()),
            SigningMaterial::Rsa(key) => Algorithm::rsa_for_modulus_len(key.size()),
        }
    }

    pub(crate) fn sign(&self, alg: Algorithm, message: &[u8]) -> JwtResult<Vec<u8>> {
        match &self.material {
            SigningMaterial::Hmac(key) => algorithms::hmac::sign(alg, message, key.as_bytes()),
            SigningMaterial::Rsa(key) => algorithms::rsa::sign(alg, message, key),
        }
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.material {
            SigningMaterial::Hmac(key) => format!("{key:?}"),
            SigningMaterial::Rsa(key) => format!("RsaPrivateKey({} bits)", key.size() * 8),
        };
        f.debug_struct("SigningKey")
            .field("material", &kind)
            .field("key_id", &self.key_id)
            .finish()
    }
}

/// Key material used to verify a token signature
#[derive(Clone)]
pub enum VerificationKey {
    /// Shared HMAC secret
    Hmac(HmacKey),
    /// RSA public key
    Rsa(RsaPublicKey),
}

impl VerificationKey {
    /// Check `signature` over `message` with the algorithm declared in the header.
    ///
    /// A declared algorithm this key cannot serve (wrong family, or stronger
    /// than the key length allows) is `SignatureInvalid`, the same as a
    /// mismatching signature.
    pub(crate) fn verify(&self, alg: Algorithm, message: &[u8], signature: &[u8]) -> JwtResult<()> {
        let valid = match self {
            VerificationKey::Hmac(key) => {
                if !alg.is_hmac() || key.len() < alg.min_key_len() {
                    tracing::debug!(alg = %alg, key_len = key.len(), "HMAC secret cannot serve declared algorithm");
                    return Err(JwtError::SignatureInvalid);
                }
                algorithms::hmac::verify(alg, message, signature, key.as_bytes())?
            }
            VerificationKey::Rsa(key) => {
                if alg.is_hmac() || key.size() < alg.min_key_len() {
                    tracing::debug!(alg = %alg, bits = key.size() * 8, "RSA key cannot serve declared algorithm");
                    return Err(JwtError::SignatureInvalid);
                }
                algorithms::rsa::verify(alg, message, signature, key)?
            }
        };

        if valid {
            Ok(())
        } else {
            Err(JwtError::SignatureInvalid)
        }
    }
}

impl fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationKey::Hmac(key) => write!(f, "VerificationKey::Hmac({key:?})"),
            VerificationKey::Rsa(key) => {
                write!(f, "VerificationKey::Rsa({} bits)", key.size() * 8)
            }
        }
    }
}

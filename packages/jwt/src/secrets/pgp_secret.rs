//! OpenPGP keyring secret
//!
//! The keyring is an ASCII-armored file of transferable secret keys. The
//! first signing-capable key, scanning each primary key and then its subkeys
//! in file order, is the one used. Signing decrypts its private half with the
//! configured password; verification only needs its public parameters.

use super::Password;
use crate::error::{JwtError, JwtResult};
use crate::keys::{SigningKey, SigningMaterial, VerificationKey};
use pgp::composed::signed_key::SignedSecretKey;
use pgp::packet;
use pgp::types::{KeyId, KeyTrait, PublicParams, SecretKeyRepr, SecretKeyTrait};
use pgp::Deserializable;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use serde::Deserialize;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Signing key held in a password protected OpenPGP keyring
#[derive(Debug, Clone, Deserialize)]
pub struct PgpSecret {
    path: PathBuf,
    password: Password,
}

impl PgpSecret {
    /// Keyring at `path`, unlocked with `password`
    pub fn new(path: impl Into<PathBuf>, password: impl Into<Password>) -> Self {
        Self {
            path: path.into(),
            password: password.into(),
        }
    }

    /// Keyring file location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decrypt the signing key and bind its key ID as `kid`
    pub(crate) fn signing_key(&self) -> JwtResult<SigningKey> {
        let keyring = self.read_keyring()?;
        let key = find_signing_key(&keyring)?;
        let password = self.password.resolve()?;

        let private_key = key.decrypt_rsa(password.as_str())?;
        let kid = key.numeric_id()?;
        tracing::debug!(path = %self.path.display(), kid, "resolved keyring signing key");

        Ok(SigningKey::new(SigningMaterial::Rsa(Box::new(private_key))).with_key_id(kid.to_string()))
    }

    /// Public half of the signing key; the password is not used
    pub(crate) fn verification_key(&self) -> JwtResult<VerificationKey> {
        let keyring = self.read_keyring()?;
        let key = find_signing_key(&keyring)?;
        tracing::debug!(path = %self.path.display(), "resolved keyring verification key");
        Ok(VerificationKey::Rsa(key.rsa_public_key()?))
    }

    // The file is read fully and closed before any parsing happens.
    fn read_keyring(&self) -> JwtResult<Vec<SignedSecretKey>> {
        let armored = std::fs::read(&self.path).map_err(|e| {
            JwtError::invalid_secret(format!("cannot read keyring {}: {e}", self.path.display()))
        })?;

        let (keys, _headers) = SignedSecretKey::from_armor_many(Cursor::new(armored))
            .map_err(|e| JwtError::invalid_secret(format!("cannot parse keyring: {e}")))?;
        keys.collect::<Result<Vec<_>, _>>()
            .map_err(|e| JwtError::invalid_secret(format!("cannot parse keyring: {e}")))
    }
}

/// A primary key or subkey inside a keyring entry
#[derive(Clone, Copy)]
enum KeyringKey<'a> {
    Primary(&'a packet::SecretKey),
    Subkey(&'a packet::SecretSubkey),
}

impl KeyringKey<'_> {
    fn is_signing_key(&self) -> bool {
        match self {
            KeyringKey::Primary(key) => key.is_signing_key(),
            KeyringKey::Subkey(key) => key.is_signing_key(),
        }
    }

    fn key_id(&self) -> KeyId {
        match self {
            KeyringKey::Primary(key) => key.key_id(),
            KeyringKey::Subkey(key) => key.key_id(),
        }
    }

    /// Key ID as a signed 64-bit integer
    fn numeric_id(&self) -> JwtResult<i64> {
        let id = self.key_id();
        let bytes: [u8; 8] = id
            .as_ref()
            .try_into()
            .map_err(|_| JwtError::invalid_secret("keyring key ID is not 8 bytes"))?;
        Ok(i64::from_be_bytes(bytes))
    }

    fn public_params(&self) -> &PublicParams {
        match self {
            KeyringKey::Primary(key) => key.public_params(),
            KeyringKey::Subkey(key) => key.public_params(),
        }
    }

    fn rsa_public_key(&self) -> JwtResult<RsaPublicKey> {
        match self.public_params() {
            PublicParams::RSA { n, e } => RsaPublicKey::new(
                BigUint::from_bytes_be(n.as_bytes()),
                BigUint::from_bytes_be(e.as_bytes()),
            )
            .map_err(|e| JwtError::invalid_secret(format!("invalid RSA public key: {e}"))),
            _ => Err(JwtError::invalid_secret(
                "unsupported key algorithm: only RSA signing keys are supported",
            )),
        }
    }

    fn decrypt_rsa(&self, password: &str) -> JwtResult<RsaPrivateKey> {
        let mut extracted: Option<RsaPrivateKey> = None;
        let capture = |repr: &SecretKeyRepr| -> pgp::errors::Result<()> {
            if let SecretKeyRepr::RSA(key) = repr {
                extracted = Some(key.clone());
            }
            Ok(())
        };
        let unlocked = match self {
            KeyringKey::Primary(key) => key.unlock(|| password.to_string(), capture),
            KeyringKey::Subkey(key) => key.unlock(|| password.to_string(), capture),
        };
        unlocked.map_err(|e| {
            JwtError::invalid_secret(format!("cannot decrypt keyring signing key: {e}"))
        })?;

        extracted.ok_or_else(|| {
            JwtError::invalid_secret("unsupported key algorithm: only RSA signing keys are supported")
        })
    }
}

/// First signing-capable key in file order, primary key before subkeys
fn find_signing_key(keyring: &[SignedSecretKey]) -> JwtResult<KeyringKey<'_>> {
    keyring
        .iter()
        .flat_map(|entry| {
            std::iter::once(KeyringKey::Primary(&entry.primary_key)).chain(
                entry
                    .secret_subkeys
                    .iter()
                    .map(|subkey| KeyringKey::Subkey(&subkey.key)),
            )
        })
        .find(|key| key.is_signing_key())
        .ok_or_else(|| JwtError::invalid_secret("no signing key in keyring"))
}

//! RSA-based JWT Algorithm Implementations
//!
//! RSASSA-PKCS1-v1_5 with SHA-256/384/512 (RS256, RS384, RS512).

use super::Algorithm;
use crate::error::{JwtError, JwtResult};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Sha256, Sha384, Sha512};

/// Sign `message` with the RSA variant named by `alg`
pub(crate) fn sign(alg: Algorithm, message: &[u8], private_key: &RsaPrivateKey) -> JwtResult<Vec<u8>> {
    let key = private_key.clone();
    let signature = match alg {
        Algorithm::RS256 => SigningKey::<Sha256>::new(key).try_sign(message),
        Algorithm::RS384 => SigningKey::<Sha384>::new(key).try_sign(message),
        Algorithm::RS512 => SigningKey::<Sha512>::new(key).try_sign(message),
        other => {
            return Err(JwtError::unsupported_algorithm(format!(
                "{other} cannot be computed with an RSA key"
            )))
        }
    }
    .map_err(|e| JwtError::invalid_secret(format!("RSA signing failed: {e}")))?;
    Ok(signature.to_vec())
}

/// Verify an RSA signature; `Ok(false)` when it does not match
pub(crate) fn verify(
    alg: Algorithm,
    message: &[u8],
    signature: &[u8],
    public_key: &RsaPublicKey,
) -> JwtResult<bool> {
    let Ok(signature) = Signature::try_from(signature) else {
        return Ok(false);
    };
    let key = public_key.clone();
    let outcome = match alg {
        Algorithm::RS256 => VerifyingKey::<Sha256>::new(key).verify(message, &signature),
        Algorithm::RS384 => VerifyingKey::<Sha384>::new(key).verify(message, &signature),
        Algorithm::RS512 => VerifyingKey::<Sha512>::new(key).verify(message, &signature),
        other => {
            return Err(JwtError::unsupported_algorithm(format!(
                "{other} cannot be verified with an RSA key"
            )))
        }
    };
    Ok(outcome.is_ok())
}

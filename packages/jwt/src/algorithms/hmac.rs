//! HMAC-based JWT Algorithm Implementations
//!
//! HS256, HS384 and HS512 signing, and verification through a constant-time
//! comparison of the recomputed MAC.

use super::Algorithm;
use crate::error::{JwtError, JwtResult};
use crate::utils::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Sign with HMAC-SHA256 (HS256)
#[inline]
fn sign_hs256(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_secret("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign with HMAC-SHA384 (HS384)
#[inline]
fn sign_hs384(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha384::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_secret("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign with HMAC-SHA512 (HS512)
#[inline]
fn sign_hs512(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_secret("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// MAC `message` with the HMAC variant named by `alg`
pub(crate) fn sign(alg: Algorithm, message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    match alg {
        Algorithm::HS256 => sign_hs256(message, secret),
        Algorithm::HS384 => sign_hs384(message, secret),
        Algorithm::HS512 => sign_hs512(message, secret),
        other => Err(JwtError::unsupported_algorithm(format!(
            "{other} cannot be computed with an HMAC secret"
        ))),
    }
}

/// Recompute the MAC and compare it to `signature` in constant time
pub(crate) fn verify(
    alg: Algorithm,
    message: &[u8],
    signature: &[u8],
    secret: &[u8],
) -> JwtResult<bool> {
    let expected = sign(alg, message, secret)?;
    Ok(constant_time_eq(signature, &expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 2
    const KEY: &[u8] = b"Jefe";
    const DATA: &[u8] = b"what do ya want for nothing?";

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn hs256_matches_rfc4231() {
        let mac = sign(Algorithm::HS256, DATA, KEY).unwrap();
        assert_eq!(
            hex(&mac),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn output_length_follows_hash() {
        assert_eq!(sign(Algorithm::HS384, DATA, KEY).unwrap().len(), 48);
        assert_eq!(sign(Algorithm::HS512, DATA, KEY).unwrap().len(), 64);
    }

    #[test]
    fn verify_detects_flipped_bit() {
        let mut mac = sign(Algorithm::HS512, DATA, KEY).unwrap();
        assert!(verify(Algorithm::HS512, DATA, &mac, KEY).unwrap());
        mac[10] ^= 0x01;
        assert!(!verify(Algorithm::HS512, DATA, &mac, KEY).unwrap());
    }

    #[test]
    fn rsa_algorithms_are_refused() {
        assert!(matches!(
            sign(Algorithm::RS256, DATA, KEY),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
    }
}

//! Compact JWS token codec
//!
//! [`build`] serializes a header and claims map, signs
//! `base64url(header) "." base64url(claims)` with the resolved key and joins
//! the three segments. [`parse`] reverses it, verifying the signature with the
//! algorithm the header declares before handing back the maps.
//!
//! Time-based claims (`exp`, `nbf`) are not enforced here; callers that care
//! inspect the returned claims.

use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use crate::keys::{SigningKey, VerificationKey};
use crate::types::{Claims, Header};
use crate::utils::{base64_url_decode, base64_url_encode};
use serde_json::Value;

/// Header field naming the signature algorithm
pub const ALGORITHM: &str = "alg";
/// Header field naming the signing key
pub const KEY_ID: &str = "kid";

/// Build a signed compact token.
///
/// The key's `kid` (if any) is inserted before `alg`, and `alg` is always set
/// to the algorithm the key implies, replacing any caller-supplied value in
/// place.
pub fn build(header: &Header, claims: &Claims, key: &SigningKey) -> JwtResult<String> {
    let alg = key.algorithm()?;

    let mut header = header.clone();
    if let Some(kid) = key.key_id() {
        header.insert(KEY_ID.to_string(), Value::String(kid.to_string()));
    }
    header.insert(ALGORITHM.to_string(), Value::String(alg.as_str().to_string()));

    let header_json =
        serde_json::to_string(&header).map_err(|e| JwtError::serialization(e.to_string()))?;
    let claims_json =
        serde_json::to_string(claims).map_err(|e| JwtError::serialization(e.to_string()))?;

    let message = format!(
        "{}.{}",
        base64_url_encode(header_json.as_bytes()),
        base64_url_encode(claims_json.as_bytes())
    );
    let signature = key.sign(alg, message.as_bytes())?;

    tracing::debug!(alg = %alg, kid = ?key.key_id(), "signed token");
    Ok(format!("{message}.{}", base64_url_encode(&signature)))
}

/// Verify a compact token and return its header and claims
pub fn parse(token: &str, key: &VerificationKey) -> JwtResult<(Header, Claims)> {
    let mut parts = token.trim().split('.');
    let (Some(header_b64), Some(claims_b64), Some(signature_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(JwtError::malformed(
            "expected three '.'-separated segments",
        ));
    };

    let header: Header = decode_segment(header_b64, "header")?;
    let claims: Claims = decode_segment(claims_b64, "claims")?;

    if signature_b64.is_empty() {
        return Err(JwtError::malformed("unsigned tokens are not supported"));
    }
    let signature = base64_url_decode(signature_b64)
        .map_err(|e| JwtError::malformed(format!("invalid signature encoding: {e}")))?;

    let declared = header
        .get(ALGORITHM)
        .and_then(Value::as_str)
        .ok_or_else(|| JwtError::malformed("header has no algorithm"))?;
    let alg: Algorithm = declared
        .parse()
        .map_err(|_| JwtError::malformed(format!("header declares unknown algorithm {declared:?}")))?;

    let message_len = header_b64.len() + 1 + claims_b64.len();
    key.verify(alg, &token.trim().as_bytes()[..message_len], &signature)?;

    tracing::debug!(alg = %alg, "verified token");
    Ok((header, claims))
}

fn decode_segment(segment: &str, name: &str) -> JwtResult<serde_json::Map<String, Value>> {
    let bytes = base64_url_decode(segment)
        .map_err(|e| JwtError::malformed(format!("invalid {name} encoding: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| JwtError::malformed(format!("{name} is not a JSON object: {e}")))
}

//! Registered claim names and an ordered claims builder
//!
//! Claims are kept in insertion order, so the order the builder methods are
//! called in is the order the fields appear in the encoded token.

use crate::types::Claims;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Issuer
pub const ISSUER: &str = "iss";
/// Subject
pub const SUBJECT: &str = "sub";
/// Audience
pub const AUDIENCE: &str = "aud";
/// Expiration time, seconds since the epoch
pub const EXPIRATION: &str = "exp";
/// Not-before time, seconds since the epoch
pub const NOT_BEFORE: &str = "nbf";
/// Issued-at time, seconds since the epoch
pub const ISSUED_AT: &str = "iat";
/// Token identifier
pub const ID: &str = "jti";

/// Claims builder for creating JWT claims
#[derive(Debug, Clone, Default)]
pub struct ClaimsBuilder {
    claims: Claims,
}

impl ClaimsBuilder {
    /// Create new claims builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set subject claim
    #[inline]
    #[must_use]
    pub fn with_subject(self, subject: &str) -> Self {
        self.with_string(SUBJECT, subject)
    }

    /// Set issuer claim
    #[inline]
    #[must_use]
    pub fn with_issuer(self, issuer: &str) -> Self {
        self.with_string(ISSUER, issuer)
    }

    /// Set audience claim as string
    #[inline]
    #[must_use]
    pub fn with_audience(self, audience: &str) -> Self {
        self.with_string(AUDIENCE, audience)
    }

    /// Set expiration time
    #[inline]
    #[must_use]
    pub fn with_expiration(self, exp: DateTime<Utc>) -> Self {
        self.with_timestamp(EXPIRATION, exp)
    }

    /// Set not before time
    #[inline]
    #[must_use]
    pub fn with_not_before(self, nbf: DateTime<Utc>) -> Self {
        self.with_timestamp(NOT_BEFORE, nbf)
    }

    /// Set issued at time
    #[inline]
    #[must_use]
    pub fn with_issued_at(self, iat: DateTime<Utc>) -> Self {
        self.with_timestamp(ISSUED_AT, iat)
    }

    /// Set JWT ID
    #[inline]
    #[must_use]
    pub fn with_jwt_id(self, jti: &str) -> Self {
        self.with_string(ID, jti)
    }

    /// Set a custom string claim. An existing claim of the same name,
    /// registered or not, is overwritten and keeps its position.
    #[inline]
    #[must_use]
    pub fn with_custom_string(self, claim: &str, value: &str) -> Self {
        self.with_string(claim, value)
    }

    fn with_string(mut self, claim: &str, value: &str) -> Self {
        self.claims
            .insert(claim.to_string(), Value::String(value.to_string()));
        self
    }

    // Sub-second precision is dropped, as NumericDate is whole seconds.
    fn with_timestamp(mut self, claim: &str, at: DateTime<Utc>) -> Self {
        self.claims
            .insert(claim.to_string(), Value::Number(at.timestamp().into()));
        self
    }

    /// Build claims map
    #[inline]
    #[must_use]
    pub fn build(self) -> Claims {
        self.claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn insertion_order_is_kept() {
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let claims = ClaimsBuilder::new()
            .with_subject("Bob")
            .with_audience("you")
            .with_not_before(at)
            .with_issuer("me")
            .build();
        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"sub":"Bob","aud":"you","nbf":1577836800,"iss":"me"}"#);
    }

    #[test]
    fn custom_claim_overrides_registered_claim() {
        let claims = ClaimsBuilder::new()
            .with_subject("Bob")
            .with_issuer("me")
            .with_custom_string(SUBJECT, "Alice")
            .build();
        assert_eq!(claims[SUBJECT], "Alice");
        assert_eq!(claims.keys().next().map(String::as_str), Some(SUBJECT));
    }

    #[test]
    fn timestamps_drop_sub_seconds() {
        let at = Utc.timestamp_millis_opt(1_577_836_800_999).unwrap();
        let claims = ClaimsBuilder::new().with_issued_at(at).build();
        assert_eq!(claims[ISSUED_AT], 1_577_836_800_i64);
    }
}

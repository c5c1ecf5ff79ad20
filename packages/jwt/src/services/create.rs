use crate::claims::ClaimsBuilder;
use crate::clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::codec;
use crate::error::{JwtResult, ServiceError};
use crate::resolver::ExpressionResolver;
use crate::secrets::KeySource;
use crate::types::{Header, KeyValuePair};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Creates a token from registered claim fields and custom claims.
///
/// Claims are laid out as `sub`, `aud`, `nbf`, `iss`, `exp`, `iat`, `jti`,
/// followed by the custom claims in declaration order. A custom claim with a
/// registered name replaces that claim's value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JwtCreator {
    /// `jti`; a fresh identifier is generated when absent
    #[serde(default)]
    pub id: Option<String>,
    /// `iss`, may be an expression
    pub issuer: String,
    /// `sub`, may be an expression
    pub subject: String,
    /// `aud`, may be an expression
    pub audience: String,
    /// `iat`; the current time when absent
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
    /// `exp`
    pub expiration: DateTime<Utc>,
    /// `nbf`
    pub not_before: DateTime<Utc>,
    /// Signing key source
    pub secret: KeySource,
    /// Extra claims; values may be expressions
    #[serde(default)]
    pub custom_claims: Vec<KeyValuePair>,
}

impl JwtCreator {
    /// Creator with the mandatory fields set
    pub fn new(
        issuer: impl Into<String>,
        subject: impl Into<String>,
        audience: impl Into<String>,
        expiration: DateTime<Utc>,
        not_before: DateTime<Utc>,
        secret: KeySource,
    ) -> Self {
        Self {
            id: None,
            issuer: issuer.into(),
            subject: subject.into(),
            audience: audience.into(),
            issued_at: None,
            expiration,
            not_before,
            secret,
            custom_claims: Vec::new(),
        }
    }

    /// Use a fixed `jti`
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Use a fixed `iat`
    #[must_use]
    pub fn with_issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.issued_at = Some(issued_at);
        self
    }

    /// Append a custom claim
    #[must_use]
    pub fn with_custom_claim(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_claims.push(KeyValuePair::new(key, value));
        self
    }

    /// Create a token, defaulting `iat` to now and `jti` to a random UUID
    pub fn create(&self, resolver: &dyn ExpressionResolver) -> Result<String, ServiceError> {
        self.create_with(resolver, &SystemClock, &UuidGenerator)
    }

    /// Create a token with explicit sources for the `iat` and `jti` defaults
    pub fn create_with(
        &self,
        resolver: &dyn ExpressionResolver,
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
    ) -> Result<String, ServiceError> {
        self.try_create(resolver, clock, ids).map_err(|e| {
            tracing::error!(error = %e, "Could not create JSON Web Token");
            ServiceError::TokenCreationFailed(e)
        })
    }

    fn try_create(
        &self,
        resolver: &dyn ExpressionResolver,
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
    ) -> JwtResult<String> {
        let issued_at = self.issued_at.unwrap_or_else(|| clock.now());
        let id = match &self.id {
            Some(id) => id.clone(),
            None => ids.generate(),
        };

        let mut builder = ClaimsBuilder::new()
            .with_subject(&resolver.resolve(&self.subject)?)
            .with_audience(&resolver.resolve(&self.audience)?)
            .with_not_before(self.not_before)
            .with_issuer(&resolver.resolve(&self.issuer)?)
            .with_expiration(self.expiration)
            .with_issued_at(issued_at)
            .with_jwt_id(&id);
        for claim in &self.custom_claims {
            builder = builder.with_custom_string(&claim.key, &resolver.resolve(&claim.value)?);
        }
        let claims = builder.build();

        let key = self.secret.signing_key()?;
        tracing::debug!(kid = ?key.key_id(), claims = claims.len(), "creating token");
        codec::build(&Header::new(), &claims, &key)
    }
}

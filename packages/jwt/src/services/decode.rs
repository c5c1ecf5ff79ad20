use crate::codec;
use crate::error::{JwtError, JwtResult, ServiceError};
use crate::secrets::KeySource;
use crate::types::DecodedToken;
use serde::Deserialize;

/// Verifies a token and splits it into header and claims JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JwtDecoder {
    /// Verification key source
    pub secret: KeySource,
}

impl JwtDecoder {
    /// Decoder verifying with `secret`
    pub fn new(secret: KeySource) -> Self {
        Self { secret }
    }

    /// Verify `token`; header and claims keep the token's field order
    pub fn decode(&self, token: &str) -> Result<DecodedToken, ServiceError> {
        self.try_decode(token).map_err(|e| {
            tracing::error!(error = %e, "An error occurred during JWT decoding");
            ServiceError::TokenDecodingFailed(e)
        })
    }

    fn try_decode(&self, token: &str) -> JwtResult<DecodedToken> {
        let key = self.secret.verification_key()?;
        let (header, claims) = codec::parse(token, &key)?;

        Ok(DecodedToken {
            header: serde_json::to_string(&header)
                .map_err(|e| JwtError::serialization(e.to_string()))?,
            claims: serde_json::to_string(&claims)
                .map_err(|e| JwtError::serialization(e.to_string()))?,
        })
    }
}

use super::{parse_claims, parse_header};
use crate::algorithms::Algorithm;
use crate::codec::{self, ALGORITHM};
use crate::error::{JwtError, JwtResult, ServiceError};
use crate::keys::{HmacKey, SigningKey, SigningMaterial};
use crate::secrets::KeySource;
use crate::types::{EncodedToken, GeneratedKey, Header};
use serde::Deserialize;
use serde_json::Value;

/// Encodes caller-supplied header and claims JSON as a signed token.
///
/// With `generate_key` set, the configured secret is ignored and a fresh
/// HMAC key sized for the header's `alg` is generated. The key is returned
/// alongside the token, tagged with `key_output`, which must be configured.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JwtEncoder {
    /// Signing key source
    #[serde(default)]
    pub secret: Option<KeySource>,
    /// Generate a random key instead of using `secret`
    #[serde(default)]
    pub generate_key: bool,
    /// Where the host should put a generated key
    #[serde(default)]
    pub key_output: Option<String>,
}

impl JwtEncoder {
    /// Encoder signing with `secret`
    pub fn new(secret: KeySource) -> Self {
        Self {
            secret: Some(secret),
            ..Self::default()
        }
    }

    /// Encoder that generates its key and reports it under `key_output`
    pub fn generating(key_output: impl Into<String>) -> Self {
        Self {
            secret: None,
            generate_key: true,
            key_output: Some(key_output.into()),
        }
    }

    /// Sign `header` and `claims`, both JSON objects
    pub fn encode(&self, header: &str, claims: &str) -> Result<EncodedToken, ServiceError> {
        self.try_encode(header, claims).map_err(|e| {
            tracing::error!(error = %e, "An error occurred during JWT encoding");
            ServiceError::TokenEncodingFailed(e)
        })
    }

    fn try_encode(&self, header: &str, claims: &str) -> JwtResult<EncodedToken> {
        let key_output = match (self.generate_key, &self.key_output) {
            (true, None) => return Err(JwtError::MissingKeyOutput),
            (true, Some(output)) => Some(output),
            (false, _) => None,
        };

        let header = parse_header(header)?;
        let claims = parse_claims(claims)?;

        let (key, generated_key) = match key_output {
            Some(destination) => {
                let generated = HmacKey::generate(declared_algorithm(&header)?)?;
                let encoded = generated.to_base64();
                let key = SigningKey::new(SigningMaterial::Hmac(generated));
                let generated_key = GeneratedKey {
                    destination: destination.clone(),
                    key: encoded.as_str().to_string(),
                };
                (key, Some(generated_key))
            }
            None => {
                let source = self
                    .secret
                    .as_ref()
                    .ok_or_else(|| JwtError::invalid_secret("no secret configured"))?;
                (source.signing_key()?, None)
            }
        };

        let token = codec::build(&header, &claims, &key)?;
        tracing::debug!(generated = generated_key.is_some(), "encoded token");
        Ok(EncodedToken {
            token,
            generated_key,
        })
    }
}

fn declared_algorithm(header: &Header) -> JwtResult<Algorithm> {
    header
        .get(ALGORITHM)
        .and_then(Value::as_str)
        .ok_or_else(|| JwtError::unsupported_algorithm("header declares no algorithm"))?
        .parse()
}

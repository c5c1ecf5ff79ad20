use crate::error::{JwtError, JwtResult};
use serde::Deserialize;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const ENV_PREFIX: &str = "%env{";

/// Keyring password.
///
/// A value of the form `%env{NAME}` is resolved from the environment each
/// time the password is needed; anything else is the plaintext password.
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Wrap a plaintext password or `%env{NAME}` reference
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The plaintext password
    pub fn resolve(&self) -> JwtResult<Zeroizing<String>> {
        match self.0.strip_prefix(ENV_PREFIX).and_then(|rest| rest.strip_suffix('}')) {
            Some(name) => std::env::var(name).map(Zeroizing::new).map_err(|_| {
                JwtError::invalid_secret(format!("password variable {name} is not set"))
            }),
            None => Ok(Zeroizing::new(self.0.clone())),
        }
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

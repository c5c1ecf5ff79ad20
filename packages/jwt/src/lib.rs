//! JSON Web Token services
//!
//! Three stateless services over compact JWS tokens:
//! - [`JwtCreator`] builds claims from configured registered and custom
//!   claims and signs them
//! - [`JwtEncoder`] signs caller-supplied header and claims JSON, optionally
//!   with a freshly generated HMAC key
//! - [`JwtDecoder`] verifies a token and returns its header and claims JSON
//!
//! Keys come from a [`KeySource`]: a base64 encoded HMAC secret (HS256,
//! HS384 or HS512 by key length) or an OpenPGP keyring whose RSA signing key
//! gives RS256, RS384 or RS512 by modulus size and is named in the `kid`
//! header.

pub mod algorithms;
pub mod claims;
pub mod clock;
pub mod codec;
pub mod config;
mod error;
pub mod keys;
pub mod resolver;
pub mod secrets;
pub mod services;
mod types;
mod utils;

pub use algorithms::Algorithm;
pub use clock::{Clock, FixedClock, FixedId, IdGenerator, SystemClock, UuidGenerator};
pub use config::JwtServiceConfig;
pub use error::*;
pub use resolver::{ExpressionResolver, MessageResolver, Verbatim};
pub use secrets::{Base64EncodedSecret, KeySource, Password, PgpSecret};
pub use services::{JwtCreator, JwtDecoder, JwtEncoder};
pub use types::*;

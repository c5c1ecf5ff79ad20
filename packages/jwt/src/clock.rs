//! Sources for default `iat` and `jti` values

use chrono::{DateTime, Utc};

/// Supplies the current time
pub trait Clock {
    /// Now
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Supplies fresh token identifiers
pub trait IdGenerator {
    /// A new unique identifier
    fn generate(&self) -> String;
}

/// Random (v4) UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Always returns the same identifier
#[derive(Debug, Clone)]
pub struct FixedId(pub String);

impl IdGenerator for FixedId {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

use crate::config::ConfigParams;
use serde_json::Value;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComponentError {
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),

    #[error("ReferenceMissing: {0}")]
    ReferenceMissing(String),

    #[error("LockTimeout: acquiring lock '{key}' timed out")]
    LockTimeout {
        correlation_id: Option<String>,
        key: String,
    },

    #[error("CannotCreate: requested component {0} cannot be created")]
    CannotCreate(String),

    #[error("CreateFailure: failed to create {locator}: {cause}")]
    CreateFailure { locator: String, cause: String },

    #[error("ConfigError: {0}")]
    Config(String),

    #[error("FileError: {0}")]
    FileError(String),

    #[error("ServiceError: {0}")]
    Service(String),
}

impl ComponentError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn lock_timeout(correlation_id: Option<&str>, key: &str) -> Self {
        Self::LockTimeout {
            correlation_id: correlation_id.map(|s| s.to_string()),
            key: key.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ComponentError>;

/// Components that accept `ConfigParams` after construction.
/// Keys missing from `config` leave the current settings untouched.
pub trait Configurable {
    fn configure(&self, config: &ConfigParams);
}

/// Transient key/value cache with per-entry expiration.
pub trait Cache: Send + Sync {
    /// Returns `Ok(None)` when the key is absent or expired.
    fn retrieve(&self, correlation_id: Option<&str>, key: &str) -> Result<Option<Value>>;

    /// Stores `value` for `timeout` milliseconds (0 falls back to the cache default).
    /// Storing `Value::Null` removes the key and returns `Ok(None)`.
    fn store(
        &self,
        correlation_id: Option<&str>,
        key: &str,
        value: Value,
        timeout: u64,
    ) -> Result<Option<Value>>;

    /// Removing an absent key is not an error.
    fn remove(&self, correlation_id: Option<&str>, key: &str) -> Result<()>;
}

/// Application-level mutual exclusion keyed by string.
///
/// `acquire_lock` polls `try_acquire_lock` every `retry_timeout` milliseconds
/// until it succeeds or the deadline passes.
pub trait Lock: Send + Sync {
    /// Takes the lock for `ttl` milliseconds if it is free or expired.
    fn try_acquire_lock(&self, correlation_id: Option<&str>, key: &str, ttl: u64) -> Result<bool>;

    fn release_lock(&self, correlation_id: Option<&str>, key: &str) -> Result<()>;

    /// Polling interval in milliseconds.
    fn retry_timeout(&self) -> u64;

    fn acquire_lock(
        &self,
        correlation_id: Option<&str>,
        key: &str,
        ttl: u64,
        timeout: u64,
    ) -> Result<()> {
        let deadline = Instant::now() + Duration::from_millis(timeout);

        if self.try_acquire_lock(correlation_id, key, ttl)? {
            return Ok(());
        }

        let retry = Duration::from_millis(self.retry_timeout());
        loop {
            thread::sleep(retry);

            if Instant::now() > deadline {
                return Err(ComponentError::lock_timeout(correlation_id, key));
            }

            if self.try_acquire_lock(correlation_id, key, ttl)? {
                return Ok(());
            }
        }
    }
}

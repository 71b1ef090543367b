use serde_json::Value;
use std::time::{Duration, Instant};

/// Cached value with its absolute expiration time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    key: String,
    value: Value,
    expiration: Instant,
}

impl CacheEntry {
    pub fn new(key: &str, value: Value, timeout: u64) -> Self {
        Self {
            key: key.to_string(),
            value,
            expiration: Instant::now() + Duration::from_millis(timeout),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn expiration(&self) -> Instant {
        self.expiration
    }

    /// Replaces value and expiration together.
    pub fn set_value(&mut self, value: Value, timeout: u64) {
        self.value = value;
        self.expiration = Instant::now() + Duration::from_millis(timeout);
    }

    pub fn is_expired(&self) -> bool {
        self.expiration < Instant::now()
    }
}

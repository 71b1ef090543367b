use crate::ports::provided::{Cache, ComponentError, Result};
use serde_json::Value;

/// Cache that never holds anything. Used where caching is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        Self
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ComponentError::invalid_argument("Key cannot be empty"));
    }
    Ok(())
}

impl Cache for NullCache {
    fn retrieve(&self, _correlation_id: Option<&str>, key: &str) -> Result<Option<Value>> {
        check_key(key)?;
        Ok(None)
    }

    fn store(
        &self,
        _correlation_id: Option<&str>,
        key: &str,
        value: Value,
        _timeout: u64,
    ) -> Result<Option<Value>> {
        check_key(key)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(value))
    }

    fn remove(&self, _correlation_id: Option<&str>, key: &str) -> Result<()> {
        check_key(key)
    }
}

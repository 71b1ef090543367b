use crate::ports::provided::{Lock, Result};

/// Lock that always grants acquisition. Used where locking is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLock;

impl NullLock {
    pub fn new() -> Self {
        Self
    }
}

impl Lock for NullLock {
    fn try_acquire_lock(&self, _correlation_id: Option<&str>, _key: &str, _ttl: u64) -> Result<bool> {
        Ok(true)
    }

    fn release_lock(&self, _correlation_id: Option<&str>, _key: &str) -> Result<()> {
        Ok(())
    }

    fn retry_timeout(&self) -> u64 {
        0
    }
}

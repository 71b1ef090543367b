use crate::config::ConfigParams;
use crate::fn_log;
use crate::ports::provided::{Configurable, Lock, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub const DEFAULT_RETRY_TIMEOUT: u64 = 100;

/// In-process lock keyed by string.
///
/// A key is held while its expiry lies in the future; an expired entry is
/// free and is taken over by the next `try_acquire_lock`.
///
/// ### Configuration parameters ###
///
/// - `options.retry_timeout` (or `retry_timeout`): polling interval of `acquire_lock` in milliseconds (100)
///
/// # Examples
///
/// ```
/// use pip_components::{Lock, MemoryLock};
///
/// let lock = MemoryLock::new();
/// assert!(lock.try_acquire_lock(None, "orders", 10_000).unwrap());
/// assert!(!lock.try_acquire_lock(None, "orders", 10_000).unwrap());
///
/// lock.release_lock(None, "orders").unwrap();
/// lock.acquire_lock(None, "orders", 10_000, 100).unwrap();
/// ```
pub struct MemoryLock {
    locks: Mutex<HashMap<String, Instant>>,
    retry_timeout: AtomicU64,
}

impl MemoryLock {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
            retry_timeout: AtomicU64::new(DEFAULT_RETRY_TIMEOUT),
        }
    }

    pub fn with_retry_timeout(retry_timeout: u64) -> Self {
        let lock = Self::new();
        lock.retry_timeout.store(retry_timeout, Ordering::Relaxed);
        lock
    }

    fn lock_map(&self) -> MutexGuard<'_, HashMap<String, Instant>> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// True while `key` is held and not expired.
    pub fn is_locked(&self, key: &str) -> bool {
        self.lock_map()
            .get(key)
            .is_some_and(|expires_at| *expires_at > Instant::now())
    }
}

impl Default for MemoryLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for MemoryLock {
    fn configure(&self, config: &ConfigParams) {
        let retry_timeout = config
            .get_as_nullable_integer("options.retry_timeout")
            .or_else(|| config.get_as_nullable_integer("retry_timeout"));
        if let Some(retry_timeout) = retry_timeout {
            self.retry_timeout.store(retry_timeout.max(0) as u64, Ordering::Relaxed);
        }
    }
}

impl Lock for MemoryLock {
    fn try_acquire_lock(&self, _correlation_id: Option<&str>, key: &str, ttl: u64) -> Result<bool> {
        fn_log!("MemoryLock", "try_acquire_lock", key);

        let mut locks = self.lock_map();
        let now = Instant::now();

        if let Some(expires_at) = locks.get(key) {
            if *expires_at > now {
                return Ok(false);
            }
        }

        locks.insert(key.to_string(), now + Duration::from_millis(ttl));
        Ok(true)
    }

    fn release_lock(&self, _correlation_id: Option<&str>, key: &str) -> Result<()> {
        fn_log!("MemoryLock", "release_lock", key);

        self.lock_map().remove(key);
        Ok(())
    }

    fn retry_timeout(&self) -> u64 {
        self.retry_timeout.load(Ordering::Relaxed)
    }
}

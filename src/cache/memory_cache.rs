use crate::cache::CacheEntry;
use crate::config::ConfigParams;
use crate::fn_log;
use crate::ports::provided::{Cache, ComponentError, Configurable, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

pub const DEFAULT_TIMEOUT: u64 = 60_000;
pub const DEFAULT_MAX_SIZE: usize = 1000;

struct CacheState {
    entries: HashMap<String, CacheEntry>,
    count: usize,
    timeout: u64,
    max_size: usize,
}

/// Bounded in-process cache with lazy expiration.
///
/// Expired entries are dropped when they are read, or during the cleanup
/// pass that runs whenever a store pushes the cache over `max_size`.
///
/// ### Configuration parameters ###
///
/// - `timeout` (or `options.timeout`): default entry timeout in milliseconds (60000)
/// - `max_size` (or `options.max_size`): maximum number of entries, 0 for unbounded (1000)
///
/// # Examples
///
/// ```
/// use pip_components::{Cache, MemoryCache};
/// use serde_json::json;
///
/// let cache = MemoryCache::new();
/// cache.store(None, "user.1", json!({"name": "Alice"}), 1000).unwrap();
///
/// assert_eq!(cache.retrieve(None, "user.1").unwrap(), Some(json!({"name": "Alice"})));
/// assert_eq!(cache.retrieve(None, "user.2").unwrap(), None);
///
/// // storing null removes the key
/// cache.store(None, "user.1", json!(null), 0).unwrap();
/// assert_eq!(cache.retrieve(None, "user.1").unwrap(), None);
/// ```
pub struct MemoryCache {
    state: Mutex<CacheState>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                count: 0,
                timeout: DEFAULT_TIMEOUT,
                max_size: DEFAULT_MAX_SIZE,
            }),
        }
    }

    pub fn with_options(timeout: u64, max_size: usize) -> Self {
        let cache = Self::new();
        {
            let mut state = cache.lock_state();
            state.timeout = timeout;
            state.max_size = max_size;
        }
        cache
    }

    fn lock_state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn timeout(&self) -> u64 {
        self.lock_state().timeout
    }

    pub fn max_size(&self) -> usize {
        self.lock_state().max_size
    }

    /// Number of entries currently held, expired ones included until evicted.
    pub fn len(&self) -> usize {
        self.lock_state().count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut state = self.lock_state();
        state.entries.clear();
        state.count = 0;
    }

    fn check_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(ComponentError::invalid_argument("Key cannot be empty"));
        }
        Ok(())
    }

    /// Drops every expired entry, recounts the survivors, and evicts the one
    /// closest to expiring if the cache is still over capacity.
    fn cleanup(state: &mut CacheState) {
        let now = Instant::now();
        let mut oldest: Option<(String, Instant)> = None;
        let mut count = 0;

        state.entries.retain(|key, entry| {
            if entry.expiration() < now {
                return false;
            }
            count += 1;
            let is_older = match &oldest {
                Some((_, expiration)) => entry.expiration() < *expiration,
                None => true,
            };
            if is_older {
                oldest = Some((key.clone(), entry.expiration()));
            }
            true
        });

        state.count = count;

        if state.count > state.max_size {
            if let Some((key, _)) = oldest {
                state.entries.remove(&key);
                state.count -= 1;
            }
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for MemoryCache {
    fn configure(&self, config: &ConfigParams) {
        let mut state = self.lock_state();

        let timeout = config
            .get_as_nullable_integer("timeout")
            .or_else(|| config.get_as_nullable_integer("options.timeout"));
        if let Some(timeout) = timeout {
            state.timeout = timeout.max(0) as u64;
        }

        let max_size = config
            .get_as_nullable_integer("max_size")
            .or_else(|| config.get_as_nullable_integer("options.max_size"));
        if let Some(max_size) = max_size {
            state.max_size = max_size.max(0) as usize;
        }
    }
}

impl Cache for MemoryCache {
    fn retrieve(&self, _correlation_id: Option<&str>, key: &str) -> Result<Option<Value>> {
        fn_log!("MemoryCache", "retrieve", key);
        Self::check_key(key)?;

        let mut state = self.lock_state();

        let expired = match state.entries.get(key) {
            None => return Ok(None),
            Some(entry) => state.timeout > 0 && entry.is_expired(),
        };

        if expired {
            state.entries.remove(key);
            state.count -= 1;
            return Ok(None);
        }

        Ok(state.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn store(
        &self,
        _correlation_id: Option<&str>,
        key: &str,
        value: Value,
        timeout: u64,
    ) -> Result<Option<Value>> {
        fn_log!("MemoryCache", "store", key);
        Self::check_key(key)?;

        let mut guard = self.lock_state();
        let state = &mut *guard;

        if value.is_null() {
            if state.entries.remove(key).is_some() {
                state.count -= 1;
            }
            return Ok(None);
        }

        let timeout = if timeout > 0 { timeout } else { state.timeout };

        match state.entries.get_mut(key) {
            Some(entry) => entry.set_value(value.clone(), timeout),
            None => {
                state.entries.insert(key.to_string(), CacheEntry::new(key, value.clone(), timeout));
                state.count += 1;
            }
        }

        if state.max_size > 0 && state.count > state.max_size {
            Self::cleanup(state);
        }

        Ok(Some(value))
    }

    fn remove(&self, _correlation_id: Option<&str>, key: &str) -> Result<()> {
        fn_log!("MemoryCache", "remove", key);
        Self::check_key(key)?;

        let mut state = self.lock_state();
        if state.entries.remove(key).is_some() {
            state.count -= 1;
        }
        Ok(())
    }
}

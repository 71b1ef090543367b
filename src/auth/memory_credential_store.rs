use crate::auth::CredentialParams;
use crate::config::ConfigParams;
use crate::fn_log;
use crate::ports::provided::{Configurable, Result};
use crate::ports::required::CredentialStore;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Credential store holding credentials in memory, one per key.
///
/// Configuration lists one credential per key, each value written as a
/// credential string.
///
/// # Examples
///
/// ```
/// use pip_components::{ConfigParams, Configurable, CredentialStore, MemoryCredentialStore};
///
/// let store = MemoryCredentialStore::new();
/// store.configure(&ConfigParams::from_tuples(&[
///     ("db", "user=admin;pass=secret"),
/// ]));
///
/// let credential = store.lookup(None, "db").unwrap().unwrap();
/// assert_eq!(credential.username(), Some("admin"));
///
/// store.store(None, "db", None).unwrap();
/// assert!(store.lookup(None, "db").unwrap().is_none());
/// ```
pub struct MemoryCredentialStore {
    items: Mutex<Vec<(String, CredentialParams)>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn from_config(config: &ConfigParams) -> Self {
        let store = Self::new();
        store.read_credentials(config);
        store
    }

    fn lock_items(&self) -> MutexGuard<'_, Vec<(String, CredentialParams)>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces all entries with one credential per key of `credentials`.
    pub fn read_credentials(&self, credentials: &ConfigParams) {
        let mut items = self.lock_items();
        items.clear();
        for (key, value) in credentials.iter() {
            items.push((key.to_string(), CredentialParams::from_string(value)));
        }
    }

    pub fn len(&self) -> usize {
        self.lock_items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for MemoryCredentialStore {
    fn configure(&self, config: &ConfigParams) {
        self.read_credentials(config);
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn store(
        &self,
        _correlation_id: Option<&str>,
        key: &str,
        credential: Option<CredentialParams>,
    ) -> Result<()> {
        fn_log!("MemoryCredentialStore", "store", key);

        let mut items = self.lock_items();
        let position = items.iter().position(|(k, _)| k == key);

        match (position, credential) {
            (Some(i), Some(credential)) => items[i].1 = credential,
            (None, Some(credential)) => items.push((key.to_string(), credential)),
            (Some(i), None) => {
                items.remove(i);
            }
            (None, None) => {}
        }
        Ok(())
    }

    fn lookup(&self, _correlation_id: Option<&str>, key: &str) -> Result<Option<CredentialParams>> {
        fn_log!("MemoryCredentialStore", "lookup", key);

        Ok(self
            .lock_items()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, credential)| credential.clone()))
    }
}

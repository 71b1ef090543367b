use crate::config::ConfigParams;
use crate::connect::ConnectionParams;
use crate::fn_log;
use crate::ports::provided::{Configurable, Result};
use crate::ports::required::Discovery;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone)]
struct DiscoveryItem {
    key: String,
    connection: ConnectionParams,
}

/// Discovery service holding connections in memory.
///
/// Static connections come from configuration, one per key, each value
/// written as a connection string. Connections registered at runtime are
/// appended, so several connections may live under the same key.
///
/// # Examples
///
/// ```
/// use pip_components::{ConfigParams, Configurable, Discovery, MemoryDiscovery};
///
/// let discovery = MemoryDiscovery::new();
/// discovery.configure(&ConfigParams::from_tuples(&[
///     ("orders", "host=10.0.0.1;port=8080"),
/// ]));
///
/// let connection = discovery.resolve_one(None, "orders").unwrap().unwrap();
/// assert_eq!(connection.host(), Some("10.0.0.1"));
/// assert!(discovery.resolve_one(None, "billing").unwrap().is_none());
/// ```
pub struct MemoryDiscovery {
    items: Mutex<Vec<DiscoveryItem>>,
}

impl MemoryDiscovery {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn from_config(config: &ConfigParams) -> Self {
        let discovery = Self::new();
        discovery.read_connections(config);
        discovery
    }

    fn lock_items(&self) -> MutexGuard<'_, Vec<DiscoveryItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces all entries with one connection per key of `connections`.
    pub fn read_connections(&self, connections: &ConfigParams) {
        let mut items = self.lock_items();
        items.clear();
        for (key, value) in connections.iter() {
            items.push(DiscoveryItem {
                key: key.to_string(),
                connection: ConnectionParams::from_string(value),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.lock_items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for MemoryDiscovery {
    fn configure(&self, config: &ConfigParams) {
        self.read_connections(config);
    }
}

impl Discovery for MemoryDiscovery {
    fn register(
        &self,
        _correlation_id: Option<&str>,
        key: &str,
        connection: ConnectionParams,
    ) -> Result<ConnectionParams> {
        fn_log!("MemoryDiscovery", "register", key);

        self.lock_items().push(DiscoveryItem {
            key: key.to_string(),
            connection: connection.clone(),
        });
        Ok(connection)
    }

    fn resolve_one(&self, _correlation_id: Option<&str>, key: &str) -> Result<Option<ConnectionParams>> {
        fn_log!("MemoryDiscovery", "resolve_one", key);

        Ok(self
            .lock_items()
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.connection.clone()))
    }

    fn resolve_all(&self, _correlation_id: Option<&str>, key: &str) -> Result<Vec<ConnectionParams>> {
        fn_log!("MemoryDiscovery", "resolve_all", key);

        Ok(self
            .lock_items()
            .iter()
            .filter(|item| item.key == key)
            .map(|item| item.connection.clone())
            .collect())
    }
}

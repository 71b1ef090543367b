use crate::auth::MemoryCredentialStore;
use crate::cache::{MemoryCache, NullCache};
use crate::connect::MemoryDiscovery;
use crate::factory::Factory;
use crate::lock::{MemoryLock, NullLock};
use crate::refer::{Component, Descriptor};
use std::ops::Deref;
use std::sync::Arc;

/// Factory for the in-memory and null components of this crate.
///
/// | locator                                      | component               |
/// |----------------------------------------------|-------------------------|
/// | `pip-services:cache:null:*:1.0`              | `NullCache`             |
/// | `pip-services:cache:memory:*:1.0`            | `MemoryCache`           |
/// | `pip-services:lock:null:*:1.0`               | `NullLock`              |
/// | `pip-services:lock:memory:*:1.0`             | `MemoryLock`            |
/// | `pip-services:discovery:memory:*:1.0`        | `MemoryDiscovery`       |
/// | `pip-services:credential-store:memory:*:1.0` | `MemoryCredentialStore` |
///
/// # Examples
///
/// ```
/// use pip_components::{DefaultComponentsFactory, Descriptor};
///
/// let factory = DefaultComponentsFactory::new();
/// let cache = factory
///     .create(&Descriptor::new("pip-services", "cache", "memory", "default", "1.0"))
///     .unwrap();
/// assert!(cache.as_cache().is_some());
/// ```
pub struct DefaultComponentsFactory {
    factory: Factory,
}

fn locator(kind_type: &str, kind: &str) -> Descriptor {
    Descriptor::new("pip-services", kind_type, kind, "*", "1.0")
}

impl DefaultComponentsFactory {
    pub fn new() -> Self {
        let factory = Factory::new()
            .with(locator("cache", "null"), Box::new(|_| Ok(Component::Cache(Arc::new(NullCache::new())))))
            .with(locator("cache", "memory"), Box::new(|_| Ok(Component::Cache(Arc::new(MemoryCache::new())))))
            .with(locator("lock", "null"), Box::new(|_| Ok(Component::Lock(Arc::new(NullLock::new())))))
            .with(locator("lock", "memory"), Box::new(|_| Ok(Component::Lock(Arc::new(MemoryLock::new())))))
            .with(
                locator("discovery", "memory"),
                Box::new(|_| Ok(Component::Discovery(Arc::new(MemoryDiscovery::new())))),
            )
            .with(
                locator("credential-store", "memory"),
                Box::new(|_| Ok(Component::CredentialStore(Arc::new(MemoryCredentialStore::new())))),
            );
        Self { factory }
    }
}

impl Default for DefaultComponentsFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for DefaultComponentsFactory {
    type Target = Factory;

    fn deref(&self) -> &Self::Target {
        &self.factory
    }
}

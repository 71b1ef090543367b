// Spy services for resolver tests
use pip_components::{
    ComponentError, ConnectionParams, CredentialParams, CredentialStore, Discovery,
    MemoryCredentialStore, MemoryDiscovery, Result,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Discovery that counts every call before delegating to `MemoryDiscovery`.
pub struct SpyDiscovery {
    inner: MemoryDiscovery,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl SpyDiscovery {
    pub fn new() -> Self {
        Self {
            inner: MemoryDiscovery::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Discovery for SpyDiscovery {
    fn register(
        &self,
        correlation_id: Option<&str>,
        key: &str,
        connection: ConnectionParams,
    ) -> Result<ConnectionParams> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.register(correlation_id, key, connection)
    }

    fn resolve_one(&self, correlation_id: Option<&str>, key: &str) -> Result<Option<ConnectionParams>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve_one(correlation_id, key)
    }

    fn resolve_all(&self, correlation_id: Option<&str>, key: &str) -> Result<Vec<ConnectionParams>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve_all(correlation_id, key)
    }
}

/// Discovery that fails every call.
pub struct FailingDiscovery;

impl Discovery for FailingDiscovery {
    fn register(&self, _: Option<&str>, _: &str, _: ConnectionParams) -> Result<ConnectionParams> {
        Err(ComponentError::Service("discovery is down".to_string()))
    }

    fn resolve_one(&self, _: Option<&str>, _: &str) -> Result<Option<ConnectionParams>> {
        Err(ComponentError::Service("discovery is down".to_string()))
    }

    fn resolve_all(&self, _: Option<&str>, _: &str) -> Result<Vec<ConnectionParams>> {
        Err(ComponentError::Service("discovery is down".to_string()))
    }
}

/// Credential store that counts lookups.
pub struct SpyCredentialStore {
    inner: MemoryCredentialStore,
    lookups: AtomicUsize,
}

#[allow(dead_code)]
impl SpyCredentialStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryCredentialStore::new(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl CredentialStore for SpyCredentialStore {
    fn store(&self, correlation_id: Option<&str>, key: &str, credential: Option<CredentialParams>) -> Result<()> {
        self.inner.store(correlation_id, key, credential)
    }

    fn lookup(&self, correlation_id: Option<&str>, key: &str) -> Result<Option<CredentialParams>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(correlation_id, key)
    }
}

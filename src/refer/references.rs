use crate::fn_log;
use crate::ports::provided::{Cache, ComponentError, Lock, Result};
use crate::ports::required::{CredentialStore, Discovery};
use crate::refer::Descriptor;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Capability-tagged component handle.
#[derive(Clone)]
pub enum Component {
    Discovery(Arc<dyn Discovery>),
    CredentialStore(Arc<dyn CredentialStore>),
    Cache(Arc<dyn Cache>),
    Lock(Arc<dyn Lock>),
}

impl Component {
    pub fn capability(&self) -> &'static str {
        match self {
            Component::Discovery(_) => "discovery",
            Component::CredentialStore(_) => "credential-store",
            Component::Cache(_) => "cache",
            Component::Lock(_) => "lock",
        }
    }

    pub fn as_discovery(&self) -> Option<Arc<dyn Discovery>> {
        match self {
            Component::Discovery(d) => Some(Arc::clone(d)),
            _ => None,
        }
    }

    pub fn as_credential_store(&self) -> Option<Arc<dyn CredentialStore>> {
        match self {
            Component::CredentialStore(s) => Some(Arc::clone(s)),
            _ => None,
        }
    }

    pub fn as_cache(&self) -> Option<Arc<dyn Cache>> {
        match self {
            Component::Cache(c) => Some(Arc::clone(c)),
            _ => None,
        }
    }

    pub fn as_lock(&self) -> Option<Arc<dyn Lock>> {
        match self {
            Component::Lock(l) => Some(Arc::clone(l)),
            _ => None,
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component::{}", self.capability())
    }
}

struct Reference {
    locator: Descriptor,
    component: Component,
}

/// Shared registry of components, looked up by descriptor.
///
/// Held as `Arc<References>` by every consumer; any holder may add or remove
/// components while others are reading.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pip_components::{Component, Descriptor, MemoryDiscovery, References};
///
/// let references = References::new();
/// references.put(
///     Descriptor::new("pip-services", "discovery", "memory", "default", "1.0"),
///     Component::Discovery(Arc::new(MemoryDiscovery::new())),
/// );
///
/// assert_eq!(references.get_discoveries().len(), 1);
/// assert!(references.get_credential_stores().is_empty());
/// ```
#[derive(Default)]
pub struct References {
    references: RwLock<Vec<Reference>>,
}

impl References {
    pub fn new() -> Self {
        Self {
            references: RwLock::new(Vec::new()),
        }
    }

    pub fn from_tuples(tuples: Vec<(Descriptor, Component)>) -> Self {
        let references = Self::new();
        for (locator, component) in tuples {
            references.put(locator, component);
        }
        references
    }

    pub fn put(&self, locator: Descriptor, component: Component) {
        fn_log!("References", "put", &locator.to_string());
        let mut references = self.references.write().unwrap_or_else(PoisonError::into_inner);
        references.push(Reference { locator, component });
    }

    /// Removes the first component whose locator matches.
    pub fn remove(&self, locator: &Descriptor) -> Option<Component> {
        let mut references = self.references.write().unwrap_or_else(PoisonError::into_inner);
        let index = references.iter().position(|r| r.locator.matches(locator))?;
        Some(references.remove(index).component)
    }

    pub fn remove_all(&self, locator: &Descriptor) -> Vec<Component> {
        let mut references = self.references.write().unwrap_or_else(PoisonError::into_inner);
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(references.len());
        for reference in references.drain(..) {
            if reference.locator.matches(locator) {
                removed.push(reference.component);
            } else {
                kept.push(reference);
            }
        }
        *references = kept;
        removed
    }

    pub fn get_all_locators(&self) -> Vec<Descriptor> {
        let references = self.references.read().unwrap_or_else(PoisonError::into_inner);
        references.iter().map(|r| r.locator.clone()).collect()
    }

    /// Every component whose locator matches, in registration order.
    pub fn get_optional(&self, locator: &Descriptor) -> Vec<Component> {
        let references = self.references.read().unwrap_or_else(PoisonError::into_inner);
        references
            .iter()
            .filter(|r| r.locator.matches(locator))
            .map(|r| r.component.clone())
            .collect()
    }

    /// Like `get_optional` but at least one match is required.
    pub fn get_required(&self, locator: &Descriptor) -> Result<Vec<Component>> {
        let components = self.get_optional(locator);
        if components.is_empty() {
            return Err(ComponentError::ReferenceMissing(format!(
                "Failed to obtain reference to {}",
                locator
            )));
        }
        Ok(components)
    }

    pub fn get_one_optional(&self, locator: &Descriptor) -> Option<Component> {
        self.get_optional(locator).into_iter().next()
    }

    pub fn get_discoveries(&self) -> Vec<Arc<dyn Discovery>> {
        self.get_optional(&Descriptor::new("*", "discovery", "*", "*", "*"))
            .iter()
            .filter_map(Component::as_discovery)
            .collect()
    }

    pub fn get_credential_stores(&self) -> Vec<Arc<dyn CredentialStore>> {
        self.get_optional(&Descriptor::new("*", "credential-store", "*", "*", "*"))
            .iter()
            .filter_map(Component::as_credential_store)
            .collect()
    }

    pub fn get_caches(&self) -> Vec<Arc<dyn Cache>> {
        self.get_optional(&Descriptor::new("*", "cache", "*", "*", "*"))
            .iter()
            .filter_map(Component::as_cache)
            .collect()
    }

    pub fn get_locks(&self) -> Vec<Arc<dyn Lock>> {
        self.get_optional(&Descriptor::new("*", "lock", "*", "*", "*"))
            .iter()
            .filter_map(Component::as_lock)
            .collect()
    }
}

use crate::fn_log;
use crate::ports::provided::{ComponentError, Result};
use crate::refer::{Component, Descriptor};

pub type Constructor = Box<dyn Fn(&Descriptor) -> Result<Component> + Send + Sync>;

struct Registration {
    locator: Descriptor,
    constructor: Constructor,
}

/// Creates components by locator from registered constructors.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pip_components::{Component, Descriptor, Factory, NullCache};
///
/// let mut factory = Factory::new();
/// factory.register(
///     Descriptor::new("app", "cache", "null", "*", "1.0"),
///     Box::new(|_| Ok(Component::Cache(Arc::new(NullCache::new())))),
/// );
///
/// let locator = Descriptor::new("app", "cache", "null", "default", "1.0");
/// assert!(factory.can_create(&locator).is_some());
/// assert_eq!(factory.create(&locator).unwrap().capability(), "cache");
/// ```
#[derive(Default)]
pub struct Factory {
    registrations: Vec<Registration>,
}

impl Factory {
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }

    pub fn register(&mut self, locator: Descriptor, constructor: Constructor) {
        self.registrations.push(Registration { locator, constructor });
    }

    pub fn with(mut self, locator: Descriptor, constructor: Constructor) -> Self {
        self.register(locator, constructor);
        self
    }

    fn find(&self, locator: &Descriptor) -> Option<&Registration> {
        self.registrations.iter().find(|r| r.locator.matches(locator))
    }

    /// Registered locator that matches `locator`, first registered wins.
    pub fn can_create(&self, locator: &Descriptor) -> Option<Descriptor> {
        self.find(locator).map(|r| r.locator.clone())
    }

    pub fn create(&self, locator: &Descriptor) -> Result<Component> {
        let name = locator.to_string();
        fn_log!("Factory", "create", &name);

        let registration = self
            .find(locator)
            .ok_or_else(|| ComponentError::CannotCreate(name.clone()))?;

        (registration.constructor)(locator).map_err(|e| ComponentError::CreateFailure {
            locator: name,
            cause: e.to_string(),
        })
    }
}

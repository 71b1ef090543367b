use crate::config::ConfigParams;
use crate::connect::ConnectionParams;
use crate::ports::provided::{ComponentError, Result};
use crate::ports::required::Discovery;
use crate::refer::References;
use crate::fn_log;
use std::sync::Arc;

/// Resolves connections from configuration, following discovery keys
/// through the discovery services found in `References`.
///
/// ### Configuration parameters ###
///
/// - `connection.*`: a single connection
/// - `connections.<name>.*`: several connections, used instead of `connection` when present
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pip_components::{
///     Component, ConfigParams, ConnectionParams, ConnectionResolver, Descriptor,
///     Discovery, MemoryDiscovery, References,
/// };
///
/// let discovery = Arc::new(MemoryDiscovery::new());
/// discovery.register(None, "orders", ConnectionParams::from_string("host=10.0.0.1;port=8080")).unwrap();
///
/// let references = Arc::new(References::new());
/// references.put(
///     Descriptor::new("pip-services", "discovery", "memory", "default", "1.0"),
///     Component::Discovery(discovery),
/// );
///
/// let mut resolver = ConnectionResolver::new().with_references(references);
/// resolver.configure(&ConfigParams::from_tuples(&[("connection.discovery_key", "orders")]));
///
/// let connection = resolver.resolve(None).unwrap().unwrap();
/// assert_eq!(connection.host(), Some("10.0.0.1"));
/// assert_eq!(connection.port(), 8080);
/// ```
#[derive(Default)]
pub struct ConnectionResolver {
    connections: Vec<ConnectionParams>,
    references: Option<Arc<References>>,
}

impl ConnectionResolver {
    pub fn new() -> Self {
        Self {
            connections: Vec::new(),
            references: None,
        }
    }

    pub fn with_references(mut self, references: Arc<References>) -> Self {
        self.references = Some(references);
        self
    }

    pub fn set_references(&mut self, references: Arc<References>) {
        self.references = Some(references);
    }

    /// Appends the connections declared in `config`.
    pub fn configure(&mut self, config: &ConfigParams) {
        self.connections.extend(ConnectionParams::many_from_config(config));
    }

    pub fn add(&mut self, connection: ConnectionParams) {
        self.connections.push(connection);
    }

    /// Configured connections as they are, discovery keys unresolved.
    pub fn get_all(&self) -> &[ConnectionParams] {
        &self.connections
    }

    /// Discovery services currently registered, or `None` without a registry.
    /// An empty registry is a missing reference, not an empty result.
    fn discoveries(&self) -> Result<Option<Vec<Arc<dyn Discovery>>>> {
        let Some(references) = &self.references else {
            return Ok(None);
        };

        let discoveries = references.get_discoveries();
        if discoveries.is_empty() {
            return Err(ComponentError::ReferenceMissing(
                "Discovery services not found in references".to_string(),
            ));
        }
        Ok(Some(discoveries))
    }

    fn resolve_in_discovery(
        &self,
        correlation_id: Option<&str>,
        connection: &ConnectionParams,
    ) -> Result<Option<ConnectionParams>> {
        let Some(key) = connection.discovery_key() else {
            return Ok(None);
        };
        let Some(discoveries) = self.discoveries()? else {
            return Ok(None);
        };

        for discovery in discoveries {
            if let Some(found) = discovery.resolve_one(correlation_id, key)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    fn resolve_all_in_discovery(
        &self,
        correlation_id: Option<&str>,
        connection: &ConnectionParams,
    ) -> Result<Vec<ConnectionParams>> {
        let Some(key) = connection.discovery_key() else {
            return Ok(Vec::new());
        };
        let Some(discoveries) = self.discoveries()? else {
            return Ok(Vec::new());
        };

        let mut found = Vec::new();
        for discovery in discoveries {
            found.extend(discovery.resolve_all(correlation_id, key)?);
        }
        Ok(found)
    }

    /// First usable connection.
    ///
    /// A connection without a discovery key is returned as is and no
    /// discovery service is consulted. Only when every connection carries a
    /// discovery key are they looked up in order; the first hit is merged over
    /// its configured entry, with discovered values winning.
    pub fn resolve(&self, correlation_id: Option<&str>) -> Result<Option<ConnectionParams>> {
        fn_log!("ConnectionResolver", "resolve", correlation_id.unwrap_or_default());

        if self.connections.is_empty() {
            return Ok(None);
        }

        if let Some(local) = self.connections.iter().find(|c| !c.use_discovery()) {
            return Ok(Some(local.clone()));
        }

        for connection in &self.connections {
            if let Some(found) = self.resolve_in_discovery(correlation_id, connection)? {
                return Ok(Some(connection.merged_with(&found)));
            }
        }
        Ok(None)
    }

    /// Every connection: those without a discovery key first, then every
    /// discovered connection, each merged over the entry that pointed to it.
    pub fn resolve_all(&self, correlation_id: Option<&str>) -> Result<Vec<ConnectionParams>> {
        fn_log!("ConnectionResolver", "resolve_all", correlation_id.unwrap_or_default());

        let (to_resolve, local): (Vec<&ConnectionParams>, Vec<&ConnectionParams>) =
            self.connections.iter().partition(|c| c.use_discovery());
        let mut result: Vec<ConnectionParams> = local.into_iter().cloned().collect();

        for connection in to_resolve {
            for found in self.resolve_all_in_discovery(correlation_id, connection)? {
                result.push(connection.merged_with(&found));
            }
        }
        Ok(result)
    }

    /// Registers `connection` with every discovery service under its
    /// discovery key and keeps it in the resolver's own list.
    ///
    /// Returns `Ok(false)` when there is nothing to register with: no
    /// discovery key, no registry, or no discovery services. In those cases
    /// the connection is not added to the resolver's list either.
    pub fn register(&mut self, correlation_id: Option<&str>, connection: ConnectionParams) -> Result<bool> {
        fn_log!("ConnectionResolver", "register", correlation_id.unwrap_or_default());

        let Some(key) = connection.discovery_key() else {
            return Ok(false);
        };
        let Some(references) = &self.references else {
            return Ok(false);
        };

        let discoveries = references.get_discoveries();
        if discoveries.is_empty() {
            return Ok(false);
        }

        for discovery in &discoveries {
            discovery.register(correlation_id, key, connection.clone())?;
        }

        self.connections.push(connection);
        Ok(true)
    }
}

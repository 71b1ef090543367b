use crate::config::ConfigParams;
use std::fmt;
use std::ops::{Deref, DerefMut};

const ALIASES: &[&[&str]] = &[&["host", "ip"]];

/// Connection parameters: host/port/protocol/uri, or a discovery key that
/// points at a discovery service holding the rest.
///
/// # Examples
///
/// ```
/// use pip_components::ConnectionParams;
///
/// let connection = ConnectionParams::from_string("protocol=http;ip=10.0.0.1;port=8080");
/// assert_eq!(connection.host(), Some("10.0.0.1"));
/// assert_eq!(connection.port(), 8080);
/// assert!(!connection.use_discovery());
///
/// let indirect = ConnectionParams::from_tuples(&[("discovery_key", "orders")]);
/// assert!(indirect.use_discovery());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionParams {
    params: ConfigParams,
}

impl ConnectionParams {
    pub fn new(params: ConfigParams) -> Self {
        Self { params }
    }

    pub fn from_string(line: &str) -> Self {
        Self::new(ConfigParams::from_string(line))
    }

    pub fn from_tuples(tuples: &[(&str, &str)]) -> Self {
        Self::new(ConfigParams::from_tuples(tuples))
    }

    /// Connections declared in `config`.
    ///
    /// A non-empty `connections` section yields one connection per
    /// sub-section, in order. Otherwise a non-empty `connection` section
    /// yields a single connection. The two are never combined.
    pub fn many_from_config(config: &ConfigParams) -> Vec<ConnectionParams> {
        let connections = config.get_section("connections");
        let names = connections.get_section_names();

        if !names.is_empty() {
            return names
                .iter()
                .map(|name| Self::new(connections.get_section(name)))
                .collect();
        }

        let connection = config.get_section("connection");
        if connection.is_empty() {
            Vec::new()
        } else {
            vec![Self::new(connection)]
        }
    }

    pub fn from_config(config: &ConfigParams) -> Option<ConnectionParams> {
        Self::many_from_config(config).into_iter().next()
    }

    pub fn params(&self) -> &ConfigParams {
        &self.params
    }

    pub fn into_params(self) -> ConfigParams {
        self.params
    }

    /// `self` overridden by `other`; `other` wins on conflicts, also when
    /// the two name a field by different aliases (`host` and `ip`).
    pub fn merged_with(&self, other: &ConnectionParams) -> ConnectionParams {
        Self::new(self.params.override_with_aliases(&other.params, ALIASES))
    }

    pub fn use_discovery(&self) -> bool {
        self.discovery_key().is_some()
    }

    pub fn discovery_key(&self) -> Option<&str> {
        self.params.get("discovery_key")
    }

    pub fn set_discovery_key(&mut self, value: &str) {
        self.params.put("discovery_key", value);
    }

    pub fn protocol(&self) -> Option<&str> {
        self.params.get("protocol")
    }

    pub fn protocol_with_default(&self, default: &str) -> String {
        self.params.get_as_string_with_default("protocol", default)
    }

    pub fn set_protocol(&mut self, value: &str) {
        self.params.put("protocol", value);
    }

    /// `host`, falling back to `ip`.
    pub fn host(&self) -> Option<&str> {
        self.params.get("host").or_else(|| self.params.get("ip"))
    }

    pub fn set_host(&mut self, value: &str) {
        self.params.put("host", value);
    }

    /// 0 when absent or not a number.
    pub fn port(&self) -> i64 {
        self.params.get_as_integer_with_default("port", 0)
    }

    pub fn port_with_default(&self, default: i64) -> i64 {
        self.params.get_as_nullable_integer("port").unwrap_or(default)
    }

    pub fn set_port(&mut self, value: i64) {
        self.params.put("port", &value.to_string());
    }

    pub fn uri(&self) -> Option<&str> {
        self.params.get("uri")
    }

    pub fn set_uri(&mut self, value: &str) {
        self.params.put("uri", value);
    }
}

impl From<ConfigParams> for ConnectionParams {
    fn from(params: ConfigParams) -> Self {
        Self::new(params)
    }
}

impl Deref for ConnectionParams {
    type Target = ConfigParams;

    fn deref(&self) -> &Self::Target {
        &self.params
    }
}

impl DerefMut for ConnectionParams {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.params
    }
}

impl fmt::Display for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.params, f)
    }
}

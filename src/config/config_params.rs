use crate::common::DotKey;
use crate::ports::provided::{ComponentError, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt;

/// Ordered string-keyed parameters with dotted sections.
///
/// Keys keep their insertion order; re-setting a key keeps its position.
/// `a.b.c` lives in section `a`, sub-section `b`.
///
/// # Examples
///
/// ```
/// use pip_components::ConfigParams;
///
/// let config = ConfigParams::from_tuples(&[
///     ("connection.host", "localhost"),
///     ("connection.port", "8080"),
///     ("options.timeout", "1000"),
/// ]);
///
/// assert_eq!(config.get_section_names(), vec!["connection", "options"]);
///
/// let connection = config.get_section("connection");
/// assert_eq!(connection.get("host"), Some("localhost"));
/// assert_eq!(connection.get_as_integer_with_default("port", 0), 8080);
/// assert_eq!(config.to_string(), "connection.host=localhost;connection.port=8080;options.timeout=1000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigParams {
    entries: Vec<(String, String)>,
}

impl ConfigParams {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_tuples(tuples: &[(&str, &str)]) -> Self {
        let mut config = Self::new();
        for (key, value) in tuples {
            config.put(key, value);
        }
        config
    }

    /// Parses `key1=value1;key2=value2`.
    /// Empty segments are skipped; a segment without `=` gets an empty value.
    pub fn from_string(line: &str) -> Self {
        let mut config = Self::new();
        for token in line.split(';') {
            if token.trim().is_empty() {
                continue;
            }
            match token.split_once('=') {
                Some((key, value)) => config.put(key.trim(), value.trim()),
                None => config.put(token.trim(), ""),
            }
        }
        config
    }

    /// Flattens a JSON document into dotted keys.
    /// Arrays are keyed by element index and nulls are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pip_components::ConfigParams;
    /// use serde_json::json;
    ///
    /// let config = ConfigParams::from_value(&json!({
    ///     "connections": [{"host": "a", "port": 1}, {"host": "b", "port": 2}],
    ///     "enabled": true
    /// }));
    /// assert_eq!(config.get("connections.1.host"), Some("b"));
    /// assert_eq!(config.get("connections.0.port"), Some("1"));
    /// assert_eq!(config.get("enabled"), Some("true"));
    /// ```
    pub fn from_value(value: &Value) -> Self {
        let mut config = Self::new();
        Self::flatten("", value, &mut config);
        config
    }

    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| ComponentError::config(format!("ConfigParams::from_serializable: {}", e)))?;
        Ok(Self::from_value(&value))
    }

    fn flatten(prefix: &str, value: &Value, config: &mut ConfigParams) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    Self::flatten(&DotKey::join(prefix, key), child, config);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    Self::flatten(&DotKey::join(prefix, &index.to_string()), child, config);
                }
            }
            Value::Null => {}
            Value::String(s) if !prefix.is_empty() => config.put(prefix, s),
            Value::Bool(b) if !prefix.is_empty() => config.put(prefix, &b.to_string()),
            Value::Number(n) if !prefix.is_empty() => config.put(prefix, &n.to_string()),
            _ => {}
        }
    }

    /// Combines configs left to right; later configs win on conflicts.
    pub fn merge_configs(configs: &[&ConfigParams]) -> Self {
        let mut result = Self::new();
        for config in configs {
            for (key, value) in config.iter() {
                result.put(key, value);
            }
        }
        result
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].1.as_str())
    }

    pub fn get_as_string_with_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Integer value; decimal text is truncated, anything else is `None`.
    pub fn get_as_nullable_integer(&self, key: &str) -> Option<i64> {
        let raw = self.get(key)?.trim();
        raw.parse::<i64>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
    }

    pub fn get_as_integer_with_default(&self, key: &str, default: i64) -> i64 {
        self.get_as_nullable_integer(key).unwrap_or(default)
    }

    pub fn get_as_nullable_boolean(&self, key: &str) -> Option<bool> {
        match self.get(key)?.trim().to_lowercase().as_str() {
            "true" | "1" | "t" | "yes" | "y" => Some(true),
            "false" | "0" | "f" | "no" | "n" => Some(false),
            _ => None,
        }
    }

    pub fn get_as_boolean_with_default(&self, key: &str, default: bool) -> bool {
        self.get_as_nullable_boolean(key).unwrap_or(default)
    }

    pub fn put(&mut self, key: &str, value: &str) {
        match self.position(key) {
            Some(i) => self.entries[i].1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    /// Distinct first key segments in first-seen order.
    pub fn get_section_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for key in self.keys() {
            let name = DotKey::new(key).section().to_string();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Keys under `name.` with the prefix stripped.
    pub fn get_section(&self, name: &str) -> ConfigParams {
        let mut section = Self::new();
        for (key, value) in self.iter() {
            if let Some(stripped) = DotKey::strip_section(key, name) {
                section.put(stripped, value);
            }
        }
        section
    }

    pub fn add_section(&mut self, name: &str, section: &ConfigParams) {
        for (key, value) in section.iter() {
            self.put(&DotKey::join(name, key), value);
        }
    }

    /// Copy of `self` where keys from `other` win.
    pub fn override_with(&self, other: &ConfigParams) -> ConfigParams {
        Self::merge_configs(&[self, other])
    }

    /// Like `override_with`, but a field that `other` sets under any of its
    /// alias keys drops every alias of that field from `self` first.
    pub fn override_with_aliases(&self, other: &ConfigParams, aliases: &[&[&str]]) -> ConfigParams {
        let mut base = self.clone();
        for keys in aliases {
            if keys.iter().any(|key| other.contains_key(key)) {
                for key in keys.iter() {
                    base.remove(key);
                }
            }
        }
        base.override_with(other)
    }

    /// Copy of `self` where missing keys are filled from `defaults`.
    pub fn set_defaults(&self, defaults: &ConfigParams) -> ConfigParams {
        Self::merge_configs(&[defaults, self])
    }
}

impl fmt::Display for ConfigParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ";")?;
            }
            first = false;
            if value.is_empty() {
                write!(f, "{}", key)?;
            } else {
                write!(f, "{}={}", key, value)?;
            }
        }
        Ok(())
    }
}

impl Serialize for ConfigParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for ConfigParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.put(key, value);
        }
        config
    }
}

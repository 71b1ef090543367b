use crate::common::Template;
use crate::config::ConfigParams;
use crate::ports::provided::Result;
use crate::{fn_log, warn_log};

/// Source of component configuration.
pub trait ConfigReader {
    /// Reads the configuration, substituting `{{ name }}` with `parameters`.
    fn read_config(
        &self,
        correlation_id: Option<&str>,
        parameters: Option<&ConfigParams>,
    ) -> Result<ConfigParams>;
}

/// Renders `{{ name }}` references in `text` from `parameters`.
/// Unknown names render empty.
pub fn parameterize(text: &str, parameters: &ConfigParams) -> String {
    let mut template = Template::new();
    let rendered = template.render(text, |name| parameters.get(name).map(|v| v.to_string()));

    if !template.get_missing_keys().is_empty() {
        let missing_list = template.get_missing_keys().join(", ");
        warn_log!(
            "ConfigReader",
            "parameterize",
            &format!("Unresolved parameters: {}", missing_list)
        );
    }

    rendered
}

/// Config reader over an in-memory `ConfigParams`.
///
/// # Examples
///
/// ```
/// use pip_components::{ConfigParams, ConfigReader, MemoryConfigReader};
///
/// let reader = MemoryConfigReader::new(ConfigParams::from_tuples(&[
///     ("connection.host", "{{ HOST }}"),
///     ("connection.port", "8080"),
/// ]));
///
/// let parameters = ConfigParams::from_tuples(&[("HOST", "10.0.0.1")]);
/// let config = reader.read_config(None, Some(&parameters)).unwrap();
/// assert_eq!(config.get("connection.host"), Some("10.0.0.1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigReader {
    config: ConfigParams,
}

impl MemoryConfigReader {
    pub fn new(config: ConfigParams) -> Self {
        Self { config }
    }

    /// Replaces the held configuration.
    pub fn configure(&mut self, config: &ConfigParams) {
        self.config = config.clone();
    }
}

impl ConfigReader for MemoryConfigReader {
    fn read_config(
        &self,
        _correlation_id: Option<&str>,
        parameters: Option<&ConfigParams>,
    ) -> Result<ConfigParams> {
        fn_log!("MemoryConfigReader", "read_config");

        let Some(parameters) = parameters else {
            return Ok(self.config.clone());
        };

        let mut config = ConfigParams::new();
        for (key, value) in self.config.iter() {
            config.put(key, &parameterize(value, parameters));
        }
        Ok(config)
    }
}

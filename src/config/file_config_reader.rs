use crate::config::config_reader::{parameterize, ConfigReader};
use crate::config::ConfigParams;
use crate::fn_log;
use crate::ports::provided::{ComponentError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Path and default template parameters shared by the file readers.
///
/// `configure` reads:
/// - `path`: file to read
/// - `parameters.*`: default template parameters, overridden per call
#[derive(Debug, Clone, Default)]
struct FileSource {
    path: Option<PathBuf>,
    parameters: ConfigParams,
}

impl FileSource {
    fn new(path: Option<&str>) -> Self {
        Self {
            path: path.map(PathBuf::from),
            parameters: ConfigParams::new(),
        }
    }

    fn configure(&mut self, config: &ConfigParams) {
        if let Some(path) = config.get("path") {
            self.path = Some(PathBuf::from(path));
        }
        let parameters = config.get_section("parameters");
        if !parameters.is_empty() {
            self.parameters = self.parameters.override_with(&parameters);
        }
    }

    fn read_text(&self, class: &str, parameters: Option<&ConfigParams>) -> Result<String> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| ComponentError::config(format!("{}: config file path is not set", class)))?;

        let text = read_file(class, path)?;

        let merged = match parameters {
            Some(parameters) => self.parameters.override_with(parameters),
            None => self.parameters.clone(),
        };
        Ok(parameterize(&text, &merged))
    }
}

fn read_file(class: &str, path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        ComponentError::FileError(format!("{}: failed reading '{}': {}", class, path.display(), e))
    })
}

/// Reads configuration from a JSON file.
///
/// Nested objects become dotted sections, arrays are keyed by index.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigReader {
    source: FileSource,
}

impl JsonConfigReader {
    pub fn new(path: Option<&str>) -> Self {
        Self {
            source: FileSource::new(path),
        }
    }

    pub fn configure(&mut self, config: &ConfigParams) {
        self.source.configure(config);
    }

    /// Parses JSON text into a document.
    pub fn parse(text: &str) -> Result<Value> {
        serde_json::from_str(text)
            .map_err(|e| ComponentError::config(format!("JsonConfigReader: invalid JSON: {}", e)))
    }

    pub fn read_config_from_file(
        correlation_id: Option<&str>,
        path: &str,
        parameters: Option<&ConfigParams>,
    ) -> Result<ConfigParams> {
        Self::new(Some(path)).read_config(correlation_id, parameters)
    }
}

impl ConfigReader for JsonConfigReader {
    fn read_config(
        &self,
        _correlation_id: Option<&str>,
        parameters: Option<&ConfigParams>,
    ) -> Result<ConfigParams> {
        fn_log!("JsonConfigReader", "read_config");

        let text = self.source.read_text("JsonConfigReader", parameters)?;
        Ok(ConfigParams::from_value(&Self::parse(&text)?))
    }
}

/// Reads configuration from a YAML file.
#[derive(Debug, Clone, Default)]
pub struct YamlConfigReader {
    source: FileSource,
}

impl YamlConfigReader {
    pub fn new(path: Option<&str>) -> Self {
        Self {
            source: FileSource::new(path),
        }
    }

    pub fn configure(&mut self, config: &ConfigParams) {
        self.source.configure(config);
    }

    /// Parses YAML text into a document; mapping order is kept.
    pub fn parse(text: &str) -> Result<Value> {
        serde_yaml_ng::from_str(text)
            .map_err(|e| ComponentError::config(format!("YamlConfigReader: invalid YAML: {}", e)))
    }

    pub fn read_config_from_file(
        correlation_id: Option<&str>,
        path: &str,
        parameters: Option<&ConfigParams>,
    ) -> Result<ConfigParams> {
        Self::new(Some(path)).read_config(correlation_id, parameters)
    }
}

impl ConfigReader for YamlConfigReader {
    fn read_config(
        &self,
        _correlation_id: Option<&str>,
        parameters: Option<&ConfigParams>,
    ) -> Result<ConfigParams> {
        fn_log!("YamlConfigReader", "read_config");

        let text = self.source.read_text("YamlConfigReader", parameters)?;
        Ok(ConfigParams::from_value(&Self::parse(&text)?))
    }
}

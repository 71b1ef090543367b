// Configuration parameters and readers

pub mod config_params;
pub mod config_reader;
pub mod file_config_reader;

pub use config_params::ConfigParams;
pub use config_reader::{parameterize, ConfigReader, MemoryConfigReader};
pub use file_config_reader::{JsonConfigReader, YamlConfigReader};

// Common utilities

pub mod dot_key;
pub mod log_format;
pub mod template;

pub use dot_key::DotKey;
pub use log_format::LogFormat;
pub use template::Template;

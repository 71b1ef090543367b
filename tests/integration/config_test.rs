// Configuration integration tests
use pip_components::{ConfigParams, ConfigReader, JsonConfigReader, MemoryConfigReader, YamlConfigReader};
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ============================================================================
// Sections
// ============================================================================

#[test]
fn test_sections_from_string() {
    let config = ConfigParams::from_string(
        "connection.host=localhost;connection.port=8080;options.timeout=1000;name=svc",
    );

    assert_eq!(config.get_section_names(), vec!["connection", "options", "name"]);

    let connection = config.get_section("connection");
    assert_eq!(connection.get("host"), Some("localhost"));
    assert_eq!(connection.get_as_integer_with_default("port", 0), 8080);
    assert_eq!(config.get_as_integer_with_default("options.timeout", 0), 1000);
}

#[test]
fn test_override_and_defaults() {
    let base = ConfigParams::from_tuples(&[("a", "1"), ("b", "2")]);
    let other = ConfigParams::from_tuples(&[("b", "20"), ("c", "30")]);

    let overridden = base.override_with(&other);
    assert_eq!(overridden.get("b"), Some("20"));
    assert_eq!(overridden.get("c"), Some("30"));

    let defaulted = base.set_defaults(&other);
    assert_eq!(defaulted.get("b"), Some("2"));
    assert_eq!(defaulted.get("c"), Some("30"));
}

// ============================================================================
// Readers
// ============================================================================

#[test]
fn test_memory_reader_parameterizes() {
    let reader = MemoryConfigReader::new(ConfigParams::from_tuples(&[("connection.host", "{{ HOST }}")]));
    let parameters = ConfigParams::from_tuples(&[("HOST", "db.local")]);

    let config = reader.read_config(None, Some(&parameters)).unwrap();
    assert_eq!(config.get("connection.host"), Some("db.local"));
}

#[test]
fn test_json_reader() {
    let file = temp_file(
        r#"{ "connection": { "host": "{{HOST}}", "port": 8080 }, "enabled": true }"#,
        ".json",
    );
    let path = file.path().to_str().unwrap();
    let parameters = ConfigParams::from_tuples(&[("HOST", "10.0.0.1")]);

    let config = JsonConfigReader::read_config_from_file(None, path, Some(&parameters)).unwrap();
    assert_eq!(config.get("connection.host"), Some("10.0.0.1"));
    assert_eq!(config.get("connection.port"), Some("8080"));
    assert!(config.get_as_boolean_with_default("enabled", false));
}

#[test]
fn test_yaml_reader_keeps_order() {
    let file = temp_file(
        "connections:\n  primary:\n    host: a\n  backup:\n    host: b\nlist:\n  - x\n  - y\n",
        ".yaml",
    );
    let path = file.path().to_str().unwrap();

    let config = YamlConfigReader::read_config_from_file(None, path, None).unwrap();
    assert_eq!(config.get_section("connections").get_section_names(), vec!["primary", "backup"]);
    assert_eq!(config.get("list.1"), Some("y"));
}

#[test]
fn test_yaml_reader_configured_path() {
    let file = temp_file("name: {{ NAME }}\n", ".yml");

    let mut reader = YamlConfigReader::new(None);
    reader.configure(&ConfigParams::from_tuples(&[
        ("path", file.path().to_str().unwrap()),
        ("parameters.NAME", "orders"),
    ]));

    let config = reader.read_config(None, None).unwrap();
    assert_eq!(config.get("name"), Some("orders"));
}

#[test]
fn test_missing_file_is_error() {
    let result = JsonConfigReader::read_config_from_file(None, "/nonexistent/config.json", None);
    assert!(result.is_err());
}

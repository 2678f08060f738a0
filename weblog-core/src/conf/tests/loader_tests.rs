use crate::conf::{
    ConfigError, ConfigOverrides, WeblogConfig, load_config, parse_config, resolve,
};
use crate::parse::DEFAULT_PATTERN;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn overrides() -> ConfigOverrides {
    ConfigOverrides::default()
}

#[test]
fn parses_every_field() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("weblog.hcl");
    fs::write(
        &path,
        r#"
input         = "logs/*.log"
partitions    = 4
failed_sample = 5
"#,
    )
    .unwrap();

    // Act
    let parsed = parse_config(&path).unwrap();

    // Assert
    assert_eq!(
        parsed,
        WeblogConfig {
            input: Some("logs/*.log".to_string()),
            pattern: None,
            partitions: Some(4),
            failed_sample: Some(5),
        }
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weblog.hcl");
    fs::write(&path, "inputs = \"a.log\"\n").unwrap();

    let result = parse_config(&path);

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().unwrap();

    let result = load_config(Some(&dir.path().join("nope.hcl")), &overrides());

    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn file_input_is_relative_to_config_dir() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("weblog.hcl");
    fs::write(&path, "input = \"access.log\"\n").unwrap();

    // Act
    let cfg = load_config(Some(&path), &overrides()).unwrap();

    // Assert
    assert_eq!(
        cfg.input,
        dir.path().join("access.log").to_string_lossy().into_owned()
    );
    assert_eq!(cfg.pattern, DEFAULT_PATTERN);
    assert_eq!(cfg.failed_sample, 20);
    assert!(cfg.partitions >= 1);
}

#[test]
fn overrides_win_over_file() {
    // Arrange
    let file = WeblogConfig {
        input: Some("from-file.log".to_string()),
        pattern: None,
        partitions: Some(2),
        failed_sample: None,
    };
    let overrides = ConfigOverrides {
        input: Some("from-cli.log".to_string()),
        pattern: None,
        partitions: Some(7),
    };

    // Act
    let cfg = resolve(file, Path::new("conf"), &overrides).unwrap();

    // Assert
    assert_eq!(cfg.input, "from-cli.log");
    assert_eq!(cfg.partitions, 7);
}

#[test]
fn missing_input_is_an_error() {
    let result = resolve(WeblogConfig::default(), Path::new(""), &overrides());

    assert!(matches!(result, Err(ConfigError::MissingInput)));
}

#[test]
fn zero_partitions_are_rejected() {
    let file = WeblogConfig {
        input: Some("a.log".to_string()),
        partitions: Some(0),
        ..WeblogConfig::default()
    };

    let result = resolve(file, Path::new(""), &overrides());

    assert!(matches!(
        result,
        Err(ConfigError::InvalidPartitions { partitions: 0 })
    ));
}

#[test]
fn pattern_must_compile() {
    let overrides = ConfigOverrides {
        input: Some("a.log".to_string()),
        pattern: Some("([unclosed".to_string()),
        partitions: None,
    };

    let result = resolve(WeblogConfig::default(), Path::new(""), &overrides);

    assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
}

#[test]
fn pattern_must_expose_nine_groups() {
    let overrides = ConfigOverrides {
        input: Some("a.log".to_string()),
        pattern: Some(r"^(\S+) (\S+)".to_string()),
        partitions: None,
    };

    let result = resolve(WeblogConfig::default(), Path::new(""), &overrides);

    assert!(matches!(
        result,
        Err(ConfigError::PatternGroups {
            expected: 9,
            found: 2
        })
    ));
}

#[test]
fn resolved_config_serializes_without_parser() {
    let overrides = ConfigOverrides {
        input: Some("a.log".to_string()),
        pattern: None,
        partitions: Some(3),
    };
    let cfg = resolve(WeblogConfig::default(), Path::new(""), &overrides).unwrap();

    let json = serde_json::to_value(&cfg).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "input": "a.log",
            "pattern": DEFAULT_PATTERN,
            "partitions": 3,
            "failed_sample": 20,
        })
    );
}

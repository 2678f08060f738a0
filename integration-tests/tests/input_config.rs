use integration_tests::harness::write_log;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;
use weblog_core::analysis::AnalysisReport;
use weblog_core::cli::RunArgs;
use weblog_core::cli::analyze::build_store;
use weblog_core::conf::ConfigError;

const GOOD: &str = r#"a.example - - [01/Aug/1995:10:00:00 -0400] "GET /index.html HTTP/1.0" 200 100"#;
const OTHER: &str = r#"b.example - - [01/Aug/1995:11:00:00 -0400] "GET /about.html HTTP/1.0" 404 -"#;

#[test]
fn config_file_drives_a_glob_run() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("logs")).unwrap();
    write_log(&dir.path().join("logs"), "access-1.log", &[GOOD, "bad line"]);
    write_log(&dir.path().join("logs"), "access-2.log", &[OTHER]);
    let config = dir.path().join("weblog.hcl");
    fs::write(
        &config,
        "input = \"logs/access-*.log\"\npartitions = 2\nfailed_sample = 1\n",
    )
    .unwrap();

    let args = RunArgs {
        config: Some(config),
        ..RunArgs::default()
    };

    // Act
    let cfg = args.load().unwrap();
    let store = build_store(&cfg).unwrap();

    // Assert
    assert_eq!(cfg.partitions, 2);
    assert_eq!(store.summary().total, 3);
    assert_eq!(store.summary().failed, 1);
    assert_eq!(store.summary().failed_lines.len(), 1);
    assert_eq!(
        store.records().map(|r| r.host.clone()).collect(),
        vec!["a.example", "b.example"]
    );
}

#[test]
fn flags_override_config_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let log = write_log(dir.path(), "direct.log", &[GOOD, OTHER, GOOD]);
    let config = dir.path().join("weblog.hcl");
    fs::write(&config, "input = \"missing/*.log\"\npartitions = 8\n").unwrap();

    let args = RunArgs {
        config: Some(config),
        input: Some(log.to_string_lossy().into_owned()),
        partitions: Some(3),
        ..RunArgs::default()
    };

    // Act
    let cfg = args.load().unwrap();
    let report = AnalysisReport::build(&build_store(&cfg).unwrap());

    // Assert
    assert_eq!(cfg.partitions, 3);
    assert_eq!(report.summary.parsed, 3);
    assert_eq!(report.unique_hosts, 2);
}

#[test]
fn custom_pattern_parses_other_layouts() {
    // Arrange
    let dir = tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "pipes.log",
        &["h1|-|-|01/Aug/1995:10:00:00 -0400|GET|/x|HTTP/1.0|200|5"],
    );
    let args = RunArgs {
        input: Some(log.to_string_lossy().into_owned()),
        pattern: Some(
            r"^([^|]*)\|([^|]*)\|([^|]*)\|([^|]*)\|([^|]*)\|([^|]*)\|([^|]*)\|(\d{3})\|(\S+)$"
                .to_string(),
        ),
        partitions: Some(1),
        ..RunArgs::default()
    };

    // Act
    let store = build_store(&args.load().unwrap()).unwrap();

    // Assert
    let records = store.records().collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].endpoint, "/x");
    assert_eq!(records[0].content_size, 5);
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempdir().unwrap();
    let args = RunArgs {
        input: Some(dir.path().join("nope.log").to_string_lossy().into_owned()),
        partitions: Some(1),
        ..RunArgs::default()
    };

    let cfg = args.load().unwrap();

    assert!(build_store(&cfg).is_err());
}

#[test]
fn bad_pattern_is_a_config_error() {
    let args = RunArgs {
        input: Some("a.log".to_string()),
        pattern: Some(r"(\S+)".to_string()),
        ..RunArgs::default()
    };

    let result = args.load();

    assert!(matches!(
        result,
        Err(ConfigError::PatternGroups { found: 1, .. })
    ));
}

use std::fs;
use std::path::{Path, PathBuf};
use weblog_core::input::load_lines;
use weblog_core::parse::LineParser;
use weblog_core::store::RecordStore;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Read a fixture log into a store with the default grammar.
pub fn load_fixture(file: &str, partitions: usize) -> RecordStore {
    let path = fixture_path(file);
    let lines = load_lines(&path.to_string_lossy()).expect("failed to read fixture log");

    RecordStore::build(lines, &LineParser::default(), partitions, 20)
}

/// Write `lines` as a log file under `dir`.
pub fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(&path, body).expect("failed to write log file");
    path
}

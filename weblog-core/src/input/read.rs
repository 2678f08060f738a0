use crate::input::discover::{discover, is_glob};
use crate::input::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Discover and read every line of `input`.
///
/// A plain path must exist; a glob must match at least one file. Fails with
/// `InputError::Empty` when nothing was read.
pub fn load_lines(input: &str) -> Result<Vec<String>, InputError> {
    let paths = if is_glob(input) {
        discover(input)?
    } else {
        vec![PathBuf::from(input)]
    };

    if paths.is_empty() {
        return Err(InputError::NoMatches {
            pattern: input.to_string(),
        });
    }

    info!(input, files = paths.len(), "input discovered");

    let lines = read_lines(&paths)?;
    if lines.is_empty() {
        return Err(InputError::Empty {
            input: input.to_string(),
        });
    }

    info!(lines = lines.len(), "input read");
    Ok(lines)
}

/// Lines of every file in order. Invalid UTF-8 is replaced, not rejected:
/// such lines still reach the parser and fail there if malformed.
pub fn read_lines(paths: &[PathBuf]) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();
    for path in paths {
        lines.extend(read_file(path)?);
    }
    Ok(lines)
}

fn read_file(path: &Path) -> Result<Vec<String>, InputError> {
    let bytes = fs::read(path).map_err(|e| InputError::read_file(path, e))?;

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect())
}

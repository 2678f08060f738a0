use crate::input::error::InputError;
use glob::{Pattern, glob};
use std::path::{Path, PathBuf};

/// Files matching a glob pattern, in sorted order.
///
/// Directories and unreadable entries are skipped.
///
/// # Errors
///
/// Returns `InputError::Glob` if the pattern is malformed.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>, InputError> {
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| InputError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Whether `input` contains glob metacharacters.
pub fn is_glob(input: &str) -> bool {
    Pattern::escape(input) != input
}

/// Resolve `input` against `root` unless it is already absolute.
pub fn resolve_input(root: &Path, input: &str) -> String {
    root.join(input).to_string_lossy().into_owned()
}

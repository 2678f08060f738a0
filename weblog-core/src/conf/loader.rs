use crate::conf::error::ConfigError;
use crate::conf::types::{ConfigOverrides, ResolvedConfig, WeblogConfig};
use crate::input::resolve_input;
use crate::parse::{DEFAULT_PATTERN, LineParser};
use crate::store::DEFAULT_FAILED_SAMPLE;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "weblog.hcl";

/// Load, merge and validate the run configuration.
///
/// With no explicit `path`, `weblog.hcl` in the working directory is used
/// if present and silently skipped otherwise. An explicit path must exist.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let (file, root) = match path {
        Some(path) => (parse_config(path)?, parent_dir(path)),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                (parse_config(default)?, parent_dir(default))
            } else {
                debug!("no config file, using defaults");
                (WeblogConfig::default(), Path::new("").to_path_buf())
            }
        }
    };

    resolve(file, &root, overrides)
}

pub fn parse_config(path: &Path) -> Result<WeblogConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let parsed: WeblogConfig = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    debug!(path = %path.display(), "config file loaded");
    Ok(parsed)
}

/// Apply `overrides` over `file` and validate the result.
///
/// A file `input` is taken relative to `root`; an overriding input is used
/// as given.
pub fn resolve(
    file: WeblogConfig,
    root: &Path,
    overrides: &ConfigOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let input = match (&overrides.input, file.input) {
        (Some(input), _) => input.clone(),
        (None, Some(input)) => resolve_input(root, &input),
        (None, None) => return Err(ConfigError::MissingInput),
    };

    let pattern = overrides
        .pattern
        .clone()
        .or(file.pattern)
        .unwrap_or_else(|| DEFAULT_PATTERN.to_string());
    let parser = LineParser::with_pattern(&pattern)?;

    let partitions = overrides
        .partitions
        .or(file.partitions)
        .unwrap_or_else(rayon::current_num_threads);
    if partitions == 0 {
        return Err(ConfigError::InvalidPartitions { partitions });
    }

    Ok(ResolvedConfig {
        input,
        pattern,
        partitions,
        failed_sample: file.failed_sample.unwrap_or(DEFAULT_FAILED_SAMPLE),
        parser,
    })
}

fn parent_dir(path: &Path) -> std::path::PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

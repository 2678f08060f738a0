use crate::parse::LineParser;
use serde::{Deserialize, Serialize};

/// Contents of a config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WeblogConfig {
    /// Path or glob, relative to the config file's directory.
    pub input: Option<String>,
    pub pattern: Option<String>,
    pub partitions: Option<usize>,
    pub failed_sample: Option<usize>,
}

/// Values given on the command line; each wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<String>,
    pub pattern: Option<String>,
    pub partitions: Option<usize>,
}

/// Validated settings for one run.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub input: String,
    pub pattern: String,
    pub partitions: usize,
    pub failed_sample: usize,

    #[serde(skip)]
    pub parser: LineParser,
}

use crate::parse::GrammarError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("invalid line pattern: {source}")]
    InvalidPattern {
        #[source]
        source: regex::Error,
    },

    #[error("line pattern must define exactly {expected} capture groups, found {found}")]
    PatternGroups { expected: usize, found: usize },

    #[error("partitions must be at least 1, got {partitions}")]
    InvalidPartitions { partitions: usize },

    #[error("no input configured")]
    MissingInput,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

impl From<GrammarError> for ConfigError {
    fn from(err: GrammarError) -> Self {
        match err {
            GrammarError::Invalid(source) => ConfigError::InvalidPattern { source },
            GrammarError::Groups { expected, found } => {
                ConfigError::PatternGroups { expected, found }
            }
        }
    }
}

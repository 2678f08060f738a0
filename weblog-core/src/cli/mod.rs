//! Command implementations behind the `weblog` binary.

pub mod analyze;
pub mod conf;
pub mod render;

use crate::conf::{ConfigError, ConfigOverrides, ResolvedConfig, load_config};
use clap::Args;
use std::path::PathBuf;

/// Flags shared by every command that reads an access log.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Config file [default: weblog.hcl, if present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Input file or glob (overrides the config file)
    #[arg(long)]
    pub input: Option<String>,

    /// Line grammar regex with nine capture groups
    #[arg(long)]
    pub pattern: Option<String>,

    /// Worker partitions [default: available parallelism]
    #[arg(long)]
    pub partitions: Option<usize>,
}

impl RunArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            pattern: self.pattern.clone(),
            partitions: self.partitions,
        }
    }

    pub fn load(&self) -> Result<ResolvedConfig, ConfigError> {
        load_config(self.config.as_deref(), &self.overrides())
    }
}

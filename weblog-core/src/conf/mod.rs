//! Run configuration.
//!
//! Values come from an optional HCL file (`weblog.hcl` by default) and are
//! overridden by command-line flags. [`load_config`] returns a validated
//! [`ResolvedConfig`] ready to drive a run.

mod error;
mod loader;
mod types;
#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config, resolve};
pub use types::{ConfigOverrides, ResolvedConfig, WeblogConfig};

use crate::conf::{ConfigError, ConfigOverrides, load_config};
use crate::input::is_glob;
use crate::parse::GRAMMAR_GROUPS;
use std::path::PathBuf;

pub fn check(path: Option<PathBuf>) -> anyhow::Result<()> {
    match load_config(path.as_deref(), &ConfigOverrides::default()) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!(
                "✔ input {} ({})",
                cfg.input,
                if is_glob(&cfg.input) { "glob" } else { "file" }
            );
            println!(
                "✔ line pattern compiles with {GRAMMAR_GROUPS} groups: {}",
                cfg.parser.pattern()
            );
            println!("✔ {} partitions", cfg.partitions);
            println!("✔ up to {} failed lines reported", cfg.failed_sample);
            Ok(())
        }
        Err(err) => {
            if let Some(hint) = config_error_hint(&err) {
                eprintln!("{hint}");
                eprintln!();
            }
            Err(err.into())
        }
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::MissingInput => Some(
            "Set the access log to read, either in the config file or with --input.\n\
             \n\
             Example:\n\
             \n\
             input = \"logs/access_log*\"",
        ),
        ConfigError::PatternGroups { .. } => Some(
            "A line pattern needs nine capture groups, in order: host, identity,\n\
             user id, timestamp, method, endpoint, protocol, response code,\n\
             content size. Use (?:...) for any other grouping.",
        ),
        ConfigError::InvalidPartitions { .. } => {
            Some("Omit `partitions` to use one partition per available core.")
        }
        _ => None,
    }
}

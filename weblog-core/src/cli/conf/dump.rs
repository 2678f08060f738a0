use crate::cli::analyze::print_json;
use crate::conf::{ConfigOverrides, load_config};
use serde::Serialize;
use std::path::PathBuf;

pub fn dump(path: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let cfg = load_config(path.as_deref(), &ConfigOverrides::default())?;

    if json {
        print_json(&cfg)
    } else {
        print_hcl(&cfg)
    }
}

fn print_hcl<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = hcl::to_string(value)?;
    print!("{s}");
    Ok(())
}

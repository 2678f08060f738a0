use crate::analysis::AnalysisReport;
use crate::cli::RunArgs;
use crate::cli::render::{render_report, render_summary};
use crate::conf::ResolvedConfig;
use crate::input::{InputError, load_lines};
use crate::store::RecordStore;
use anyhow::Result;
use serde::Serialize;
use std::io::{self, IsTerminal};

/// Read the input into a [`RecordStore`] as configured.
pub fn build_store(cfg: &ResolvedConfig) -> Result<RecordStore, InputError> {
    let lines = load_lines(&cfg.input)?;
    Ok(RecordStore::build(
        lines,
        &cfg.parser,
        cfg.partitions,
        cfg.failed_sample,
    ))
}

/// Run every analysis and print the report.
pub fn analyze(args: &RunArgs, json: bool) -> Result<()> {
    let cfg = args.load()?;
    let store = build_store(&cfg)?;
    let report = AnalysisReport::build(&store);

    if json {
        print_json(&report)
    } else {
        print!("{}", render_report(&report, color_stdout()));
        Ok(())
    }
}

/// Parse only, and print the line accounting.
pub fn parse(args: &RunArgs) -> Result<()> {
    let cfg = args.load()?;
    let store = build_store(&cfg)?;

    print!("{}", render_summary(store.summary(), color_stdout()));
    Ok(())
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn color_stdout() -> bool {
    io::stdout().is_terminal()
}

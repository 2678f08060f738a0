//! The parsed access log.
//!
//! Built once from raw lines; every analysis reads from the cached record
//! and failure pipelines without parsing again.

mod summary;

use crate::parse::{AccessRecord, LineParser, ParseFailure, ParseOutcome};
use crate::pipeline::Pipeline;
use std::sync::Arc;
use tracing::{info, warn};

pub use summary::ParseSummary;

/// Default bound on the failed lines kept for reporting.
pub const DEFAULT_FAILED_SAMPLE: usize = 20;

pub type Record = Arc<AccessRecord>;

pub struct RecordStore {
    outcomes: Pipeline<ParseOutcome>,
    records: Pipeline<Record>,
    failures: Pipeline<ParseFailure>,
    summary: ParseSummary,
}

impl RecordStore {
    /// Parse `lines` over `partitions` workers and cache the results.
    pub fn build(
        lines: Vec<String>,
        parser: &LineParser,
        partitions: usize,
        failed_sample: usize,
    ) -> Self {
        let parser = parser.clone();
        let outcomes = Pipeline::parallelize(lines, partitions)
            .map(move |line| parser.parse(&line))
            .cache();

        let records = outcomes
            .filter_map(|outcome| outcome.record().cloned())
            .cache();

        let failures = outcomes.filter_map(|outcome| outcome.failure().cloned());

        let total = outcomes.count();
        let parsed = records.count();
        let failed = failures.count();
        let failed_lines = if failed > 0 {
            failures.take(failed_sample)
        } else {
            Vec::new()
        };

        let summary = ParseSummary {
            total,
            parsed,
            failed,
            failed_lines,
        };
        summary.log();

        Self {
            outcomes,
            records,
            failures,
            summary,
        }
    }

    /// Every outcome in input order, parsed and failed alike.
    pub fn outcomes(&self) -> &Pipeline<ParseOutcome> {
        &self.outcomes
    }

    pub fn records(&self) -> &Pipeline<Record> {
        &self.records
    }

    pub fn failures(&self) -> &Pipeline<ParseFailure> {
        &self.failures
    }

    pub fn summary(&self) -> &ParseSummary {
        &self.summary
    }
}

impl ParseSummary {
    fn log(&self) {
        info!(
            total = self.total,
            parsed = self.parsed,
            failed = self.failed,
            "access log parsed"
        );

        for failure in &self.failed_lines {
            warn!(line = %failure.line, reason = %failure.reason, "invalid log line");
        }
    }
}

use crate::analysis::{KeyedCount, keyed_counts};
use crate::pipeline::Pipeline;
use crate::store::Record;
use serde::Serialize;

/// Share of all records answered with one response code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeFraction {
    pub code: u16,
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseCodeStats {
    /// Every code present, ascending. Absent codes are not zero-filled.
    pub counts: Vec<KeyedCount<u16>>,
    pub fractions: Vec<CodeFraction>,
}

pub fn response_code_counts(records: &Pipeline<Record>) -> Pipeline<(u16, u64)> {
    records
        .map(|r| (r.response_code, 1u64))
        .reduce_by_key(|a, b| a + b)
}

pub fn response_code_stats(records: &Pipeline<Record>) -> ResponseCodeStats {
    let counts = keyed_counts(&response_code_counts(records).sort_by_key());

    let total: u64 = counts.iter().map(|c| c.count).sum();
    let fractions = counts
        .iter()
        .map(|c| CodeFraction {
            code: c.key,
            fraction: if total == 0 {
                0.0
            } else {
                c.count as f64 / total as f64
            },
        })
        .collect();

    ResponseCodeStats { counts, fractions }
}

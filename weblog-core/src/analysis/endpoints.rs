use crate::analysis::{KeyedCount, keyed_counts};
use crate::pipeline::Pipeline;
use crate::store::Record;
use serde::Serialize;

pub const TOP_ENDPOINTS: usize = 10;
pub const TOP_ERROR_ENDPOINTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointSummary {
    /// Number of distinct endpoints counted.
    pub distinct: usize,
    pub top: Vec<KeyedCount<String>>,
}

/// Hits per endpoint, in first-seen endpoint order.
pub fn endpoint_counts(records: &Pipeline<Record>) -> Pipeline<(String, u64)> {
    records
        .map(|r| (r.endpoint.clone(), 1u64))
        .reduce_by_key(|a, b| a + b)
}

/// Every endpoint with its hit count, in first-seen order.
pub fn endpoint_histogram(records: &Pipeline<Record>) -> Vec<KeyedCount<String>> {
    keyed_counts(&endpoint_counts(records))
}

/// The `n` most hit endpoints, descending.
///
/// Equal counts are ordered by where the endpoint first appears in the
/// input. Any other tie order would be an artifact of partition merge order.
pub fn top_endpoints(counts: &Pipeline<(String, u64)>, n: usize) -> Vec<KeyedCount<String>> {
    counts
        .top_k(n, |(_, count)| *count)
        .into_iter()
        .map(KeyedCount::from)
        .collect()
}

/// Hits per endpoint over responses other than 200.
pub fn error_endpoint_counts(records: &Pipeline<Record>) -> Pipeline<(String, u64)> {
    endpoint_counts(&records.filter(|r| r.response_code != 200))
}

pub fn error_endpoint_summary(records: &Pipeline<Record>) -> EndpointSummary {
    let counts = error_endpoint_counts(records);

    EndpointSummary {
        distinct: counts.count(),
        top: top_endpoints(&counts, TOP_ERROR_ENDPOINTS),
    }
}

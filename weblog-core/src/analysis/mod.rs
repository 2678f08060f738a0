//! Named analyses over the parsed access log.
//!
//! Each analysis is a fixed composition of [`Pipeline`] stages over
//! [`RecordStore::records`](crate::store::RecordStore::records). Results are
//! plain ordered lists of [`KeyedCount`]s plus a few scalars:
//! time series are sorted by key ascending, "top" lists by count descending
//! with ties going to the key seen first in the input.

mod content_size;
mod endpoints;
mod histogram;
mod hosts;
mod hourly;
mod not_found;
mod report;
mod response_codes;
#[cfg(test)]
mod tests;

use crate::pipeline::{Element, Pipeline};
use serde::Serialize;

pub use content_size::{ContentSizeStats, SIZE_BUCKETS, content_size_stats};
pub use endpoints::{
    EndpointSummary, TOP_ENDPOINTS, TOP_ERROR_ENDPOINTS, endpoint_counts, endpoint_histogram,
    error_endpoint_counts, error_endpoint_summary, top_endpoints,
};
pub use histogram::{Histogram, percentile_from_histogram};
pub use hosts::{
    FREQUENT_HOST_SAMPLE, FREQUENT_HOST_THRESHOLD, FrequentHosts, frequent_hosts, host_counts,
    unique_host_count,
};
pub use hourly::{
    avg_hourly_requests_per_host, hourly_request_counts, unique_hosts_per_hour,
};
pub use not_found::{
    NOT_FOUND, NOT_FOUND_ENDPOINT_SAMPLE, NotFoundRecords, NotFoundReport,
    TOP_NOT_FOUND_ENDPOINTS,
};
pub use report::AnalysisReport;
pub use response_codes::{
    CodeFraction, ResponseCodeStats, response_code_counts, response_code_stats,
};

/// One bar of a histogram: a key and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyedCount<K> {
    pub key: K,
    pub count: u64,
}

impl<K> KeyedCount<K> {
    pub fn new(key: K, count: u64) -> Self {
        Self { key, count }
    }
}

impl<K> From<(K, u64)> for KeyedCount<K> {
    fn from((key, count): (K, u64)) -> Self {
        Self { key, count }
    }
}

/// Collect a counted pipeline in its current order.
pub fn keyed_counts<K: Element>(counts: &Pipeline<(K, u64)>) -> Vec<KeyedCount<K>> {
    counts.collect().into_iter().map(KeyedCount::from).collect()
}

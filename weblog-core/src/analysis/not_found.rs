use crate::analysis::endpoints::{endpoint_counts, top_endpoints};
use crate::analysis::hourly::hourly_request_counts;
use crate::analysis::{KeyedCount, keyed_counts};
use crate::pipeline::Pipeline;
use crate::store::Record;
use serde::Serialize;

pub const NOT_FOUND: u16 = 404;

/// Bound on the distinct 404 endpoints listed.
pub const NOT_FOUND_ENDPOINT_SAMPLE: usize = 30;

pub const TOP_NOT_FOUND_ENDPOINTS: usize = 10;

/// Cached handle on the 404 subset of the records.
///
/// Filtering happens once; every drill-down below rescans the cached subset.
#[derive(Clone)]
pub struct NotFoundRecords {
    records: Pipeline<Record>,
}

impl NotFoundRecords {
    pub fn select(records: &Pipeline<Record>) -> Self {
        Self {
            records: records
                .filter(|r| r.response_code == NOT_FOUND)
                .cache(),
        }
    }

    pub fn records(&self) -> &Pipeline<Record> {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.count()
    }

    /// Up to `limit` endpoints, each listed once, in first-seen order.
    pub fn distinct_endpoints(&self, limit: usize) -> Vec<String> {
        self.records
            .map(|r| r.endpoint.clone())
            .distinct()
            .take(limit)
    }

    pub fn top_endpoints(&self, n: usize) -> Vec<KeyedCount<String>> {
        top_endpoints(&endpoint_counts(&self.records), n)
    }

    pub fn hourly_counts(&self) -> Vec<KeyedCount<u32>> {
        keyed_counts(&hourly_request_counts(&self.records).cache())
    }

    pub fn report(&self) -> NotFoundReport {
        NotFoundReport {
            count: self.count(),
            endpoints: self.distinct_endpoints(NOT_FOUND_ENDPOINT_SAMPLE),
            top_endpoints: self.top_endpoints(TOP_NOT_FOUND_ENDPOINTS),
            hourly: self.hourly_counts(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundReport {
    pub count: usize,
    pub endpoints: Vec<String>,
    pub top_endpoints: Vec<KeyedCount<String>>,
    pub hourly: Vec<KeyedCount<u32>>,
}

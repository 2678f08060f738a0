use crate::pipeline::Pipeline;
use crate::store::Record;
use serde::Serialize;

/// Hosts with strictly more requests than this are "frequent".
pub const FREQUENT_HOST_THRESHOLD: u64 = 10;

/// How many frequent hosts are listed.
pub const FREQUENT_HOST_SAMPLE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequentHosts {
    pub total: usize,
    /// Up to [`FREQUENT_HOST_SAMPLE`] hosts, in first-seen order.
    pub sample: Vec<String>,
}

/// Requests per host, in first-seen host order.
pub fn host_counts(records: &Pipeline<Record>) -> Pipeline<(String, u64)> {
    records
        .map(|r| (r.host.clone(), 1u64))
        .reduce_by_key(|a, b| a + b)
}

pub fn frequent_hosts(host_counts: &Pipeline<(String, u64)>) -> FrequentHosts {
    let frequent = host_counts
        .filter(|(_, count)| *count > FREQUENT_HOST_THRESHOLD)
        .keys();

    FrequentHosts {
        total: frequent.count(),
        sample: frequent.take(FREQUENT_HOST_SAMPLE),
    }
}

/// Number of distinct hosts: one reduced entry per host.
pub fn unique_host_count(host_counts: &Pipeline<(String, u64)>) -> usize {
    host_counts.count()
}

//! Hour-of-day series.
//!
//! Hours are the literal digits of the log timestamp; the offset is never
//! applied. Only hours present in the data appear, ascending.

use crate::pipeline::Pipeline;
use crate::store::Record;

/// Distinct hosts seen in each hour.
///
/// The result is cached: the per-host average reuses it as its join side.
pub fn unique_hosts_per_hour(records: &Pipeline<Record>) -> Pipeline<(u32, u64)> {
    records
        .map(|r| (r.hour(), r.host.clone()))
        .distinct()
        .group_by_key()
        .map_values(|hosts| hosts.len() as u64)
        .sort_by_key()
        .cache()
}

/// Requests in each hour.
pub fn hourly_request_counts(records: &Pipeline<Record>) -> Pipeline<(u32, u64)> {
    records
        .map(|r| (r.hour(), 1u64))
        .reduce_by_key(|a, b| a + b)
        .sort_by_key()
}

/// `requests / unique hosts` for each hour, truncated.
///
/// `hourly_hosts` is the handle returned by [`unique_hosts_per_hour`].
pub fn avg_hourly_requests_per_host(
    records: &Pipeline<Record>,
    hourly_hosts: &Pipeline<(u32, u64)>,
) -> Pipeline<(u32, u64)> {
    records
        .map(|r| (r.hour(), 1u64))
        .reduce_by_key(|a, b| a + b)
        .join(hourly_hosts)
        .filter_map(|(hour, (requests, hosts))| {
            requests.checked_div(hosts).map(|average| (hour, average))
        })
        .sort_by_key()
        .cache()
}

use crate::analysis::content_size::{ContentSizeStats, content_size_stats};
use crate::analysis::endpoints::{
    EndpointSummary, TOP_ENDPOINTS, endpoint_counts, error_endpoint_summary, top_endpoints,
};
use crate::analysis::hosts::{FrequentHosts, frequent_hosts, host_counts, unique_host_count};
use crate::analysis::hourly::{avg_hourly_requests_per_host, unique_hosts_per_hour};
use crate::analysis::not_found::{NotFoundRecords, NotFoundReport};
use crate::analysis::response_codes::{ResponseCodeStats, response_code_stats};
use crate::analysis::{KeyedCount, keyed_counts};
use crate::store::{ParseSummary, RecordStore};
use serde::Serialize;
use tracing::info;

/// Every named analysis over one [`RecordStore`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub summary: ParseSummary,
    /// `None` when no line parsed.
    pub content_size: Option<ContentSizeStats>,
    pub response_codes: ResponseCodeStats,
    pub unique_hosts: usize,
    pub frequent_hosts: FrequentHosts,
    pub endpoints: EndpointSummary,
    pub endpoint_histogram: Vec<KeyedCount<String>>,
    pub error_endpoints: EndpointSummary,
    pub unique_hosts_per_hour: Vec<KeyedCount<u32>>,
    pub avg_hourly_requests_per_host: Vec<KeyedCount<u32>>,
    pub not_found: NotFoundReport,
}

impl AnalysisReport {
    pub fn build(store: &RecordStore) -> Self {
        let records = store.records();

        let hosts = host_counts(records).cache();
        let endpoints = endpoint_counts(records).cache();
        let hourly_hosts = unique_hosts_per_hour(records);

        let report = Self {
            summary: store.summary().clone(),
            content_size: content_size_stats(records),
            response_codes: response_code_stats(records),
            unique_hosts: unique_host_count(&hosts),
            frequent_hosts: frequent_hosts(&hosts),
            endpoints: EndpointSummary {
                distinct: endpoints.count(),
                top: top_endpoints(&endpoints, TOP_ENDPOINTS),
            },
            endpoint_histogram: keyed_counts(&endpoints),
            error_endpoints: error_endpoint_summary(records),
            unique_hosts_per_hour: keyed_counts(&hourly_hosts),
            avg_hourly_requests_per_host: keyed_counts(&avg_hourly_requests_per_host(
                records,
                &hourly_hosts,
            )),
            not_found: NotFoundRecords::select(records).report(),
        };

        info!(
            unique_hosts = report.unique_hosts,
            endpoints = report.endpoints.distinct,
            not_found = report.not_found.count,
            "analysis complete"
        );

        report
    }
}

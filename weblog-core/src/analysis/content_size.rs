use crate::analysis::histogram::{Histogram, percentile_from_histogram};
use crate::analysis::KeyedCount;
use crate::pipeline::Pipeline;
use crate::store::Record;
use serde::Serialize;

/// Byte bounds of the content-size distribution buckets.
pub const SIZE_BUCKETS: &[u64] = &[0, 1 << 10, 4 << 10, 16 << 10, 64 << 10, 256 << 10, 1 << 20];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSizeStats {
    pub count: u64,
    /// Summed wide so any number of `u64` sizes fits.
    pub total: u128,
    /// `total / count`, truncated.
    pub average: u64,
    pub min: u64,
    pub max: u64,
    pub distribution: Vec<KeyedCount<String>>,
    /// Bucket bound holding the median, approximated from `distribution`.
    pub p50: u64,
    pub p95: u64,
}

/// Size statistics over all records. `None` when there are no records.
pub fn content_size_stats(records: &Pipeline<Record>) -> Option<ContentSizeStats> {
    let sizes = records.map(|r| r.content_size).cache();

    let count = sizes.count() as u64;
    let total = sizes.map(u128::from).reduce(|a, b| a + b)?;
    let min = sizes.min()?;
    let max = sizes.max()?;

    let histogram = sizes.aggregate(
        Histogram::new(SIZE_BUCKETS),
        |mut histogram, size| {
            histogram.record(size);
            histogram
        },
        Histogram::merge,
    );
    let buckets = histogram.numeric_buckets();
    let samples = histogram.total();

    Some(ContentSizeStats {
        count,
        total,
        average: u64::try_from(total / u128::from(count)).unwrap_or(u64::MAX),
        min,
        max,
        p50: percentile_from_histogram(&buckets, samples, 0.50),
        p95: percentile_from_histogram(&buckets, samples, 0.95),
        distribution: histogram.snapshot(),
    })
}

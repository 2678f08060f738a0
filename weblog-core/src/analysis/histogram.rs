use crate::analysis::KeyedCount;

/// Fixed-bucket counter. A value lands in the first bucket whose upper bound
/// is `>=` the value; anything larger goes to a trailing overflow bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    buckets: &'static [u64],
    counts: Vec<u64>,
}

impl Histogram {
    pub fn new(buckets: &'static [u64]) -> Self {
        Self {
            buckets,
            counts: vec![0; buckets.len() + 1], // +∞ bucket
        }
    }

    pub fn record(&mut self, value: u64) {
        for (i, b) in self.buckets.iter().enumerate() {
            if value <= *b {
                self.counts[i] += 1;
                return;
            }
        }
        if let Some(overflow) = self.counts.last_mut() {
            *overflow += 1;
        }
    }

    /// Add another histogram over the same buckets.
    pub fn merge(mut self, other: Histogram) -> Histogram {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
        self
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Labelled bucket counts, e.g. `0B`, `≤1K`, ..., `>1M`.
    pub fn snapshot(&self) -> Vec<KeyedCount<String>> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let label = match self.buckets.get(i).copied() {
                    Some(0) => "0B".to_string(),
                    Some(upper) => format!("≤{}", human_bytes(upper)),
                    None => match self.buckets.last() {
                        Some(last) => format!(">{}", human_bytes(*last)),
                        None => "all".to_string(),
                    },
                };
                KeyedCount::new(label, *c)
            })
            .collect()
    }

    /// `(upper bound, count)` pairs; the overflow bucket's bound is `u64::MAX`.
    pub fn numeric_buckets(&self) -> Vec<(u64, u64)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, count)| {
                let upper = self.buckets.get(i).copied().unwrap_or(u64::MAX);
                (upper, *count)
            })
            .collect()
    }
}

/// Upper bound of the bucket holding the `pct` quantile of `total` samples.
///
/// A quantile landing in the overflow bucket reports one past the last real
/// bound. Zero samples give zero.
pub fn percentile_from_histogram(buckets: &[(u64, u64)], total: u64, pct: f64) -> u64 {
    if total == 0 {
        return 0;
    }

    let target = (total as f64 * pct).ceil() as u64;
    let last_bound = buckets
        .iter()
        .map(|(upper, _)| *upper)
        .filter(|upper| *upper != u64::MAX)
        .max()
        .unwrap_or(0);

    let mut running = 0;
    buckets
        .iter()
        .find(|(_, count)| {
            running += *count;
            running >= target
        })
        .map(|(upper, _)| match *upper {
            u64::MAX => last_bound.saturating_add(1),
            upper => upper,
        })
        .unwrap_or(0)
}

fn human_bytes(bytes: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1 << 30, "G"), (1 << 20, "M"), (1 << 10, "K")];

    UNITS
        .iter()
        .find(|(size, _)| bytes >= *size && bytes % size == 0)
        .map(|(size, unit)| format!("{}{unit}", bytes / size))
        .unwrap_or_else(|| format!("{bytes}B"))
}

use crate::analysis::tests::fixture::{line, sample_store, store};
use crate::analysis::{KeyedCount, content_size_stats};
use pretty_assertions::assert_eq;

#[test]
fn scalar_statistics() {
    // Arrange
    let store = sample_store(3);

    // Act
    let stats = content_size_stats(store.records()).expect("records present");

    // Assert
    assert_eq!(stats.count, 10);
    assert_eq!(stats.total, 2_027_500);
    assert_eq!(stats.average, 202_750);
    assert_eq!(stats.min, 0);
    assert_eq!(stats.max, 2_000_000);
}

#[test]
fn average_truncates() {
    let lines = vec![
        line("a", 0, "/", 200, "1"),
        line("b", 0, "/", 200, "1"),
        line("c", 0, "/", 200, "2"),
    ];

    let stats = content_size_stats(store(lines, 2).records()).expect("records present");

    assert_eq!(stats.total, 4);
    assert_eq!(stats.average, 1);
}

#[test]
fn dash_counts_as_zero_bytes() {
    let lines = vec![line("a", 0, "/", 200, "-"), line("b", 0, "/", 200, "-")];

    let stats = content_size_stats(store(lines, 1).records()).expect("records present");

    assert_eq!((stats.min, stats.max, stats.total), (0, 0, 0));
}

#[test]
fn distribution_and_percentiles() {
    let stats = content_size_stats(sample_store(4).records()).expect("records present");

    assert_eq!(
        stats.distribution,
        vec![
            KeyedCount::new("0B".to_string(), 3),
            KeyedCount::new("≤1K".to_string(), 3),
            KeyedCount::new("≤4K".to_string(), 1),
            KeyedCount::new("≤16K".to_string(), 1),
            KeyedCount::new("≤64K".to_string(), 1),
            KeyedCount::new("≤256K".to_string(), 0),
            KeyedCount::new("≤1M".to_string(), 0),
            KeyedCount::new(">1M".to_string(), 1),
        ]
    );
    assert_eq!(stats.p50, 1024);
    assert_eq!(stats.p95, (1 << 20) + 1);
}

#[test]
fn no_records_no_statistics() {
    let store = store(vec!["not a log line".to_string()], 2);

    assert_eq!(content_size_stats(store.records()), None);
}

#[test]
fn total_does_not_overflow_on_huge_sizes() {
    // Arrange
    let max = u64::MAX.to_string();
    let lines = vec![line("a", 0, "/", 200, &max), line("b", 0, "/", 200, &max)];
    let store = store(lines, 2);

    // Act
    let stats = content_size_stats(store.records()).expect("records present");

    // Assert
    assert_eq!(store.summary().parsed, 2);
    assert_eq!(stats.total, 2 * u128::from(u64::MAX));
    assert_eq!(stats.average, u64::MAX);
    assert_eq!(stats.max, u64::MAX);
}

use crate::pipeline::Pipeline;
use pretty_assertions::assert_eq;

fn words(partitions: usize) -> Pipeline<(String, u64)> {
    Pipeline::parallelize(
        ["b", "a", "b", "c", "a", "b"]
            .iter()
            .map(|w| (w.to_string(), 1))
            .collect(),
        partitions,
    )
}

fn pairs(items: &[(&str, u64)]) -> Vec<(String, u64)> {
    items.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn reduce_by_key_sums_in_first_seen_order() {
    // Act
    let counts = words(3).reduce_by_key(|a, b| a + b).collect();

    // Assert
    assert_eq!(counts, pairs(&[("b", 3), ("a", 2), ("c", 1)]));
}

#[test]
fn reduce_by_key_is_independent_of_partitioning() {
    let expected = words(1).reduce_by_key(|a, b| a + b).collect();

    for partitions in 2..=8 {
        let counts = words(partitions).reduce_by_key(|a, b| a + b).collect();
        assert_eq!(counts, expected, "partitions = {partitions}");
    }
}

#[test]
fn reduce_by_key_keeps_partition_count() {
    let reduced = words(4).reduce_by_key(|a, b| a + b);

    assert_eq!(reduced.partitions(), 4);
    assert_eq!(reduced.count(), 3);
}

#[test]
fn reduce_by_key_on_empty_input() {
    let empty = Pipeline::<(u32, u64)>::parallelize(Vec::new(), 3);

    assert_eq!(empty.reduce_by_key(|a, b| a + b).collect(), Vec::new());
}

#[test]
fn group_by_key_collects_values_in_input_order() {
    // Arrange
    let pipeline = Pipeline::parallelize(vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd'), (3, 'e')], 2);

    // Act
    let grouped = pipeline.group_by_key().collect();

    // Assert
    assert_eq!(
        grouped,
        vec![(1, vec!['a', 'c']), (2, vec!['b', 'd']), (3, vec!['e'])]
    );
}

#[test]
fn distinct_keeps_first_occurrence() {
    let pipeline = Pipeline::parallelize(vec![3, 1, 3, 2, 1, 3], 4);

    assert_eq!(pipeline.distinct().collect(), vec![3, 1, 2]);
}

#[test]
fn sort_by_key_is_ascending_and_stable() {
    // Arrange
    let pipeline = Pipeline::parallelize(vec![(2, "x"), (1, "y"), (2, "a"), (0, "z"), (1, "b")], 3);

    // Act
    let sorted = pipeline.sort_by_key().collect();

    // Assert
    assert_eq!(
        sorted,
        vec![(0, "z"), (1, "y"), (1, "b"), (2, "x"), (2, "a")]
    );
}

#[test]
fn join_emits_one_pair_per_match() {
    // Arrange
    let left = Pipeline::parallelize(vec![(1, "l1"), (2, "l2"), (1, "l3"), (4, "l4")], 2);
    let right = Pipeline::parallelize(vec![(1, 10), (3, 30), (1, 11), (2, 20)], 3);

    // Act
    let joined = left.join(&right).collect();

    // Assert
    assert_eq!(
        joined,
        vec![
            (1, ("l1", 10)),
            (1, ("l1", 11)),
            (2, ("l2", 20)),
            (1, ("l3", 10)),
            (1, ("l3", 11)),
        ]
    );
}

#[test]
fn join_without_shared_keys_is_empty() {
    let left = Pipeline::parallelize(vec![(1, 'a')], 1);
    let right = Pipeline::parallelize(vec![(2, 'b')], 1);

    assert_eq!(left.join(&right).count(), 0);
}

#[test]
fn stages_compose_over_reduced_output() {
    // Arrange
    let pipeline = Pipeline::parallelize(vec![(5, 1u64), (3, 1), (5, 1), (3, 1), (5, 1)], 2);

    // Act
    let totals = pipeline.reduce_by_key(|a, b| a + b);
    let joined = totals
        .join(&totals.map_values(|n| n * 100))
        .map_values(|(a, b)| a + b)
        .sort_by_key()
        .collect();

    // Assert
    assert_eq!(joined, vec![(3, 202), (5, 303)]);
}

#[test]
fn keys_and_values_project_pairs() {
    let pipeline = Pipeline::parallelize(vec![("a", 1), ("b", 2)], 2);

    assert_eq!(pipeline.keys().collect(), vec!["a", "b"]);
    assert_eq!(pipeline.values().collect(), vec![1, 2]);
}

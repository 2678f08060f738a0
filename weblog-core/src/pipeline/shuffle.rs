//! Wide operations.
//!
//! Every operation here is a stage barrier. Partitions are folded in
//! parallel (map-side combine), then the partial results are merged in
//! partition order. Keys therefore come out in the order they were first
//! seen in the input, which is what makes `take` and `top_k` reproducible
//! for a fixed input and partition count.

use crate::pipeline::memo::{Memo, Partition, split};
use crate::pipeline::stage::{Barrier, PartitionIter};
use crate::pipeline::{Element, Key, Pipeline};
use ahash::{AHashMap, RandomState};
use std::sync::Arc;
use tracing::debug;

/// Per-key accumulator that remembers first-seen key order.
struct KeyedFold<K, V> {
    index: AHashMap<K, usize>,
    slots: Vec<(K, Option<V>)>,
}

impl<K: Key, V> KeyedFold<K, V> {
    fn new() -> Self {
        Self {
            index: AHashMap::with_hasher(hasher()),
            slots: Vec::new(),
        }
    }

    fn push(&mut self, key: K, value: V, combine: &impl Fn(V, V) -> V) {
        match self.index.get(&key) {
            Some(&i) => {
                let slot = &mut self.slots[i].1;
                *slot = Some(match slot.take() {
                    Some(prev) => combine(prev, value),
                    None => value,
                });
            }
            None => {
                self.index.insert(key.clone(), self.slots.len());
                self.slots.push((key, Some(value)));
            }
        }
    }

    fn absorb(&mut self, other: KeyedFold<K, V>, combine: &impl Fn(V, V) -> V) {
        for (key, value) in other.into_pairs() {
            self.push(key, value, combine);
        }
    }

    fn into_pairs(self) -> impl Iterator<Item = (K, V)> {
        self.slots
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

/// Fixed-seed hasher for the per-key tables.
fn hasher() -> RandomState {
    RandomState::with_seeds(1, 2, 3, 4)
}

fn shard<T>(rows: Vec<T>, partitions: usize) -> Vec<Partition<T>> {
    split(rows, partitions).into_iter().map(Arc::new).collect()
}

impl<K: Key, V: Element> Pipeline<(K, V)> {
    pub fn keys(&self) -> Pipeline<K> {
        self.map(|(key, _)| key)
    }

    pub fn values(&self) -> Pipeline<V> {
        self.map(|(_, value)| value)
    }

    pub fn map_values<W: Element>(
        &self,
        f: impl Fn(V) -> W + Send + Sync + 'static,
    ) -> Pipeline<(K, W)> {
        self.map(move |(key, value)| (key, f(value)))
    }

    /// Combine all values sharing a key.
    ///
    /// `combine` must be associative and commutative: partials are merged in
    /// whatever grouping the partitioning produces.
    pub fn reduce_by_key(
        &self,
        combine: impl Fn(V, V) -> V + Send + Sync + 'static,
    ) -> Pipeline<(K, V)> {
        let upstream = self.clone();
        let partitions = self.partitions;

        let stage = Memo::new(move || {
            debug!(stage = "reduce_by_key", partitions, "stage barrier");

            let merged = upstream
                .run_partitions(|rows| {
                    let mut fold = KeyedFold::new();
                    for (key, value) in rows {
                        fold.push(key, value, &combine);
                    }
                    fold
                })
                .into_iter()
                .reduce(|mut acc, partial| {
                    acc.absorb(partial, &combine);
                    acc
                })
                .map(|fold| fold.into_pairs().collect())
                .unwrap_or_default();

            shard(merged, partitions)
        });

        Pipeline::staged(partitions, stage)
    }

    /// Gather the values of each key, in input order.
    pub fn group_by_key(&self) -> Pipeline<(K, Vec<V>)> {
        self.map_values(|value| vec![value])
            .reduce_by_key(|mut acc, mut more| {
                acc.append(&mut more);
                acc
            })
    }

    /// Inner join on equal keys.
    ///
    /// The right side is collected into a lookup table once; the left side
    /// streams through it, so output follows left input order and, within a
    /// key, right input order.
    pub fn join<W: Element>(&self, other: &Pipeline<(K, W)>) -> Pipeline<(K, (V, W))> {
        let right = other.clone();
        let table = Memo::new(move || {
            debug!(stage = "join", partitions = right.partitions, "building lookup table");

            let mut table: AHashMap<K, Vec<W>> = AHashMap::with_hasher(hasher());
            for (key, value) in right.materialize().into_iter().flatten() {
                table.entry(key).or_default().push(value);
            }
            table
        });

        let barrier: Barrier = {
            let left = self.barrier.clone();
            let table = table.clone();
            Arc::new(move || {
                left();
                table.get();
            })
        };

        let upstream = self.compute.clone();
        Pipeline {
            partitions: self.partitions,
            compute: Arc::new(move |i: usize| -> PartitionIter<(K, (V, W))> {
                let table = table.clone();
                Box::new(upstream(i).flat_map(move |(key, value)| {
                    table
                        .get()
                        .get(&key)
                        .map(|matches| {
                            matches
                                .iter()
                                .map(|w| (key.clone(), (value.clone(), w.clone())))
                                .collect::<Vec<_>>()
                        })
                        .unwrap_or_default()
                }))
            }),
            barrier,
        }
    }
}

impl<K: Key + Ord, V: Element> Pipeline<(K, V)> {
    /// Total order by key, ascending. Equal keys keep their input order.
    pub fn sort_by_key(&self) -> Pipeline<(K, V)> {
        let upstream = self.clone();
        let partitions = self.partitions;

        let stage = Memo::new(move || {
            debug!(stage = "sort_by_key", partitions, "stage barrier");

            let mut rows: Vec<(K, V)> = upstream.materialize().into_iter().flatten().collect();
            rows.sort_by(|a, b| a.0.cmp(&b.0));
            shard(rows, partitions)
        });

        Pipeline::staged(partitions, stage)
    }
}

impl<T: Key> Pipeline<T> {
    /// Drop duplicates, keeping the first occurrence of each element.
    pub fn distinct(&self) -> Pipeline<T> {
        self.map(|row| (row, ())).reduce_by_key(|kept, _| kept).keys()
    }
}

//! Partitioned, lazily evaluated collections.
//!
//! A [`Pipeline`] is a chain of stages over a fixed number of partitions.
//! Nothing runs until a terminal operation (`collect`, `count`, `take`,
//! `reduce`, `aggregate`, `top_k`, `min`, `max`) is called. Partitions are
//! scanned in parallel on the rayon pool, and partial results are always
//! merged in partition order.
//!
//! ```text
//! parallelize / cache
//!     map, filter, filter_map, flat_map, map_values    (narrow, per partition)
//!     reduce_by_key, group_by_key, distinct,
//!     sort_by_key, join                                (stage barrier)
//! collect / count / take / top_k / ...                 (terminal)
//! ```

mod action;
mod memo;
mod shuffle;
mod stage;
#[cfg(test)]
mod tests;

use std::hash::Hash;

pub use stage::Pipeline;

/// Anything that can flow through a pipeline.
pub trait Element: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Element for T {}

/// Elements usable as grouping keys.
pub trait Key: Element + Eq + Hash {}

impl<T: Element + Eq + Hash> Key for T {}

use crate::pipeline::memo::{Memo, Partition, PartitionCursor, split};
use crate::pipeline::Element;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

pub(crate) type PartitionIter<T> = Box<dyn Iterator<Item = T> + Send>;
pub(crate) type Compute<T> = Arc<dyn Fn(usize) -> PartitionIter<T> + Send + Sync>;
pub(crate) type Barrier = Arc<dyn Fn() + Send + Sync>;

/// A lazily evaluated, partitioned collection.
///
/// Narrow operations (`map`, `filter`, ...) only compose per-partition
/// iterators. Wide operations (`reduce_by_key`, `sort_by_key`, `join`, ...)
/// add a stage barrier: the upstream is scanned in full the first time any
/// downstream terminal runs, and the result is kept for later runs.
///
/// Cloning a pipeline is cheap and shares any stage already computed.
pub struct Pipeline<T> {
    pub(crate) partitions: usize,
    pub(crate) compute: Compute<T>,
    /// Forces every upstream stage. Always run from the calling thread before
    /// partitions are scanned in parallel, so stage initialization never
    /// re-enters itself from a worker.
    pub(crate) barrier: Barrier,
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            partitions: self.partitions,
            compute: self.compute.clone(),
            barrier: self.barrier.clone(),
        }
    }
}

fn no_barrier() -> Barrier {
    Arc::new(|| {})
}

impl<T: Element> Pipeline<T> {
    /// Distribute `items` over `partitions` contiguous partitions.
    pub fn parallelize(items: Vec<T>, partitions: usize) -> Self {
        Self::from_partitions(split(items, partitions))
    }

    pub(crate) fn from_partitions(parts: Vec<Vec<T>>) -> Self {
        let parts: Arc<Vec<Partition<T>>> = Arc::new(parts.into_iter().map(Arc::new).collect());

        Self {
            partitions: parts.len(),
            compute: Arc::new(move |i: usize| -> PartitionIter<T> {
                Box::new(PartitionCursor::new(parts[i].clone()))
            }),
            barrier: no_barrier(),
        }
    }

    /// A pipeline reading from a memoized stage output.
    pub(crate) fn staged(partitions: usize, stage: Arc<Memo<Vec<Partition<T>>>>) -> Self {
        let barrier: Barrier = {
            let stage = stage.clone();
            Arc::new(move || {
                stage.get();
            })
        };

        Self {
            partitions,
            compute: Arc::new(move |i: usize| -> PartitionIter<T> {
                Box::new(PartitionCursor::new(stage.get()[i].clone()))
            }),
            barrier,
        }
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub(crate) fn narrow<U: Element>(
        &self,
        f: impl Fn(PartitionIter<T>) -> PartitionIter<U> + Send + Sync + 'static,
    ) -> Pipeline<U> {
        let upstream = self.compute.clone();

        Pipeline {
            partitions: self.partitions,
            compute: Arc::new(move |i: usize| f(upstream(i))),
            barrier: self.barrier.clone(),
        }
    }

    pub fn map<U: Element>(&self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Pipeline<U> {
        let f = Arc::new(f);
        self.narrow(move |rows| {
            let f = f.clone();
            Box::new(rows.map(move |row| f(row)))
        })
    }

    pub fn filter(&self, pred: impl Fn(&T) -> bool + Send + Sync + 'static) -> Pipeline<T> {
        let pred = Arc::new(pred);
        self.narrow(move |rows| {
            let pred = pred.clone();
            Box::new(rows.filter(move |row| pred(row)))
        })
    }

    pub fn filter_map<U: Element>(
        &self,
        f: impl Fn(T) -> Option<U> + Send + Sync + 'static,
    ) -> Pipeline<U> {
        let f = Arc::new(f);
        self.narrow(move |rows| {
            let f = f.clone();
            Box::new(rows.filter_map(move |row| f(row)))
        })
    }

    pub fn flat_map<U, I>(&self, f: impl Fn(T) -> I + Send + Sync + 'static) -> Pipeline<U>
    where
        U: Element,
        I: IntoIterator<Item = U> + 'static,
        I::IntoIter: Send + 'static,
    {
        let f = Arc::new(f);
        self.narrow(move |rows| {
            let f = f.clone();
            Box::new(rows.flat_map(move |row| f(row)))
        })
    }

    /// Materialize once on first use and serve every later scan from memory.
    ///
    /// The returned handle is the cache: keep it and derive further
    /// pipelines from it.
    pub fn cache(&self) -> Pipeline<T> {
        let upstream = self.clone();
        let partitions = self.partitions;
        let stage = Memo::new(move || {
            debug!(stage = "cache", partitions, "materializing pipeline");
            upstream
                .materialize()
                .into_iter()
                .map(Arc::new)
                .collect()
        });

        Pipeline::staged(partitions, stage)
    }

    /// Scan every partition in parallel, returning per-partition results in
    /// partition order.
    pub(crate) fn run_partitions<R: Send>(
        &self,
        f: impl Fn(PartitionIter<T>) -> R + Send + Sync,
    ) -> Vec<R> {
        (self.barrier)();

        (0..self.partitions)
            .into_par_iter()
            .map(|i| f((self.compute)(i)))
            .collect()
    }

    pub(crate) fn materialize(&self) -> Vec<Vec<T>> {
        self.run_partitions(|rows| rows.collect())
    }
}

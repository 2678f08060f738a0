use std::sync::{Arc, Mutex, OnceLock, PoisonError};

pub(crate) type Partition<T> = Arc<Vec<T>>;

type Init<S> = Box<dyn FnOnce() -> S + Send>;

/// A value computed on first access and shared read-only afterwards.
///
/// The initializer is dropped once it has run, releasing whatever upstream
/// state it captured.
pub(crate) struct Memo<S> {
    value: OnceLock<S>,
    init: Mutex<Option<Init<S>>>,
}

impl<S: Send + Sync> Memo<S> {
    pub(crate) fn new(init: impl FnOnce() -> S + Send + 'static) -> Arc<Self> {
        Arc::new(Self {
            value: OnceLock::new(),
            init: Mutex::new(Some(Box::new(init))),
        })
    }

    pub(crate) fn get(&self) -> &S {
        self.value.get_or_init(|| {
            let init = self
                .init
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            match init {
                Some(init) => init(),
                None => panic!("pipeline stage failed to initialize on an earlier access"),
            }
        })
    }
}

/// Iterates a shared partition by cloning rows out of it.
pub(crate) struct PartitionCursor<T> {
    rows: Partition<T>,
    next: usize,
}

impl<T> PartitionCursor<T> {
    pub(crate) fn new(rows: Partition<T>) -> Self {
        Self { rows, next: 0 }
    }
}

impl<T: Clone> Iterator for PartitionCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let row = self.rows.get(self.next)?.clone();
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.rows.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

/// Split `items` into `partitions` contiguous, balanced chunks.
///
/// Always yields at least one partition, possibly empty.
pub(crate) fn split<T>(items: Vec<T>, partitions: usize) -> Vec<Vec<T>> {
    let partitions = partitions.max(1);
    let len = items.len();
    let mut rest = items.into_iter();

    (0..partitions)
        .map(|i| {
            let size = len / partitions + usize::from(i < len % partitions);
            rest.by_ref().take(size).collect()
        })
        .collect()
}

use crate::pipeline::{Element, Pipeline};

impl<T: Element> Pipeline<T> {
    pub fn collect(&self) -> Vec<T> {
        self.materialize().into_iter().flatten().collect()
    }

    pub fn count(&self) -> usize {
        self.run_partitions(|rows| rows.count()).into_iter().sum()
    }

    /// The first `n` elements in partition order.
    ///
    /// Partitions are scanned one after another and scanning stops as soon
    /// as `n` elements are found.
    pub fn take(&self, n: usize) -> Vec<T> {
        (self.barrier)();

        let mut out = Vec::new();
        for i in 0..self.partitions {
            let need = n.saturating_sub(out.len());
            if need == 0 {
                break;
            }
            out.extend((self.compute)(i).take(need));
        }
        out
    }

    /// Fold all elements with an associative `combine`. `None` when empty.
    pub fn reduce(&self, combine: impl Fn(T, T) -> T + Send + Sync) -> Option<T> {
        self.run_partitions(|rows| rows.reduce(&combine))
            .into_iter()
            .flatten()
            .reduce(&combine)
    }

    /// Fold each partition from a copy of `zero` with `seq`, then merge the
    /// partition results with `comb`.
    pub fn aggregate<U: Element>(
        &self,
        zero: U,
        seq: impl Fn(U, T) -> U + Send + Sync,
        comb: impl Fn(U, U) -> U,
    ) -> U {
        self.run_partitions(|rows| rows.fold(zero.clone(), &seq))
            .into_iter()
            .fold(zero, comb)
    }

    /// The `k` elements with the greatest score, best first.
    ///
    /// Equal scores keep input order, so ties resolve to whichever element
    /// was seen first. `k` larger than the population returns everything.
    pub fn top_k<S: Ord>(&self, k: usize, score: impl Fn(&T) -> S + Send + Sync) -> Vec<T> {
        if k == 0 {
            return Vec::new();
        }

        let partials = self.run_partitions(|rows| best_of(rows, k, &score));
        best_of(partials.into_iter().flatten(), k, &score)
    }
}

impl<T: Element + Ord> Pipeline<T> {
    pub fn min(&self) -> Option<T> {
        self.reduce(std::cmp::min)
    }

    pub fn max(&self) -> Option<T> {
        self.reduce(std::cmp::max)
    }
}

fn best_of<T, S: Ord>(rows: impl Iterator<Item = T>, k: usize, score: &impl Fn(&T) -> S) -> Vec<T> {
    let mut scored: Vec<(S, T)> = rows.map(|row| (score(&row), row)).collect();
    // stable: equal scores stay in arrival order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(k);
    scored.into_iter().map(|(_, row)| row).collect()
}

use super::{HistogramParallelization, Parallelization};
use crate::store::CountStore;

/// No threading nor vectorization.
///
/// Every sample is applied, in order, to the single partition.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct NoParallelization;

impl Parallelization for NoParallelization {
    #[inline]
    fn partitions(&self) -> usize {
        1
    }

    fn selection(&self) -> HistogramParallelization {
        HistogramParallelization::NoParallelization
    }

    #[inline]
    fn update<S, K, F>(&self, stores: &mut [S], len: usize, locate: F)
    where
        S: CountStore<K>,
        F: Fn(usize) -> K + Sync,
    {
        if let Some(store) = stores.first_mut() {
            for row in 0..len {
                store.increment(locate(row));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::tests::assign;

    #[test]
    fn applies_in_order() {
        assert_eq!(assign(NoParallelization, 4), vec![vec![0, 1, 2, 3]]);
    }
}

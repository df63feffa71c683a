use rayon::prelude::*;

use super::{HistogramParallelization, Parallelization};
use crate::store::CountStore;

/// Threads that have private bin data structures that are reduced after their private updates.
///
/// Samples are split into contiguous chunks of `ceil(len / workers)` positions. Each worker applies its chunk to its
/// own partition; the call returns once every worker has finished.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PrivateThreads {
    workers: usize,
}

impl PrivateThreads {
    /// Creates a scheme with `workers` workers.
    ///
    /// At least one worker is always used.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Returns the number of workers.
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for PrivateThreads {
    /// Uses one worker per thread of the global `rayon` pool.
    fn default() -> Self {
        Self::new(rayon::current_num_threads())
    }
}

impl Parallelization for PrivateThreads {
    #[inline]
    fn partitions(&self) -> usize {
        self.workers
    }

    fn selection(&self) -> HistogramParallelization {
        HistogramParallelization::private_threads(self.workers)
    }

    fn update<S, K, F>(&self, stores: &mut [S], len: usize, locate: F)
    where
        S: CountStore<K>,
        F: Fn(usize) -> K + Sync,
    {
        let chunk_len = len.div_ceil(stores.len().max(1));
        stores.par_iter_mut().enumerate().for_each(|(worker, store)| {
            let start = (worker * chunk_len).min(len);
            let end = (start + chunk_len).min(len);
            for row in start..end {
                store.increment(locate(row));
            }
        });
    }
}

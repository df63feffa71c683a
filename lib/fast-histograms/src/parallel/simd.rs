use super::{HistogramParallelization, Parallelization, DEFAULT_SIMD_LANES};
use crate::store::CountStore;

/// Data-parallel lanes within a single thread, each with a private partition.
///
/// Samples are walked in blocks of `lanes` positions; lane `l` applies positions `l`, `l + lanes`, `l + 2 * lanes`, and
/// so on to its own partition. Lanes in a block never write the same partition, which leaves the compiler free to
/// vectorize the bin search for a block.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Simd {
    lanes: usize,
}

impl Simd {
    /// Creates a scheme with `lanes` lanes.
    ///
    /// At least one lane is always used.
    pub fn new(lanes: usize) -> Self {
        Self { lanes: lanes.max(1) }
    }

    /// Returns the number of lanes.
    pub fn lanes(&self) -> usize {
        self.lanes
    }
}

impl Default for Simd {
    fn default() -> Self {
        Self::new(DEFAULT_SIMD_LANES)
    }
}

impl Parallelization for Simd {
    #[inline]
    fn partitions(&self) -> usize {
        self.lanes
    }

    fn selection(&self) -> HistogramParallelization {
        HistogramParallelization::simd(self.lanes)
    }

    #[inline]
    fn update<S, K, F>(&self, stores: &mut [S], len: usize, locate: F)
    where
        S: CountStore<K>,
        F: Fn(usize) -> K + Sync,
    {
        let lanes = stores.len();
        if lanes == 0 {
            return;
        }

        for block in (0..len).step_by(lanes) {
            let width = lanes.min(len - block);
            for (lane, store) in stores[..width].iter_mut().enumerate() {
                store.increment(locate(block + lane));
            }
        }
    }
}

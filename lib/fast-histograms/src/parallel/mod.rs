//! Parallelization of the bin search and bin update steps.
//!
//! A scheme decides how the samples of one increment call are distributed over the partitions of a histogram's
//! accumulator:
//!
//! - [`NoParallelization`]: one partition, updated sequentially.
//! - [`PrivateThreads`]: one partition per worker. Samples are split into contiguous chunks, one per worker, and the
//!   workers run concurrently on the global `rayon` pool.
//! - [`Simd`]: one partition per lane. A single thread walks the samples in blocks of `lanes`, each lane updating its
//!   own partition with a strided subsequence of the samples.
//!
//! Partitioning is always by sample position, never by value, and every sample is applied to exactly one partition.
//! Workers and lanes never share a partition, so no synchronization is needed beyond the join at the end of the call,
//! and the reduced counts do not depend on the scheme or the number of partitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::CountStore;

mod serial;
pub use self::serial::NoParallelization;

mod simd;
pub use self::simd::Simd;

mod threads;
pub use self::threads::PrivateThreads;

/// Default number of lanes for [`Simd`].
pub const DEFAULT_SIMD_LANES: usize = 8;

/// A way of distributing sample updates over private partitions.
pub trait Parallelization: Copy + Send + Sync + fmt::Debug + 'static {
    /// Returns the number of private partitions this scheme updates.
    fn partitions(&self) -> usize;

    /// Returns the runtime description of this scheme.
    fn selection(&self) -> HistogramParallelization;

    /// Applies `len` samples to `stores`.
    ///
    /// `locate` resolves the sample at a given position to the key of the bin to increment. `stores` must hold exactly
    /// [`partitions`][Self::partitions] partitions.
    fn update<S, K, F>(&self, stores: &mut [S], len: usize, locate: F)
    where
        S: CountStore<K>,
        F: Fn(usize) -> K + Sync;
}

/// The ways the bin search and bin update steps can be parallelized.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistogramParallelization {
    /// No threading nor vectorization.
    #[default]
    #[serde(rename = "none")]
    NoParallelization,

    /// Threads that have private bin data structures that are reduced after their private updates.
    PrivateThreads {
        /// Number of workers. Defaults to the size of the global `rayon` pool.
        #[serde(default)]
        partitions: Option<usize>,
    },

    /// Data-parallel lanes within a single thread, each with private bin data structures.
    Simd {
        /// Number of lanes. Defaults to [`DEFAULT_SIMD_LANES`].
        #[serde(default)]
        partitions: Option<usize>,
    },
}

impl HistogramParallelization {
    /// Uses `workers` private threads.
    pub fn private_threads(workers: usize) -> Self {
        Self::PrivateThreads {
            partitions: Some(workers),
        }
    }

    /// Uses `lanes` data-parallel lanes.
    pub fn simd(lanes: usize) -> Self {
        Self::Simd {
            partitions: Some(lanes),
        }
    }
}

impl fmt::Display for HistogramParallelization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParallelization => write!(f, "none"),
            Self::PrivateThreads { partitions: Some(n) } => write!(f, "private threads ({})", n),
            Self::PrivateThreads { partitions: None } => write!(f, "private threads"),
            Self::Simd { partitions: Some(n) } => write!(f, "simd ({} lanes)", n),
            Self::Simd { partitions: None } => write!(f, "simd"),
        }
    }
}

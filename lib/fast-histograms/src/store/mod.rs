//! Accumulators for bin counts.
//!
//! Every histogram owns its counts as a set of private partitions, one per worker or lane of its parallelization
//! scheme (a single partition when there is no parallelization). Partitions are updated independently through
//! [`CountStore`] and only reduced into the public view on demand:
//!
//! - [`PartialCounts`]: dense counts for numeric histograms, stored as one `(N+1)`-dimensional array whose leading axis
//!   is the partition.
//! - [`PartialTables`]: string-keyed [`CountTable`]s for text histograms, one table per partition.

mod dense;
pub use self::dense::{Coordinates, PartialCounts};

mod table;
pub use self::table::{CountTable, PartialTables};

/// A single partition of an accumulator.
///
/// `K` is whatever the bin search step resolves a sample to: per-axis bin coordinates for numeric histograms, or the
/// sample itself for text histograms.
pub trait CountStore<K>: Send {
    /// Adds one to the count of the bin identified by `key`.
    fn increment(&mut self, key: K);
}

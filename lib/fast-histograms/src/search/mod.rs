//! Bin search.
//!
//! A bin search algorithm resolves a raw value on one axis to the index of the bin it belongs to. Numeric algorithms
//! implement [`BinSearch`], with the axis descriptor they operate on as an associated type, so a typed histogram can
//! never pair an algorithm with the wrong kind of axis. [`BinSearchAlgorithm`] is the runtime selection of an
//! algorithm, and carries the compatibility table used when histograms are created from a runtime selection.
//!
//! Out-of-range values are never discarded: they are folded into the nearest edge bin.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bins::BinType;

mod arithmetic;
pub use self::arithmetic::Arithmetic;

mod binary;
pub use self::binary::BinarySearch;

mod hash;
pub use self::hash::HashFunction;

/// Resolves values on a numeric axis to bin indices.
pub trait BinSearch: Copy + Default + Send + Sync + fmt::Debug + 'static {
    /// The axis descriptor this algorithm operates on.
    type Axis: Clone + Send + Sync + fmt::Debug;

    /// The runtime selection corresponding to this algorithm.
    const ALGORITHM: BinSearchAlgorithm;

    /// The bin type this algorithm operates on.
    const BIN_TYPE: BinType;

    /// Returns the number of bins on the axis.
    fn nbins(axis: &Self::Axis) -> usize;

    /// Returns the index of the bin to increment for `value`.
    ///
    /// The result is always a valid bin index for `axis`: values outside the axis range, and NaN, are clamped to the
    /// first or last bin.
    fn bin_index(axis: &Self::Axis, value: f64) -> usize;
}

/// The ways the bin search step can be implemented.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinSearchAlgorithm {
    /// Basic arithmetic, compatible only with fixed-width bins.
    Arithmetic,

    /// Binary search over the bin edges, compatible only with variable-width bins.
    BinarySearch,

    /// Hash lookup, compatible only with unbounded-width bins.
    HashFunction,
}

impl BinSearchAlgorithm {
    /// Returns the bin type this algorithm is able to search.
    pub fn bin_type(self) -> BinType {
        match self {
            Self::Arithmetic => BinType::FixedWidth,
            Self::BinarySearch => BinType::VariableWidth,
            Self::HashFunction => BinType::UnboundedWidth,
        }
    }

    /// Returns `true` if this algorithm can search bins of the given type.
    pub fn is_compatible_with(self, bin_type: BinType) -> bool {
        self.bin_type() == bin_type
    }
}

impl fmt::Display for BinSearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arithmetic => write!(f, "arithmetic"),
            Self::BinarySearch => write!(f, "binary search"),
            Self::HashFunction => write!(f, "hash function"),
        }
    }
}

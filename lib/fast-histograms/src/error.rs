//! Histogram errors.

use std::{fmt, path::PathBuf};

use snafu::Snafu;

use crate::{bins::BinType, search::BinSearchAlgorithm};

/// The kind of shape inconsistency behind a [`HistogramError::DimensionMismatch`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mismatch {
    /// The number of axis descriptors does not match the declared dimensionality.
    AxisCount {
        /// Declared dimensionality.
        expected: usize,

        /// Number of axis descriptors given.
        actual: usize,
    },

    /// The number of data sequences does not match the dimensionality of the histogram.
    SequenceCount {
        /// Dimensionality of the histogram.
        expected: usize,

        /// Number of data sequences given.
        actual: usize,
    },

    /// A data sequence is not the same length as the first data sequence.
    SequenceLength {
        /// Axis of the offending sequence.
        axis: usize,

        /// Length of the first data sequence.
        expected: usize,

        /// Length of the offending sequence.
        actual: usize,
    },

    /// An axis index does not refer to a configured axis.
    AxisIndex {
        /// The requested axis.
        axis: usize,

        /// Dimensionality of the histogram.
        dimensions: usize,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AxisCount { expected, actual } => {
                write!(f, "expected {} axis descriptors, got {}", expected, actual)
            }
            Self::SequenceCount { expected, actual } => {
                write!(f, "expected {} data sequences, got {}", expected, actual)
            }
            Self::SequenceLength { axis, expected, actual } => {
                write!(
                    f,
                    "data sequence for axis {} has length {}, expected {}",
                    axis, actual, expected
                )
            }
            Self::AxisIndex { axis, dimensions } => {
                write!(f, "axis {} does not exist in a {}-dimensional histogram", axis, dimensions)
            }
        }
    }
}

/// A histogram error.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum HistogramError {
    /// Fixed-width axis bounds or bin count are malformed.
    #[snafu(display(
        "Invalid axis range: low bound {} and high bound {} with {} bins (high must exceed low, at least 1 bin).",
        low,
        high,
        bins
    ))]
    InvalidAxisRange {
        /// Lowest bin edge.
        low: f64,

        /// Highest bin edge.
        high: f64,

        /// Number of bins.
        bins: usize,
    },

    /// The bin counts of a histogram would not fit in memory.
    #[snafu(display(
        "Too many bins: {} partitions of a {}-dimensional bin grid exceed the addressable size.",
        partitions,
        dimensions
    ))]
    TooManyBins {
        /// Number of partitions.
        partitions: usize,

        /// Number of dimensions of the bin grid.
        dimensions: usize,
    },

    /// Variable-width bin edges are too short or not strictly increasing.
    #[snafu(display("Invalid bin edge sequence of length {}: {}.", len, reason))]
    InvalidEdgeSequence {
        /// Number of edges given.
        len: usize,

        /// Why the sequence was rejected.
        reason: &'static str,
    },

    /// The bin type does not support the requested dimensionality.
    #[snafu(display("{} bins do not support {}-dimensional histograms.", bin_type, dimensions))]
    UnsupportedDimensionality {
        /// Requested bin type.
        bin_type: BinType,

        /// Requested dimensionality.
        dimensions: usize,
    },

    /// The bin search algorithm cannot operate on the bin type.
    #[snafu(display("Bin search algorithm '{}' cannot be used with {} bins.", bin_search, bin_type))]
    IncompatibleStrategyCombination {
        /// Requested bin type.
        bin_type: BinType,

        /// Requested bin search algorithm.
        bin_search: BinSearchAlgorithm,
    },

    /// Input data or an axis index is inconsistent with the dimensionality of the histogram.
    #[snafu(display("Dimension mismatch: {}.", mismatch))]
    DimensionMismatch {
        /// What was inconsistent.
        mismatch: Mismatch,
    },

    /// An axis configuration does not describe an axis of the selected bin type.
    #[snafu(display("Axis {} is not configured as an axis for {} bins.", axis, bin_type))]
    MismatchedAxisConfiguration {
        /// Index of the offending axis.
        axis: usize,

        /// Selected bin type.
        bin_type: BinType,
    },

    /// Samples of the wrong kind were given to a histogram.
    #[snafu(display("Histogram expects {} samples.", expected))]
    SampleKindMismatch {
        /// The sample kind the histogram accepts.
        expected: &'static str,
    },

    /// Environment variable prefix was empty.
    #[snafu(display("Environment variable prefix must not be empty."))]
    EmptyPrefix,

    /// A configuration file could not be read.
    #[snafu(display("Failed to read configuration file '{}'.", path.display()))]
    ReadConfiguration {
        /// Path of the configuration file.
        path: PathBuf,

        /// Error source.
        source: std::io::Error,
    },

    /// Configuration could not be extracted.
    #[snafu(display("Failed to extract histogram configuration."))]
    Configuration {
        /// Error source.
        #[snafu(source(from(figment::Error, Box::new)))]
        source: Box<figment::Error>,
    },
}

impl HistogramError {
    pub(crate) fn mismatch(mismatch: Mismatch) -> Self {
        Self::DimensionMismatch { mismatch }
    }
}

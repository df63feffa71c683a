//! Bin models.
//!
//! A bin model describes, per axis, how many bins exist and which range of values each bin covers. Three models are
//! supported:
//!
//! - [`BinType::FixedWidth`]: every bin on the axis has the same width ([`FixedWidthAxis`]).
//! - [`BinType::VariableWidth`]: bins are delimited by an explicit, strictly increasing edge sequence
//!   ([`VariableWidthAxis`]).
//! - [`BinType::UnboundedWidth`]: bins are not known ahead of time and are created lazily, one per distinct string
//!   key. There is no axis descriptor, and only one dimension is supported.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HistogramError;

/// The type of bins a histogram has.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinType {
    /// Each bin has the same predetermined width.
    FixedWidth,

    /// Bins have possibly different predetermined widths.
    VariableWidth,

    /// Bins are not known before computing the histogram (i.e. text data).
    ///
    /// Only one-dimensional histograms are supported.
    UnboundedWidth,
}

impl fmt::Display for BinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedWidth => write!(f, "fixed-width"),
            Self::VariableWidth => write!(f, "variable-width"),
            Self::UnboundedWidth => write!(f, "unbounded-width"),
        }
    }
}

/// An axis of equally wide bins spanning `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedWidthAxis {
    low: f64,
    high: f64,
    bins: usize,

    // Inverse bin width, so that the bin of `v` is `floor((v - low) * norm)`.
    norm: f64,
}

impl FixedWidthAxis {
    /// Creates a new `FixedWidthAxis` with `bins` bins between `low` and `high`.
    ///
    /// # Errors
    ///
    /// If either bound is not finite, `high` does not exceed `low`, or `bins` is zero, an error is returned. An error
    /// is also returned when the range is too wide or too narrow to be represented: `high - low` must be finite, and
    /// so must the resulting inverse bin width.
    pub fn new(low: f64, high: f64, bins: usize) -> Result<Self, HistogramError> {
        if bins == 0 || !low.is_finite() || !high.is_finite() || high <= low {
            return Err(HistogramError::InvalidAxisRange { low, high, bins });
        }

        let width = high - low;
        let norm = bins as f64 / width;
        if !width.is_finite() || !norm.is_finite() || norm == 0.0 {
            return Err(HistogramError::InvalidAxisRange { low, high, bins });
        }

        Ok(Self { low, high, bins, norm })
    }

    /// Returns the lowest bin edge.
    #[inline]
    pub fn binmin(&self) -> f64 {
        self.low
    }

    /// Returns the highest bin edge.
    #[inline]
    pub fn binmax(&self) -> f64 {
        self.high
    }

    /// Returns the inverse of the bin width.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Returns the number of bins.
    #[inline]
    pub fn nbins(&self) -> usize {
        self.bins
    }
}

/// An axis of bins delimited by a strictly increasing edge sequence.
///
/// `K + 1` edges yield `K` bins. Bin `i` covers `[edges[i], edges[i + 1])`, except the last bin, which also includes
/// the highest edge.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableWidthAxis {
    edges: Vec<f64>,
}

impl VariableWidthAxis {
    /// Creates a new `VariableWidthAxis` from the given bin edges.
    ///
    /// # Errors
    ///
    /// If fewer than two edges are given, or the edges are not strictly increasing (which includes any edge being NaN),
    /// an error is returned.
    pub fn new(edges: impl Into<Vec<f64>>) -> Result<Self, HistogramError> {
        let edges = edges.into();
        if edges.len() < 2 {
            return Err(HistogramError::InvalidEdgeSequence {
                len: edges.len(),
                reason: "at least two edges are required",
            });
        }

        if !edges.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(HistogramError::InvalidEdgeSequence {
                len: edges.len(),
                reason: "edges must be strictly increasing",
            });
        }

        Ok(Self { edges })
    }

    /// Returns the sorted bin edges.
    #[inline]
    pub fn bin_edges(&self) -> &[f64] {
        &self.edges
    }

    /// Returns the number of bins.
    #[inline]
    pub fn nbins(&self) -> usize {
        self.edges.len() - 1
    }
}

/// Configuration for a single histogram axis.
///
/// The two forms are distinguished by their fields, so either `{ low, high, bins }` or `{ edges }` can be written
/// directly in configuration files.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisConfiguration {
    /// A fixed-width axis.
    FixedWidth {
        /// Lowest bin edge.
        low: f64,

        /// Highest bin edge.
        high: f64,

        /// Number of bins.
        bins: usize,
    },

    /// A variable-width axis.
    VariableWidth {
        /// Bin edges, strictly increasing.
        edges: Vec<f64>,
    },
}

impl AxisConfiguration {
    /// Creates a fixed-width axis configuration.
    pub fn fixed_width(low: f64, high: f64, bins: usize) -> Self {
        Self::FixedWidth { low, high, bins }
    }

    /// Creates a variable-width axis configuration.
    pub fn variable_width(edges: impl Into<Vec<f64>>) -> Self {
        Self::VariableWidth { edges: edges.into() }
    }

    /// Returns the bin type this configuration describes.
    pub fn bin_type(&self) -> BinType {
        match self {
            Self::FixedWidth { .. } => BinType::FixedWidth,
            Self::VariableWidth { .. } => BinType::VariableWidth,
        }
    }

    pub(crate) fn to_fixed_width(&self, axis: usize) -> Result<FixedWidthAxis, HistogramError> {
        match self {
            Self::FixedWidth { low, high, bins } => FixedWidthAxis::new(*low, *high, *bins),
            Self::VariableWidth { .. } => Err(HistogramError::MismatchedAxisConfiguration {
                axis,
                bin_type: BinType::FixedWidth,
            }),
        }
    }

    pub(crate) fn to_variable_width(&self, axis: usize) -> Result<VariableWidthAxis, HistogramError> {
        match self {
            Self::VariableWidth { edges } => VariableWidthAxis::new(edges.clone()),
            Self::FixedWidth { .. } => Err(HistogramError::MismatchedAxisConfiguration {
                axis,
                bin_type: BinType::VariableWidth,
            }),
        }
    }
}

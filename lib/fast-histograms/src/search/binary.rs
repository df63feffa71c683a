use super::{BinSearch, BinSearchAlgorithm};
use crate::bins::{BinType, VariableWidthAxis};

/// Uses binary search to find the bin to update, compatible only with variable-width bins.
///
/// Finds the rightmost edge not exceeding the value, so a value equal to an internal edge belongs to the bin starting
/// at that edge. Values below the first edge land in the first bin, and values at or above the last edge land in the
/// last bin.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct BinarySearch;

impl BinSearch for BinarySearch {
    type Axis = VariableWidthAxis;

    const ALGORITHM: BinSearchAlgorithm = BinSearchAlgorithm::BinarySearch;
    const BIN_TYPE: BinType = BinType::VariableWidth;

    #[inline]
    fn nbins(axis: &VariableWidthAxis) -> usize {
        axis.nbins()
    }

    #[inline]
    fn bin_index(axis: &VariableWidthAxis, value: f64) -> usize {
        // Number of edges at or below the value; NaN compares false against every edge, giving zero.
        let edges_below = axis.bin_edges().partition_point(|edge| *edge <= value);
        edges_below.saturating_sub(1).min(axis.nbins() - 1)
    }
}

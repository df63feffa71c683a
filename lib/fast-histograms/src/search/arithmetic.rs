use super::{BinSearch, BinSearchAlgorithm};
use crate::bins::{BinType, FixedWidthAxis};

/// Basic arithmetic to determine the bin to update, compatible only with fixed-width bins.
///
/// The bin of `v` is `floor((v - binmin) * norm)`, clamped to `[0, nbins - 1]`. A value equal to the highest edge
/// therefore lands in the last bin, like every value above it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Arithmetic;

impl BinSearch for Arithmetic {
    type Axis = FixedWidthAxis;

    const ALGORITHM: BinSearchAlgorithm = BinSearchAlgorithm::Arithmetic;
    const BIN_TYPE: BinType = BinType::FixedWidth;

    #[inline]
    fn nbins(axis: &FixedWidthAxis) -> usize {
        axis.nbins()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[inline]
    fn bin_index(axis: &FixedWidthAxis, value: f64) -> usize {
        // Float-to-int casts saturate: negative values and NaN become zero, and overflow becomes `usize::MAX`.
        let raw = ((value - axis.binmin()) * axis.norm()).floor() as usize;
        raw.min(axis.nbins() - 1)
    }
}

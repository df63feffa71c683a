use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD, Axis, IxDyn};
use smallvec::SmallVec;

use super::CountStore;
use crate::error::HistogramError;

/// Per-axis bin coordinates of a sample.
///
/// Stored inline for up to four dimensions.
pub type Coordinates = SmallVec<[usize; 4]>;

/// Dense bin counts, split into independently updated partitions.
#[derive(Clone, Debug)]
pub struct PartialCounts {
    /// Counts with shape `(partitions, nbins_1, ..., nbins_N)`.
    counts: ArrayD<u64>,
}

impl PartialCounts {
    /// Creates zeroed counts with `partitions` partitions of the given bin shape.
    ///
    /// # Errors
    ///
    /// If the total number of counts, or their size in bytes, exceeds `isize::MAX`, an error is returned.
    pub fn new(partitions: usize, shape: &[usize]) -> Result<Self, HistogramError> {
        let mut full_shape = Coordinates::with_capacity(shape.len() + 1);
        full_shape.push(partitions);
        full_shape.extend_from_slice(shape);

        let bytes = full_shape
            .iter()
            .try_fold(std::mem::size_of::<u64>(), |size, len| size.checked_mul(*len));
        if !matches!(bytes, Some(bytes) if bytes <= isize::MAX as usize) {
            return Err(HistogramError::TooManyBins {
                partitions,
                dimensions: shape.len(),
            });
        }

        Ok(Self {
            counts: ArrayD::zeros(IxDyn(&full_shape)),
        })
    }

    /// Returns the number of partitions.
    pub fn partitions(&self) -> usize {
        self.counts.len_of(Axis(0))
    }

    /// Returns the bin shape of a single partition.
    pub fn shape(&self) -> &[usize] {
        &self.counts.shape()[1..]
    }

    /// Returns a mutable view of every partition.
    ///
    /// The views are disjoint, so each one can be handed to a different worker.
    pub fn partitions_mut(&mut self) -> Vec<ArrayViewMutD<'_, u64>> {
        self.counts.axis_iter_mut(Axis(0)).collect()
    }

    /// Returns a view of all partitions, with the partition as the leading axis.
    pub fn view(&self) -> ArrayViewD<'_, u64> {
        self.counts.view()
    }

    /// Sums all partitions into a single array of bin counts.
    pub fn reduce(&self) -> ArrayD<u64> {
        self.counts.sum_axis(Axis(0))
    }

    /// Returns the total count across all partitions.
    pub fn total(&self) -> u64 {
        self.counts.sum()
    }

    /// Resets every count in every partition to zero.
    pub fn clear(&mut self) {
        self.counts.fill(0);
    }
}

impl CountStore<Coordinates> for ArrayViewMutD<'_, u64> {
    #[inline]
    fn increment(&mut self, key: Coordinates) {
        self[key.as_slice()] += 1;
    }
}

use ndarray::{ArrayD, ArrayViewD};
use tracing::{debug, trace};

use super::validate_samples;
use crate::{
    bins::{FixedWidthAxis, VariableWidthAxis},
    error::{HistogramError, Mismatch},
    parallel::Parallelization,
    sample::Sample,
    search::{Arithmetic, BinSearch, BinarySearch},
    store::{Coordinates, PartialCounts},
};

/// An N-dimensional histogram over numeric data.
///
/// The bin search algorithm `S` and the parallelization scheme `P` are fixed by the type, so the per-sample update
/// loop is specialized for the combination. The bin model follows from `S`: [`Arithmetic`] histograms have
/// [`FixedWidthAxis`] axes and [`BinarySearch`] histograms have [`VariableWidthAxis`] axes.
///
/// Values outside the range of an axis are not filtered out; they are counted in the closest bin.
///
/// # Example
///
/// ```
/// use fast_histograms::{bins::FixedWidthAxis, parallel::NoParallelization, search::Arithmetic, NumericHistogram};
///
/// let axes = vec![FixedWidthAxis::new(0.0, 10.0, 5).unwrap()];
/// let mut histogram = NumericHistogram::<Arithmetic, _>::new(axes, NoParallelization).unwrap();
///
/// let data: &[f64] = &[0.0, 1.9, 2.0, 9.9, 10.0, -5.0, 100.0];
/// histogram.increment_bins(&[data]).unwrap();
/// assert_eq!(histogram.counts().as_slice().unwrap(), &[3, 1, 0, 0, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct NumericHistogram<S: BinSearch, P: Parallelization> {
    axes: Vec<S::Axis>,
    parallelization: P,
    weights: PartialCounts,
}

impl<S: BinSearch, P: Parallelization> NumericHistogram<S, P> {
    /// Creates a new, zeroed histogram with one dimension per axis.
    ///
    /// # Errors
    ///
    /// If no axes are given, or the bin counts would be too large to allocate, an error is returned.
    pub fn new(axes: Vec<S::Axis>, parallelization: P) -> Result<Self, HistogramError> {
        if axes.is_empty() {
            return Err(HistogramError::UnsupportedDimensionality {
                bin_type: S::BIN_TYPE,
                dimensions: 0,
            });
        }

        let shape = axes.iter().map(S::nbins).collect::<Coordinates>();
        let weights = PartialCounts::new(parallelization.partitions(), &shape)?;

        debug!(
            bin_type = %S::BIN_TYPE,
            bin_search = %S::ALGORITHM,
            parallelization = %parallelization.selection(),
            dimensions = axes.len(),
            partitions = weights.partitions(),
            "Created numeric histogram."
        );

        Ok(Self {
            axes,
            parallelization,
            weights,
        })
    }

    /// Increments the bin counts using one data sequence per axis.
    ///
    /// Sample `k` is the tuple `(data[0][k], ..., data[N - 1][k])`.
    ///
    /// # Errors
    ///
    /// If the number of sequences does not match the number of axes, or the sequences are not all the same length, an
    /// error is returned and no bin counts are changed.
    pub fn increment_bins<V: Sample>(&mut self, data: &[&[V]]) -> Result<(), HistogramError> {
        let len = validate_samples(self.axes.len(), data)?;
        trace!(samples = len, "Incrementing bins.");

        let axes = &self.axes;
        let mut partitions = self.weights.partitions_mut();
        self.parallelization.update(&mut partitions, len, |row| {
            axes.iter()
                .zip(data)
                .map(|(axis, values)| S::bin_index(axis, values[row].to_f64()))
                .collect::<Coordinates>()
        });

        Ok(())
    }

    /// Returns the bin counts, reduced across all private partitions.
    ///
    /// The result is a snapshot; later increments are not reflected in it.
    pub fn counts(&self) -> ArrayD<u64> {
        self.weights.reduce()
    }

    /// Returns the bin counts, reduced across all private partitions.
    ///
    /// Equivalent to [`counts`][Self::counts].
    pub fn weights(&self) -> ArrayD<u64> {
        self.counts()
    }

    /// Returns the private partition counts, with the partition as the leading axis.
    pub fn subweights(&self) -> ArrayViewD<'_, u64> {
        self.weights.view()
    }

    /// Returns the total number of samples counted.
    pub fn total(&self) -> u64 {
        self.weights.total()
    }

    /// Sets all bin counts, in every partition, to zero.
    pub fn zero(&mut self) {
        self.weights.clear();
        debug!(partitions = self.weights.partitions(), "Reset numeric histogram.");
    }

    /// Returns the index of the bin that `value` falls into on the given axis.
    ///
    /// # Errors
    ///
    /// If `axis` does not refer to an axis of this histogram, an error is returned.
    pub fn bin_search<V: Sample>(&self, axis: usize, value: V) -> Result<usize, HistogramError> {
        Ok(S::bin_index(self.axis(axis)?, value.to_f64()))
    }

    /// Returns the descriptor of the given axis.
    ///
    /// # Errors
    ///
    /// If `axis` does not refer to an axis of this histogram, an error is returned.
    pub fn axis(&self, axis: usize) -> Result<&S::Axis, HistogramError> {
        self.axes.get(axis).ok_or_else(|| {
            HistogramError::mismatch(Mismatch::AxisIndex {
                axis,
                dimensions: self.axes.len(),
            })
        })
    }

    /// Returns the descriptors of every axis.
    pub fn axes(&self) -> &[S::Axis] {
        &self.axes
    }

    /// Returns the number of dimensions.
    pub fn ndims(&self) -> usize {
        self.axes.len()
    }

    /// Returns the number of bins on each axis.
    pub fn shape(&self) -> &[usize] {
        self.weights.shape()
    }

    /// Returns the parallelization scheme.
    pub fn parallelization(&self) -> P {
        self.parallelization
    }

    /// Returns the number of private partitions.
    pub fn partitions(&self) -> usize {
        self.weights.partitions()
    }
}

impl<P: Parallelization> NumericHistogram<Arithmetic, P> {
    /// Returns the lowest bin edge of the given axis.
    ///
    /// # Errors
    ///
    /// If `axis` does not refer to an axis of this histogram, an error is returned.
    pub fn binmin(&self, axis: usize) -> Result<f64, HistogramError> {
        self.axis(axis).map(FixedWidthAxis::binmin)
    }

    /// Returns the inverse bin width of the given axis.
    ///
    /// # Errors
    ///
    /// If `axis` does not refer to an axis of this histogram, an error is returned.
    pub fn norm(&self, axis: usize) -> Result<f64, HistogramError> {
        self.axis(axis).map(FixedWidthAxis::norm)
    }

    /// Returns the number of bins on the given axis.
    ///
    /// # Errors
    ///
    /// If `axis` does not refer to an axis of this histogram, an error is returned.
    pub fn nbins(&self, axis: usize) -> Result<usize, HistogramError> {
        self.axis(axis).map(FixedWidthAxis::nbins)
    }
}

impl<P: Parallelization> NumericHistogram<BinarySearch, P> {
    /// Returns the sorted bin edges of the given axis.
    ///
    /// # Errors
    ///
    /// If `axis` does not refer to an axis of this histogram, an error is returned.
    pub fn bin_edges(&self, axis: usize) -> Result<&[f64], HistogramError> {
        self.axis(axis).map(VariableWidthAxis::bin_edges)
    }

    /// Returns the number of bins on the given axis.
    ///
    /// # Errors
    ///
    /// If `axis` does not refer to an axis of this histogram, an error is returned.
    pub fn nbins(&self, axis: usize) -> Result<usize, HistogramError> {
        self.axis(axis).map(VariableWidthAxis::nbins)
    }
}

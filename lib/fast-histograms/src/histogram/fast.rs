use ndarray::ArrayViewD;
use tracing::debug;

use super::{Counts, NumericHistogram, TextHistogram};
use crate::{
    bins::{AxisConfiguration, BinType},
    error::{HistogramError, Mismatch},
    parallel::{HistogramParallelization, NoParallelization, Parallelization, PrivateThreads, Simd},
    sample::Sample,
    search::{Arithmetic, BinSearchAlgorithm, BinarySearch},
    store::CountTable,
};

/// Matches every variant of a [`FastHistogram`], binding the inner histogram.
///
/// The two-branch form binds numeric and text histograms separately, for operations whose result depends on the
/// sample kind.
macro_rules! dispatch {
    ($histogram:expr, numeric $n:ident => $numeric:expr, text $t:ident => $text:expr $(,)?) => {
        match $histogram {
            FastHistogram::FixedWidthSerial($n) => $numeric,
            FastHistogram::FixedWidthThreads($n) => $numeric,
            FastHistogram::FixedWidthSimd($n) => $numeric,
            FastHistogram::VariableWidthSerial($n) => $numeric,
            FastHistogram::VariableWidthThreads($n) => $numeric,
            FastHistogram::VariableWidthSimd($n) => $numeric,
            FastHistogram::UnboundedWidthSerial($t) => $text,
            FastHistogram::UnboundedWidthThreads($t) => $text,
            FastHistogram::UnboundedWidthSimd($t) => $text,
        }
    };
    ($histogram:expr, $h:ident => $body:expr $(,)?) => {
        dispatch!($histogram, numeric $h => $body, text $h => $body)
    };
}

/// A histogram whose bin type, bin search algorithm and parallelization scheme were selected at runtime.
///
/// There is one variant per valid combination, each wrapping the corresponding typed histogram, so the selection is
/// matched once per call rather than once per sample. Use [`create_fast_histogram`] to create one.
#[derive(Clone, Debug)]
pub enum FastHistogram {
    /// Fixed-width bins, no parallelization.
    FixedWidthSerial(NumericHistogram<Arithmetic, NoParallelization>),

    /// Fixed-width bins, private threads.
    FixedWidthThreads(NumericHistogram<Arithmetic, PrivateThreads>),

    /// Fixed-width bins, SIMD lanes.
    FixedWidthSimd(NumericHistogram<Arithmetic, Simd>),

    /// Variable-width bins, no parallelization.
    VariableWidthSerial(NumericHistogram<BinarySearch, NoParallelization>),

    /// Variable-width bins, private threads.
    VariableWidthThreads(NumericHistogram<BinarySearch, PrivateThreads>),

    /// Variable-width bins, SIMD lanes.
    VariableWidthSimd(NumericHistogram<BinarySearch, Simd>),

    /// Unbounded-width bins, no parallelization.
    UnboundedWidthSerial(TextHistogram<NoParallelization>),

    /// Unbounded-width bins, private threads.
    UnboundedWidthThreads(TextHistogram<PrivateThreads>),

    /// Unbounded-width bins, SIMD lanes.
    UnboundedWidthSimd(TextHistogram<Simd>),
}

/// Creates a histogram from a runtime selection of strategies.
///
/// `axes` holds one configuration per dimension for fixed-width and variable-width bins, and must be empty for
/// unbounded-width bins, which are always one-dimensional.
///
/// # Errors
///
/// The selection is validated in the following order, and the first failure is returned:
///
/// - `bin_search` must be able to search `bin_type` bins.
/// - `dimensions` must be one for unbounded-width bins, and at least one otherwise.
/// - there must be exactly one axis configuration per dimension (none for unbounded-width bins).
/// - every axis configuration must be well-formed and describe an axis of `bin_type`.
/// - the bin counts of every partition together must fit in memory.
pub fn create_fast_histogram(
    bin_type: BinType, bin_search: BinSearchAlgorithm, parallelization: HistogramParallelization, dimensions: usize,
    axes: &[AxisConfiguration],
) -> Result<FastHistogram, HistogramError> {
    if !bin_search.is_compatible_with(bin_type) {
        return Err(HistogramError::IncompatibleStrategyCombination { bin_type, bin_search });
    }

    let unbounded = bin_type == BinType::UnboundedWidth;
    if (unbounded && dimensions != 1) || dimensions == 0 {
        return Err(HistogramError::UnsupportedDimensionality { bin_type, dimensions });
    }

    if unbounded {
        if !axes.is_empty() {
            return Err(HistogramError::MismatchedAxisConfiguration { axis: 0, bin_type });
        }
    } else if axes.len() != dimensions {
        return Err(HistogramError::mismatch(Mismatch::AxisCount {
            expected: dimensions,
            actual: axes.len(),
        }));
    }

    debug!(%bin_type, %bin_search, %parallelization, dimensions, "Creating histogram from runtime selection.");

    let histogram = match bin_type {
        BinType::FixedWidth => {
            let axes = axes
                .iter()
                .enumerate()
                .map(|(i, axis)| axis.to_fixed_width(i))
                .collect::<Result<Vec<_>, _>>()?;

            match parallelization {
                HistogramParallelization::NoParallelization => {
                    FastHistogram::FixedWidthSerial(NumericHistogram::new(axes, NoParallelization)?)
                }
                HistogramParallelization::PrivateThreads { partitions } => {
                    FastHistogram::FixedWidthThreads(NumericHistogram::new(axes, private_threads(partitions))?)
                }
                HistogramParallelization::Simd { partitions } => {
                    FastHistogram::FixedWidthSimd(NumericHistogram::new(axes, simd(partitions))?)
                }
            }
        }
        BinType::VariableWidth => {
            let axes = axes
                .iter()
                .enumerate()
                .map(|(i, axis)| axis.to_variable_width(i))
                .collect::<Result<Vec<_>, _>>()?;

            match parallelization {
                HistogramParallelization::NoParallelization => {
                    FastHistogram::VariableWidthSerial(NumericHistogram::new(axes, NoParallelization)?)
                }
                HistogramParallelization::PrivateThreads { partitions } => {
                    FastHistogram::VariableWidthThreads(NumericHistogram::new(axes, private_threads(partitions))?)
                }
                HistogramParallelization::Simd { partitions } => {
                    FastHistogram::VariableWidthSimd(NumericHistogram::new(axes, simd(partitions))?)
                }
            }
        }
        BinType::UnboundedWidth => match parallelization {
            HistogramParallelization::NoParallelization => {
                FastHistogram::UnboundedWidthSerial(TextHistogram::new(NoParallelization))
            }
            HistogramParallelization::PrivateThreads { partitions } => {
                FastHistogram::UnboundedWidthThreads(TextHistogram::new(private_threads(partitions)))
            }
            HistogramParallelization::Simd { partitions } => {
                FastHistogram::UnboundedWidthSimd(TextHistogram::new(simd(partitions)))
            }
        },
    };

    Ok(histogram)
}

fn private_threads(partitions: Option<usize>) -> PrivateThreads {
    partitions.map_or_else(PrivateThreads::default, PrivateThreads::new)
}

fn simd(partitions: Option<usize>) -> Simd {
    partitions.map_or_else(Simd::default, Simd::new)
}

impl FastHistogram {
    /// Increments the bin counts of a numeric histogram using one data sequence per axis.
    ///
    /// # Errors
    ///
    /// If this is a text histogram, or the data does not match the dimensionality of the histogram, an error is
    /// returned and no bin counts are changed.
    pub fn increment_bins<V: Sample>(&mut self, data: &[&[V]]) -> Result<(), HistogramError> {
        dispatch!(self,
            numeric h => h.increment_bins(data),
            text _h => Err(HistogramError::SampleKindMismatch { expected: "text" }),
        )
    }

    /// Increments the bin counts of a text histogram using a single data sequence.
    ///
    /// # Errors
    ///
    /// If this is a numeric histogram, or `data` does not hold exactly one sequence, an error is returned and no bin
    /// counts are changed.
    pub fn increment_text<T>(&mut self, data: &[&[T]]) -> Result<(), HistogramError>
    where
        T: AsRef<str> + Sync,
    {
        dispatch!(self,
            numeric _h => Err(HistogramError::SampleKindMismatch { expected: "numeric" }),
            text h => h.increment_bins(data),
        )
    }

    /// Returns the bin counts, reduced across all private partitions.
    pub fn counts(&self) -> Counts {
        dispatch!(self,
            numeric h => Counts::Dense(h.counts()),
            text h => Counts::Table(h.counts()),
        )
    }

    /// Returns the total number of samples counted.
    pub fn total(&self) -> u64 {
        dispatch!(self, h => h.total())
    }

    /// Resets every bin count, in every partition.
    pub fn zero(&mut self) {
        dispatch!(self, h => h.zero())
    }

    /// Returns the index of the bin that `value` falls into on the given axis of a numeric histogram.
    ///
    /// # Errors
    ///
    /// If this is a text histogram, or `axis` does not refer to an axis of this histogram, an error is returned.
    pub fn bin_search<V: Sample>(&self, axis: usize, value: V) -> Result<usize, HistogramError> {
        dispatch!(self,
            numeric h => h.bin_search(axis, value),
            text _h => Err(HistogramError::SampleKindMismatch { expected: "text" }),
        )
    }

    /// Returns the private partition counts of a numeric histogram, with the partition as the leading axis.
    pub fn subweights(&self) -> Option<ArrayViewD<'_, u64>> {
        dispatch!(self,
            numeric h => Some(h.subweights()),
            text _h => None,
        )
    }

    /// Returns the private partition tables of a text histogram.
    pub fn subtables(&self) -> Option<&[CountTable]> {
        dispatch!(self,
            numeric _h => None,
            text h => Some(h.subtables()),
        )
    }

    /// Returns the number of dimensions.
    pub fn ndims(&self) -> usize {
        dispatch!(self, h => h.ndims())
    }

    /// Returns the number of bins on each axis of a numeric histogram.
    ///
    /// Text histograms have no fixed shape, so `None` is returned for them.
    pub fn shape(&self) -> Option<&[usize]> {
        dispatch!(self,
            numeric h => Some(h.shape()),
            text _h => None,
        )
    }

    /// Returns the number of private partitions.
    pub fn partitions(&self) -> usize {
        dispatch!(self, h => h.partitions())
    }

    /// Returns the parallelization scheme, with its resolved partition count.
    pub fn parallelization(&self) -> HistogramParallelization {
        dispatch!(self, h => h.parallelization().selection())
    }

    /// Returns the bin search algorithm.
    pub fn bin_search_algorithm(&self) -> BinSearchAlgorithm {
        match self {
            Self::FixedWidthSerial(_) | Self::FixedWidthThreads(_) | Self::FixedWidthSimd(_) => {
                BinSearchAlgorithm::Arithmetic
            }
            Self::VariableWidthSerial(_) | Self::VariableWidthThreads(_) | Self::VariableWidthSimd(_) => {
                BinSearchAlgorithm::BinarySearch
            }
            Self::UnboundedWidthSerial(_) | Self::UnboundedWidthThreads(_) | Self::UnboundedWidthSimd(_) => {
                BinSearchAlgorithm::HashFunction
            }
        }
    }

    /// Returns the bin type.
    pub fn bin_type(&self) -> BinType {
        self.bin_search_algorithm().bin_type()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::arr1;

    use super::*;

    const ALGORITHMS: [BinSearchAlgorithm; 3] = [
        BinSearchAlgorithm::Arithmetic,
        BinSearchAlgorithm::BinarySearch,
        BinSearchAlgorithm::HashFunction,
    ];

    const BIN_TYPES: [BinType; 3] = [BinType::FixedWidth, BinType::VariableWidth, BinType::UnboundedWidth];

    fn schemes() -> [HistogramParallelization; 5] {
        [
            HistogramParallelization::NoParallelization,
            HistogramParallelization::private_threads(3),
            HistogramParallelization::PrivateThreads { partitions: None },
            HistogramParallelization::simd(5),
            HistogramParallelization::Simd { partitions: None },
        ]
    }

    fn fixed_1d(parallelization: HistogramParallelization) -> FastHistogram {
        create_fast_histogram(
            BinType::FixedWidth,
            BinSearchAlgorithm::Arithmetic,
            parallelization,
            1,
            &[AxisConfiguration::fixed_width(0.0, 10.0, 5)],
        )
        .unwrap()
    }

    #[test]
    fn fixed_width_scenario_under_every_scheme() {
        let data: &[f64] = &[0.0, 1.9, 2.0, 9.9, 10.0, -5.0, 100.0];
        for parallelization in schemes() {
            let mut histogram = fixed_1d(parallelization);
            histogram.increment_bins(&[data]).unwrap();

            let counts = histogram.counts();
            assert_eq!(counts.as_dense(), Some(&arr1(&[3u64, 1, 0, 0, 3]).into_dyn()));
            assert_eq!(counts.total(), 7);
        }
    }

    #[test]
    fn incompatible_combinations_rejected() {
        for bin_type in BIN_TYPES {
            for bin_search in ALGORITHMS {
                if bin_search.bin_type() == bin_type {
                    continue;
                }

                match create_fast_histogram(
                    bin_type,
                    bin_search,
                    HistogramParallelization::NoParallelization,
                    1,
                    &[AxisConfiguration::fixed_width(0.0, 1.0, 2)],
                ) {
                    Err(HistogramError::IncompatibleStrategyCombination {
                        bin_type: rejected_type,
                        bin_search: rejected_search,
                    }) => {
                        assert_eq!(rejected_type, bin_type);
                        assert_eq!(rejected_search, bin_search);
                    }
                    other => panic!("expected {} / {} to be rejected, got {:?}", bin_type, bin_search, other),
                }
            }
        }
    }

    #[test]
    fn unsupported_dimensionality_rejected() {
        for dimensions in [0, 2] {
            assert!(matches!(
                create_fast_histogram(
                    BinType::UnboundedWidth,
                    BinSearchAlgorithm::HashFunction,
                    HistogramParallelization::NoParallelization,
                    dimensions,
                    &[],
                ),
                Err(HistogramError::UnsupportedDimensionality {
                    bin_type: BinType::UnboundedWidth,
                    ..
                })
            ));
        }

        assert!(matches!(
            create_fast_histogram(
                BinType::FixedWidth,
                BinSearchAlgorithm::Arithmetic,
                HistogramParallelization::NoParallelization,
                0,
                &[],
            ),
            Err(HistogramError::UnsupportedDimensionality { dimensions: 0, .. })
        ));
    }

    #[test]
    fn axis_count_must_match_dimensions() {
        match create_fast_histogram(
            BinType::FixedWidth,
            BinSearchAlgorithm::Arithmetic,
            HistogramParallelization::NoParallelization,
            2,
            &[AxisConfiguration::fixed_width(0.0, 1.0, 2)],
        ) {
            Err(HistogramError::DimensionMismatch {
                mismatch: Mismatch::AxisCount { expected: 2, actual: 1 },
            }) => {}
            other => panic!("expected axis count mismatch, got {:?}", other),
        }
    }

    #[test]
    fn malformed_axes_rejected() {
        assert!(matches!(
            create_fast_histogram(
                BinType::FixedWidth,
                BinSearchAlgorithm::Arithmetic,
                HistogramParallelization::NoParallelization,
                1,
                &[AxisConfiguration::fixed_width(1.0, 0.0, 2)],
            ),
            Err(HistogramError::InvalidAxisRange { .. })
        ));

        assert!(matches!(
            create_fast_histogram(
                BinType::VariableWidth,
                BinSearchAlgorithm::BinarySearch,
                HistogramParallelization::NoParallelization,
                1,
                &[AxisConfiguration::variable_width([2.0, 1.0])],
            ),
            Err(HistogramError::InvalidEdgeSequence { .. })
        ));

        assert!(matches!(
            create_fast_histogram(
                BinType::VariableWidth,
                BinSearchAlgorithm::BinarySearch,
                HistogramParallelization::NoParallelization,
                2,
                &[
                    AxisConfiguration::variable_width([0.0, 1.0]),
                    AxisConfiguration::fixed_width(0.0, 1.0, 2),
                ],
            ),
            Err(HistogramError::MismatchedAxisConfiguration {
                axis: 1,
                bin_type: BinType::VariableWidth
            })
        ));

        assert!(matches!(
            create_fast_histogram(
                BinType::UnboundedWidth,
                BinSearchAlgorithm::HashFunction,
                HistogramParallelization::NoParallelization,
                1,
                &[AxisConfiguration::fixed_width(0.0, 1.0, 2)],
            ),
            Err(HistogramError::MismatchedAxisConfiguration { axis: 0, .. })
        ));
    }

    #[test]
    fn unrepresentable_axes_rejected() {
        assert!(matches!(
            create_fast_histogram(
                BinType::FixedWidth,
                BinSearchAlgorithm::Arithmetic,
                HistogramParallelization::NoParallelization,
                1,
                &[AxisConfiguration::fixed_width(-f64::MAX, f64::MAX, 4)],
            ),
            Err(HistogramError::InvalidAxisRange { .. })
        ));

        let huge = AxisConfiguration::fixed_width(0.0, 1.0, 1 << 40);
        for parallelization in schemes() {
            assert!(matches!(
                create_fast_histogram(
                    BinType::FixedWidth,
                    BinSearchAlgorithm::Arithmetic,
                    parallelization,
                    2,
                    &[huge.clone(), huge.clone()],
                ),
                Err(HistogramError::TooManyBins { dimensions: 2, .. })
            ));
        }
    }

    #[test]
    fn text_histogram_counts_keys() {
        let mut histogram = create_fast_histogram(
            BinType::UnboundedWidth,
            BinSearchAlgorithm::HashFunction,
            HistogramParallelization::private_threads(2),
            1,
            &[],
        )
        .unwrap();

        let words: &[&str] = &["a", "b", "a", "c", "b", "a"];
        histogram.increment_text(&[words]).unwrap();

        let counts = histogram.counts();
        let table = counts.as_table().unwrap();
        assert_eq!(table.get("a"), Some(&3));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(table.get("c"), Some(&1));
        assert_eq!(histogram.subtables().map(<[CountTable]>::len), Some(2));
        assert!(histogram.subweights().is_none());
        assert!(histogram.shape().is_none());
        assert_eq!(histogram.ndims(), 1);
    }

    #[test]
    fn sample_kind_mismatch_leaves_counts_untouched() {
        let mut numeric = fixed_1d(HistogramParallelization::NoParallelization);
        let words: &[&str] = &["a"];
        assert!(matches!(
            numeric.increment_text(&[words]),
            Err(HistogramError::SampleKindMismatch { expected: "numeric" })
        ));
        assert_eq!(numeric.total(), 0);

        let mut text = create_fast_histogram(
            BinType::UnboundedWidth,
            BinSearchAlgorithm::HashFunction,
            HistogramParallelization::NoParallelization,
            1,
            &[],
        )
        .unwrap();
        let values: &[f64] = &[1.0];
        assert!(matches!(
            text.increment_bins(&[values]),
            Err(HistogramError::SampleKindMismatch { expected: "text" })
        ));
        assert!(matches!(
            text.bin_search(0, 1.0),
            Err(HistogramError::SampleKindMismatch { .. })
        ));
        assert_eq!(text.total(), 0);
    }

    #[test]
    fn zero_resets_counts() {
        let mut histogram = fixed_1d(HistogramParallelization::simd(4));
        let data: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 9];
        histogram.increment_bins(&[data]).unwrap();
        assert_eq!(histogram.total(), 9);

        histogram.zero();
        assert_eq!(histogram.counts().total(), 0);
        assert_eq!(histogram.shape(), Some(&[5][..]));
        assert_eq!(histogram.partitions(), 4);
    }

    #[test]
    fn describes_selection() {
        let histogram = create_fast_histogram(
            BinType::VariableWidth,
            BinSearchAlgorithm::BinarySearch,
            HistogramParallelization::Simd { partitions: None },
            2,
            &[
                AxisConfiguration::variable_width([0.0, 1.0, 10.0]),
                AxisConfiguration::variable_width([0.0, 0.5, 1.0, 2.0]),
            ],
        )
        .unwrap();

        assert_eq!(histogram.bin_type(), BinType::VariableWidth);
        assert_eq!(histogram.bin_search_algorithm(), BinSearchAlgorithm::BinarySearch);
        assert_eq!(histogram.parallelization(), HistogramParallelization::simd(8));
        assert_eq!(histogram.partitions(), 8);
        assert_eq!(histogram.ndims(), 2);
        assert_eq!(histogram.shape(), Some(&[2, 3][..]));
        assert_eq!(histogram.bin_search(1, 0.75).unwrap(), 1);
        assert_eq!(histogram.subweights().map(|view| view.shape().to_vec()), Some(vec![8, 2, 3]));
    }
}

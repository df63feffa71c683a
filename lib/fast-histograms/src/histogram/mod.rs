//! Histograms.
//!
//! Two layers are provided. [`NumericHistogram`] and [`TextHistogram`] fix their bin search algorithm and
//! parallelization scheme at the type level, so the per-sample update loop is monomorphized for each combination.
//! [`FastHistogram`] wraps every valid combination behind a single type, selected at runtime by
//! [`create_fast_histogram`], which is where incompatible selections are rejected.

use ndarray::ArrayD;

use crate::{
    error::{HistogramError, Mismatch},
    store::CountTable,
};

mod fast;
pub use self::fast::{create_fast_histogram, FastHistogram};

mod numeric;
pub use self::numeric::NumericHistogram;

mod text;
pub use self::text::TextHistogram;

/// Bin counts of a histogram, reduced across all private partitions.
#[derive(Clone, Debug, PartialEq)]
pub enum Counts {
    /// Dense counts of a numeric histogram, one entry per bin.
    Dense(ArrayD<u64>),

    /// Counts of a text histogram, keyed by the distinct strings seen.
    Table(CountTable),
}

impl Counts {
    /// Returns the total number of samples counted.
    pub fn total(&self) -> u64 {
        match self {
            Self::Dense(counts) => counts.sum(),
            Self::Table(table) => table.values().sum(),
        }
    }

    /// Returns the dense counts, if these are the counts of a numeric histogram.
    pub fn as_dense(&self) -> Option<&ArrayD<u64>> {
        match self {
            Self::Dense(counts) => Some(counts),
            Self::Table(_) => None,
        }
    }

    /// Returns the keyed counts, if these are the counts of a text histogram.
    pub fn as_table(&self) -> Option<&CountTable> {
        match self {
            Self::Dense(_) => None,
            Self::Table(table) => Some(table),
        }
    }
}

/// Checks that `data` holds one sequence per dimension and that all sequences have the same length.
///
/// Returns the number of samples.
pub(crate) fn validate_samples<T>(dimensions: usize, data: &[&[T]]) -> Result<usize, HistogramError> {
    if data.len() != dimensions {
        return Err(HistogramError::mismatch(Mismatch::SequenceCount {
            expected: dimensions,
            actual: data.len(),
        }));
    }

    let len = data.first().map_or(0, |values| values.len());
    if let Some((axis, values)) = data.iter().enumerate().find(|(_, values)| values.len() != len) {
        return Err(HistogramError::mismatch(Mismatch::SequenceLength {
            axis,
            expected: len,
            actual: values.len(),
        }));
    }

    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_matching_sequences() {
        let a: &[u8] = &[1, 2, 3];
        let b: &[u8] = &[4, 5, 6];
        assert_eq!(validate_samples(2, &[a, b]).unwrap(), 3);

        let empty: &[u8] = &[];
        assert_eq!(validate_samples(1, &[empty]).unwrap(), 0);
    }

    #[test]
    fn validate_rejects_inconsistent_sequences() {
        let a: &[u8] = &[1, 2, 3];
        let b: &[u8] = &[4];

        assert!(matches!(
            validate_samples(3, &[a, a]),
            Err(HistogramError::DimensionMismatch {
                mismatch: Mismatch::SequenceCount { expected: 3, actual: 2 }
            })
        ));
        assert!(matches!(
            validate_samples(3, &[a, a, b]),
            Err(HistogramError::DimensionMismatch {
                mismatch: Mismatch::SequenceLength {
                    axis: 2,
                    expected: 3,
                    actual: 1
                }
            })
        ));
    }

    #[test]
    fn counts_accessors() {
        let dense = Counts::Dense(ndarray::arr1(&[1u64, 2, 3]).into_dyn());
        assert_eq!(dense.total(), 6);
        assert!(dense.as_dense().is_some());
        assert!(dense.as_table().is_none());

        let mut table = CountTable::default();
        table.insert("a".to_string(), 4);
        let table = Counts::Table(table);
        assert_eq!(table.total(), 4);
        assert!(table.as_dense().is_none());
        assert_eq!(table.as_table().and_then(|table| table.get("a")), Some(&4));
    }
}

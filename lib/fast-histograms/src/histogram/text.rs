use tracing::{debug, trace};

use super::validate_samples;
use crate::{
    bins::BinType,
    error::HistogramError,
    parallel::Parallelization,
    search::HashFunction,
    store::{CountTable, PartialTables},
};

/// A one-dimensional histogram over text data, with one bin per distinct string.
///
/// Bins are created lazily the first time a string is seen, so there is no axis configuration. Each private partition
/// holds its own table; [`counts`][Self::counts] merges them by key.
#[derive(Clone, Debug)]
pub struct TextHistogram<P: Parallelization> {
    parallelization: P,
    tables: PartialTables,
}

impl<P: Parallelization> TextHistogram<P> {
    /// Creates a new, empty histogram.
    pub fn new(parallelization: P) -> Self {
        let tables = PartialTables::new(parallelization.partitions());

        debug!(
            bin_type = %HashFunction::BIN_TYPE,
            bin_search = %HashFunction::ALGORITHM,
            parallelization = %parallelization.selection(),
            partitions = tables.partitions(),
            "Created text histogram."
        );

        Self {
            parallelization,
            tables,
        }
    }

    /// Increments the bin of every string in the single data sequence.
    ///
    /// # Errors
    ///
    /// If `data` does not hold exactly one sequence, an error is returned and no bin counts are changed.
    pub fn increment_bins<T>(&mut self, data: &[&[T]]) -> Result<(), HistogramError>
    where
        T: AsRef<str> + Sync,
    {
        let len = validate_samples(1, data)?;
        trace!(samples = len, "Incrementing text bins.");

        let values = data[0];
        self.parallelization
            .update(self.tables.tables_mut(), len, move |row| values[row].as_ref());

        Ok(())
    }

    /// Returns the bin counts, merged across all private partitions.
    ///
    /// The result is a snapshot; later increments are not reflected in it.
    pub fn counts(&self) -> CountTable {
        self.tables.reduce()
    }

    /// Returns the bin counts, merged across all private partitions.
    ///
    /// Equivalent to [`counts`][Self::counts].
    pub fn table(&self) -> CountTable {
        self.counts()
    }

    /// Returns the private partition tables.
    pub fn subtables(&self) -> &[CountTable] {
        self.tables.tables()
    }

    /// Returns the total number of samples counted.
    pub fn total(&self) -> u64 {
        self.tables.total()
    }

    /// Removes every bin, in every partition.
    pub fn zero(&mut self) {
        self.tables.clear();
        debug!(partitions = self.tables.partitions(), "Reset text histogram.");
    }

    /// Returns the bin type, which is always [`BinType::UnboundedWidth`].
    pub fn bin_type(&self) -> BinType {
        HashFunction::BIN_TYPE
    }

    /// Returns the number of dimensions, which is always one.
    pub fn ndims(&self) -> usize {
        1
    }

    /// Returns the parallelization scheme.
    pub fn parallelization(&self) -> P {
        self.parallelization
    }

    /// Returns the number of private partitions.
    pub fn partitions(&self) -> usize {
        self.tables.partitions()
    }
}

use super::BinSearchAlgorithm;
use crate::{bins::BinType, store::CountTable};

/// Uses a hash function to find the bin to update, compatible only with unbounded-width bins.
///
/// The key of a sample is the sample itself; new keys are inserted into the table with a count of zero before being
/// incremented.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HashFunction;

impl HashFunction {
    /// The runtime selection corresponding to this algorithm.
    pub const ALGORITHM: BinSearchAlgorithm = BinSearchAlgorithm::HashFunction;

    /// The bin type this algorithm operates on.
    pub const BIN_TYPE: BinType = BinType::UnboundedWidth;

    /// Increments the count for `key` in `table`, growing the table if the key is new.
    #[inline]
    pub fn increment(table: &mut CountTable, key: &str) {
        // `entry_ref` only allocates an owned key on first insertion.
        *table.entry_ref(key).or_insert(0) += 1;
    }
}

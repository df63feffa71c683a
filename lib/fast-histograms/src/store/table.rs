use super::CountStore;
use crate::{collections::FastHashMap, search::HashFunction};

/// Counts keyed by string.
pub type CountTable = FastHashMap<String, u64>;

impl<'k> CountStore<&'k str> for CountTable {
    #[inline]
    fn increment(&mut self, key: &'k str) {
        HashFunction::increment(self, key);
    }
}

/// String-keyed counts, split into independently updated tables.
#[derive(Clone, Debug)]
pub struct PartialTables {
    tables: Vec<CountTable>,
}

impl PartialTables {
    /// Creates `partitions` empty tables.
    pub fn new(partitions: usize) -> Self {
        Self {
            tables: (0..partitions).map(|_| CountTable::default()).collect(),
        }
    }

    /// Returns the number of partitions.
    pub fn partitions(&self) -> usize {
        self.tables.len()
    }

    /// Returns every partition's table.
    pub fn tables(&self) -> &[CountTable] {
        &self.tables
    }

    /// Returns every partition's table, mutably.
    pub fn tables_mut(&mut self) -> &mut [CountTable] {
        &mut self.tables
    }

    /// Merges all tables by key-wise summation.
    pub fn reduce(&self) -> CountTable {
        let mut merged = self.tables.first().cloned().unwrap_or_default();
        for table in self.tables.iter().skip(1) {
            for (key, count) in table {
                *merged.entry_ref(key.as_str()).or_insert(0) += count;
            }
        }
        merged
    }

    /// Returns the total count across all tables.
    pub fn total(&self) -> u64 {
        self.tables.iter().flat_map(|table| table.values()).sum()
    }

    /// Removes every key from every table.
    pub fn clear(&mut self) {
        for table in &mut self.tables {
            table.clear();
        }
    }
}

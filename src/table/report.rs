//! Occupancy statistics and bucket dumps for debugging

use super::{hash::HashKey, HashTable};
use std::fmt;

/// Summary of how entries are spread over the buckets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    /// Stored pairs
    pub entries: usize,
    /// Length of the bucket array
    pub buckets: usize,
    /// Buckets with an empty chain
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
}

impl TableStats {
    /// Entries per bucket
    pub fn load(&self) -> f64 {
        self.entries as f64 / self.buckets as f64
    }
}

impl<K: HashKey + Eq, V> HashTable<K, V> {
    /// Compute occupancy statistics
    pub fn stats(&self) -> TableStats {
        TableStats {
            entries: self.len,
            buckets: self.buckets.len(),
            empty_buckets: self.buckets.iter().filter(|chain| chain.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    /// Printable listing of every bucket and its chain
    pub fn bucket_report(&self) -> BucketReport<'_, K, V> {
        BucketReport { table: self }
    }
}

/// Display adapter returned by [`HashTable::bucket_report`]
#[derive(Debug)]
pub struct BucketReport<'a, K, V> {
    table: &'a HashTable<K, V>,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for BucketReport<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Buckets:")?;
        for (index, chain) in self.table.buckets.iter().enumerate() {
            write!(f, "Bucket {index}: ")?;
            if chain.is_empty() {
                writeln!(f, "Empty")?;
                continue;
            }
            for (position, (key, value)) in chain.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "(Key: {key:?}, Value: {value:?})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let mut table = HashTable::with_capacity(5);
        table.set(1u32, "Value1");
        table.set(6u32, "Value2");

        let stats = table.stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.buckets, 5);
        assert_eq!(stats.empty_buckets, 4);
        assert_eq!(stats.longest_chain, 2);
        assert!((stats.load() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bucket_report() {
        let mut table = HashTable::with_capacity(5);
        table.set(1u32, "Value1");
        table.set(6u32, "Value2");

        let report = table.bucket_report().to_string();
        assert_eq!(
            report,
            "Buckets:\n\
             Bucket 0: Empty\n\
             Bucket 1: Empty\n\
             Bucket 2: Empty\n\
             Bucket 3: Empty\n\
             Bucket 4: (Key: 1, Value: \"Value1\"), (Key: 6, Value: \"Value2\")\n"
        );
    }
}

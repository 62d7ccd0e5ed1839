//! Hash table with separate chaining
//!
//! This module provides the associative array the LZW dictionaries are built
//! on. Keys are placed by a polynomial hash over a stable projection of the
//! key (see [`HashKey`]), collisions are chained per bucket, and the bucket
//! array doubles whenever an insert would push the load past the configured
//! threshold.

mod hash;
mod map;
mod report;

pub use hash::{bucket_index, HashKey, PolyHasher};
pub use map::HashTable;
pub use report::{BucketReport, TableStats};

/// Prime multiplier of the polynomial key hash
pub const HASH_PRIME: u64 = 31;

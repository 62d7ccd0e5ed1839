//! lzwdict - Separate-chaining hash table and LZW codec
//!
//! This crate provides a resizable hash table with separate chaining and an
//! LZW compressor built on top of it. The codec keeps two dictionaries, one
//! mapping byte sequences to codes and one mapping codes back to sequences,
//! both instances of the same [`HashTable`]. They grow in lockstep, so the
//! compressed form is just the code sequence with no dictionary attached.
//!
//! # Features
//!
//! - Generic [`HashTable`] with configurable capacity and load factor
//! - Deterministic key hashing through the [`HashKey`] projection trait
//! - LZW with an unbounded dictionary (no code width cap, no reset)
//! - One-shot and streaming ([`Encoder`]/[`Decoder`]) APIs
//! - Caller-supplied dictionaries for inspection or pre-seeding
//!
//! # Example - Hash table
//!
//! ```
//! use lzwdict::{HashTable, TableConfig};
//!
//! let mut table = HashTable::with_config(TableConfig::new().with_initial_capacity(2))?;
//! table.set(1u32, "One");
//! table.set(2u32, "Two");
//! table.set(3u32, "Three");
//!
//! assert_eq!(table.get(&3), Some(&"Three"));
//! assert!(table.bucket_count() > 2);
//! assert_eq!(table.remove(&1), Some("One"));
//! assert!(!table.contains(&1));
//! # Ok::<(), lzwdict::LzwError>(())
//! ```
//!
//! # Example - Compression
//!
//! ```
//! use lzwdict::{compress, decompress};
//!
//! let data = b"TOBEORNOTTOBEORTOBEORNOT";
//! let codes = compress(data)?;
//! assert_eq!(codes.len(), 16);
//!
//! let restored = decompress(&codes)?;
//! assert_eq!(&restored[..], &data[..]);
//! # Ok::<(), lzwdict::LzwError>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod common;
pub mod error;
pub mod lzw;
pub mod table;

// Re-export commonly used types
pub use common::{
    compression_ratio, Code, CompressionStats, LzwError, Result, TableConfig, BITS_PER_CODE,
    BITS_PER_SYMBOL, DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, FIRST_DYNAMIC_CODE,
    SEED_CODES,
};
pub use lzw::{
    compress_str, compress_with, decompress_to_string, decompress_with, pack_codes, unpack_codes,
    DecodeDictionary, Decoder, EncodeDictionary, Encoder,
};
pub use table::{bucket_index, BucketReport, HashKey, HashTable, PolyHasher, TableStats};

// Convenience functions

/// Compress bytes into LZW codes using a fresh dictionary
///
/// # Arguments
/// * `input` - The data to compress
///
/// # Returns
/// The code sequence; its length must be stored alongside the codes
pub fn compress(input: &[u8]) -> Result<Vec<Code>> {
    lzw::compress(input)
}

/// Decompress LZW codes using a fresh dictionary
///
/// # Arguments
/// * `codes` - The code sequence produced by [`compress`]
///
/// # Returns
/// The reconstructed bytes, or [`LzwError::InvalidCode`] for a malformed stream
pub fn decompress(codes: &[Code]) -> Result<Vec<u8>> {
    lzw::decompress(codes)
}

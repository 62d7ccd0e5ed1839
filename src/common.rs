//! Common types and constants for the hash table and the LZW codec
//!
//! This module defines the error type, the table configuration, and the
//! statistics shared by the dictionary ([`crate::table`]) and the codec
//! ([`crate::lzw`]).

use thiserror::Error;

/// An LZW code as emitted by the compressor
pub type Code = u32;

/// Number of single-byte sequences bound before any input is processed
pub const SEED_CODES: usize = 256;

/// First code handed out to a multi-byte sequence
pub const FIRST_DYNAMIC_CODE: Code = SEED_CODES as Code;

/// Bits each input character is assumed to occupy when reporting ratios
pub const BITS_PER_SYMBOL: usize = 8;

/// Bits each emitted code is assumed to occupy when reporting ratios
pub const BITS_PER_CODE: usize = 32;

/// Default number of buckets in a fresh table
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Default ratio of entries to buckets that triggers growth
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Error type for table and codec operations
#[derive(Debug, Error)]
pub enum LzwError {
    /// A compressed code that is neither known nor the next assignable code
    #[error("Bad compressed code {code} at position {position}")]
    InvalidCode {
        /// The offending code value
        code: Code,
        /// Index of the code within the compressed stream
        position: usize,
    },

    /// A table configured with no buckets
    #[error("Invalid initial capacity: {0} (expected at least 1 bucket)")]
    InvalidCapacity(usize),

    /// A load factor that is not a finite positive number
    #[error("Invalid load factor: {0} (expected a finite value greater than 0)")]
    InvalidLoadFactor(f64),

    /// The dictionary ran out of representable codes
    #[error("Code space exhausted: code {} has already been assigned", Code::MAX)]
    CodeSpaceExhausted,

    /// Packed code bytes that do not divide into whole codes
    #[error("Truncated code stream: {0} bytes is not a multiple of 4")]
    TruncatedCodeStream(usize),

    /// Decompressed bytes requested as text were not UTF-8
    #[error("Decompressed data is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for table and codec operations
pub type Result<T> = std::result::Result<T, LzwError>;

/// Sizing parameters for a [`crate::HashTable`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Number of buckets allocated up front
    pub initial_capacity: usize,
    /// Growth threshold for `entries / buckets`
    pub load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl TableConfig {
    /// Create a configuration with the default capacity and load factor
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial bucket count
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the load factor
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Check that the configuration describes a usable table
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(LzwError::InvalidCapacity(self.initial_capacity));
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(LzwError::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }
}

/// Statistics for a compression or decompression call
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompressionStats {
    /// Bytes on the uncompressed side: read by the encoder, written by the decoder
    pub uncompressed_bytes: usize,
    /// Number of codes emitted or consumed
    pub code_count: usize,
    /// Entries in the dictionary when the call finished
    pub dictionary_entries: usize,
}

impl CompressionStats {
    /// Compression ratio assuming 8 bits per byte and 32 bits per code
    ///
    /// Returns `None` when no codes were produced.
    pub fn ratio(&self) -> Option<f64> {
        compression_ratio(self.uncompressed_bytes, self.code_count)
    }
}

/// Compression ratio `(input_len * 8) / (code_count * 32)`
///
/// Values above 1.0 mean the codes take fewer bits than the input. This is a
/// reporting statistic only; the codec never consults it.
pub fn compression_ratio(input_len: usize, code_count: usize) -> Option<f64> {
    if code_count == 0 {
        return None;
    }
    let input_bits = (input_len * BITS_PER_SYMBOL) as f64;
    let code_bits = (code_count * BITS_PER_CODE) as f64;
    Some(input_bits / code_bits)
}

//! Encoder - Incremental LZW compression
//!
//! The encoder keeps the working sequence and the dictionary between calls,
//! so input may be fed in arbitrary chunks. The code of the working sequence
//! is tracked alongside it, which means emission never needs a second lookup.

use super::{seed_encode_dictionary, EncodeDictionary};
use crate::{Code, CompressionStats, LzwError, Result, TableConfig, FIRST_DYNAMIC_CODE};
use std::borrow::{Borrow, BorrowMut};

/// Streaming LZW compressor
///
/// `D` is either an owned [`EncodeDictionary`] or a mutable borrow of a
/// caller-supplied one.
#[derive(Debug)]
pub struct Encoder<D = EncodeDictionary> {
    dictionary: D,
    current: Vec<u8>,
    current_code: Code,
    /// `None` once `Code::MAX` has been assigned
    next_code: Option<Code>,
    exhausted: bool,
    stats: CompressionStats,
}

impl Encoder<EncodeDictionary> {
    /// Create an encoder with a fresh default-sized dictionary
    pub fn new() -> Self {
        Self::from_dictionary(EncodeDictionary::new())
    }

    /// Create an encoder whose fresh dictionary is sized by `config`
    pub fn with_config(config: TableConfig) -> Result<Self> {
        Ok(Self::from_dictionary(EncodeDictionary::with_config(config)?))
    }
}

impl Default for Encoder<EncodeDictionary> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Encoder<&'a mut EncodeDictionary> {
    /// Create an encoder that grows a caller-supplied dictionary
    ///
    /// The 256 single-byte entries are rebound to their byte values; other
    /// entries are left in place and may match during compression.
    pub fn with_dictionary(dictionary: &'a mut EncodeDictionary) -> Self {
        Self::from_dictionary(dictionary)
    }
}

impl<D: BorrowMut<EncodeDictionary>> Encoder<D> {
    fn from_dictionary(mut dictionary: D) -> Self {
        seed_encode_dictionary(dictionary.borrow_mut());
        Self {
            dictionary,
            current: Vec::new(),
            current_code: 0,
            next_code: Some(FIRST_DYNAMIC_CODE),
            exhausted: false,
            stats: CompressionStats::default(),
        }
    }

    /// The dictionary as built so far
    pub fn dictionary(&self) -> &EncodeDictionary {
        self.dictionary.borrow()
    }

    fn dictionary_mut(&mut self) -> &mut EncodeDictionary {
        self.dictionary.borrow_mut()
    }

    /// Statistics for the input consumed so far
    pub fn stats(&self) -> &CompressionStats {
        &self.stats
    }

    /// Compress `input`, appending completed codes to `output`
    ///
    /// The code for the trailing working sequence is held back until more
    /// input arrives or [`Encoder::finish`] is called.
    ///
    /// Once the code space is exhausted every later call fails with
    /// [`LzwError::CodeSpaceExhausted`]. The byte that could not be placed is
    /// not consumed, so `finish` still flushes a consistent prefix.
    pub fn encode(&mut self, input: &[u8], output: &mut Vec<Code>) -> Result<()> {
        if self.exhausted {
            return Err(LzwError::CodeSpaceExhausted);
        }

        for &byte in input {
            if self.current.is_empty() {
                self.restart(byte);
                self.stats.uncompressed_bytes += 1;
                continue;
            }

            self.current.push(byte);
            if let Some(&code) = self.dictionary().get(self.current.as_slice()) {
                self.current_code = code;
                self.stats.uncompressed_bytes += 1;
                continue;
            }

            let code = match self.allocate_code() {
                Ok(code) => code,
                Err(err) => {
                    self.current.pop();
                    self.exhausted = true;
                    log::warn!("Aborting compression: {}", err);
                    return Err(err);
                }
            };
            output.push(self.current_code);
            self.stats.code_count += 1;
            let sequence = self.current.clone();
            self.dictionary_mut().set(sequence, code);
            self.restart(byte);
            self.stats.uncompressed_bytes += 1;
        }
        Ok(())
    }

    /// Emit the code of the pending working sequence and return the final statistics
    pub fn finish(mut self, output: &mut Vec<Code>) -> CompressionStats {
        if !self.current.is_empty() {
            output.push(self.current_code);
            self.stats.code_count += 1;
        }
        self.stats.dictionary_entries = self.dictionary().len();

        log::trace!(
            "Compressed {} bytes into {} codes ({} dictionary entries)",
            self.stats.uncompressed_bytes,
            self.stats.code_count,
            self.stats.dictionary_entries
        );
        self.stats
    }

    /// Start a new working sequence at a single seeded byte
    fn restart(&mut self, byte: u8) {
        self.current.clear();
        self.current.push(byte);
        self.current_code = Code::from(byte);
    }

    fn allocate_code(&mut self) -> Result<Code> {
        let code = self.next_code.ok_or(LzwError::CodeSpaceExhausted)?;
        self.next_code = code.checked_add(1);
        Ok(code)
    }
}

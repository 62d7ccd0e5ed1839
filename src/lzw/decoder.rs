//! Decoder - Incremental LZW decompression
//!
//! The decoder rebuilds the dictionary one step behind the encoder. The only
//! code it may see before having assigned it is the very next one, which the
//! encoder emits when a sequence it just added is referenced straight away.

use super::{seed_decode_dictionary, DecodeDictionary};
use crate::{Code, CompressionStats, LzwError, Result, TableConfig, FIRST_DYNAMIC_CODE};
use std::borrow::{Borrow, BorrowMut};

/// Streaming LZW decompressor
///
/// `D` is either an owned [`DecodeDictionary`] or a mutable borrow of a
/// caller-supplied one.
#[derive(Debug)]
pub struct Decoder<D = DecodeDictionary> {
    dictionary: D,
    previous: Option<Vec<u8>>,
    /// `None` once `Code::MAX` has been assigned
    next_code: Option<Code>,
    position: usize,
    failure: Option<Failure>,
    stats: CompressionStats,
}

/// Error a decoder stopped on, replayed by every later call
#[derive(Debug, Clone, Copy)]
enum Failure {
    InvalidCode { code: Code, position: usize },
    CodeSpaceExhausted,
}

impl Failure {
    fn of(err: &LzwError) -> Option<Self> {
        match *err {
            LzwError::InvalidCode { code, position } => {
                Some(Self::InvalidCode { code, position })
            }
            LzwError::CodeSpaceExhausted => Some(Self::CodeSpaceExhausted),
            _ => None,
        }
    }

    fn error(self) -> LzwError {
        match self {
            Self::InvalidCode { code, position } => LzwError::InvalidCode { code, position },
            Self::CodeSpaceExhausted => LzwError::CodeSpaceExhausted,
        }
    }
}

impl Decoder<DecodeDictionary> {
    /// Create a decoder with a fresh default-sized dictionary
    pub fn new() -> Self {
        Self::from_dictionary(DecodeDictionary::new())
    }

    /// Create a decoder whose fresh dictionary is sized by `config`
    pub fn with_config(config: TableConfig) -> Result<Self> {
        Ok(Self::from_dictionary(DecodeDictionary::with_config(config)?))
    }
}

impl Default for Decoder<DecodeDictionary> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Decoder<&'a mut DecodeDictionary> {
    /// Create a decoder that grows a caller-supplied dictionary
    ///
    /// Codes 0 to 255 are rebound to their single bytes and new entries are
    /// assigned from 256 upwards, overwriting whatever the caller stored there.
    pub fn with_dictionary(dictionary: &'a mut DecodeDictionary) -> Self {
        Self::from_dictionary(dictionary)
    }
}

impl<D: BorrowMut<DecodeDictionary>> Decoder<D> {
    fn from_dictionary(mut dictionary: D) -> Self {
        seed_decode_dictionary(dictionary.borrow_mut());
        Self {
            dictionary,
            previous: None,
            next_code: Some(FIRST_DYNAMIC_CODE),
            position: 0,
            failure: None,
            stats: CompressionStats::default(),
        }
    }

    /// The dictionary as rebuilt so far
    pub fn dictionary(&self) -> &DecodeDictionary {
        self.dictionary.borrow()
    }

    fn dictionary_mut(&mut self) -> &mut DecodeDictionary {
        self.dictionary.borrow_mut()
    }

    /// Statistics for the codes consumed so far
    pub fn stats(&self) -> &CompressionStats {
        &self.stats
    }

    /// Decompress `codes`, appending the reconstructed bytes to `output`
    ///
    /// On a malformed code the error names the code and its position in the
    /// whole stream. Bytes appended by earlier codes of the same call are
    /// left in `output` and must be discarded by the caller. The stream is
    /// aborted: every later call returns the same error without output.
    pub fn decode(&mut self, codes: &[Code], output: &mut Vec<u8>) -> Result<()> {
        if let Some(failure) = self.failure {
            return Err(failure.error());
        }

        for &code in codes {
            let position = self.position;
            let resolved = match self.previous.take() {
                None => self.first_entry(code, position),
                Some(previous) => self.next_entry(previous, code, position),
            };
            let entry = match resolved {
                Ok(entry) => entry,
                Err(err) => {
                    self.failure = Failure::of(&err);
                    return Err(err);
                }
            };

            output.extend_from_slice(&entry);
            self.stats.uncompressed_bytes += entry.len();
            self.stats.code_count += 1;
            self.position += 1;
            self.previous = Some(entry);
        }
        Ok(())
    }

    /// Return the final statistics
    pub fn finish(mut self) -> CompressionStats {
        self.stats.dictionary_entries = self.dictionary().len();

        log::trace!(
            "Decompressed {} codes into {} bytes ({} dictionary entries)",
            self.stats.code_count,
            self.stats.uncompressed_bytes,
            self.stats.dictionary_entries
        );
        self.stats
    }

    fn first_entry(&self, code: Code, position: usize) -> Result<Vec<u8>> {
        match self.dictionary().get(&code) {
            Some(entry) if !entry.is_empty() => Ok(entry.clone()),
            _ => Err(invalid_code(code, position)),
        }
    }

    fn next_entry(&mut self, previous: Vec<u8>, code: Code, position: usize) -> Result<Vec<u8>> {
        let entry = match self.dictionary().get(&code) {
            Some(known) if !known.is_empty() => known.clone(),
            Some(_) => return Err(invalid_code(code, position)),
            None if Some(code) == self.next_code => {
                let mut entry = previous.clone();
                entry.push(previous[0]);
                entry
            }
            None => return Err(invalid_code(code, position)),
        };

        let assigned = self.allocate_code()?;
        let mut addition = previous;
        addition.push(entry[0]);
        self.dictionary_mut().set(assigned, addition);
        Ok(entry)
    }

    fn allocate_code(&mut self) -> Result<Code> {
        let code = self.next_code.ok_or(LzwError::CodeSpaceExhausted)?;
        self.next_code = code.checked_add(1);
        Ok(code)
    }
}

fn invalid_code(code: Code, position: usize) -> LzwError {
    log::warn!("Aborting decompression: bad code {} at position {}", code, position);
    LzwError::InvalidCode { code, position }
}

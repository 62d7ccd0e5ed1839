//! LZW compression and decompression
//!
//! The codec turns bytes into a sequence of integer codes and back. Both sides
//! start from the same 256 single-byte entries and add one entry per step, so
//! the decoder rebuilds the encoder's dictionary without it ever being sent.
//! The dictionary is never capped or reset.

mod decoder;
mod encoder;

pub use decoder::Decoder;
pub use encoder::Encoder;

use crate::{Code, HashTable, LzwError, Result};

/// Encode-side dictionary: byte sequence to code
pub type EncodeDictionary = HashTable<Vec<u8>, Code>;

/// Decode-side dictionary: code to byte sequence
pub type DecodeDictionary = HashTable<Code, Vec<u8>>;

/// Size in bytes of one packed code
pub const PACKED_CODE_SIZE: usize = 4;

/// Bind every single byte to the code equal to its value
pub fn seed_encode_dictionary(dictionary: &mut EncodeDictionary) {
    for byte in 0..=u8::MAX {
        dictionary.set(vec![byte], Code::from(byte));
    }
}

/// Bind every code below 256 to the single byte equal to its value
pub fn seed_decode_dictionary(dictionary: &mut DecodeDictionary) {
    for byte in 0..=u8::MAX {
        dictionary.set(Code::from(byte), vec![byte]);
    }
}

/// Compress `input` with a fresh dictionary
pub fn compress(input: &[u8]) -> Result<Vec<Code>> {
    let mut encoder = Encoder::new();
    let mut output = Vec::new();
    encoder.encode(input, &mut output)?;
    encoder.finish(&mut output);
    Ok(output)
}

/// Compress `input`, growing a caller-supplied dictionary
pub fn compress_with(input: &[u8], dictionary: &mut EncodeDictionary) -> Result<Vec<Code>> {
    let mut encoder = Encoder::with_dictionary(dictionary);
    let mut output = Vec::new();
    encoder.encode(input, &mut output)?;
    encoder.finish(&mut output);
    Ok(output)
}

/// Compress the UTF-8 bytes of `input`
pub fn compress_str(input: &str) -> Result<Vec<Code>> {
    compress(input.as_bytes())
}

/// Decompress `codes` with a fresh dictionary
pub fn decompress(codes: &[Code]) -> Result<Vec<u8>> {
    let mut decoder = Decoder::new();
    let mut output = Vec::new();
    decoder.decode(codes, &mut output)?;
    decoder.finish();
    Ok(output)
}

/// Decompress `codes`, growing a caller-supplied dictionary
pub fn decompress_with(codes: &[Code], dictionary: &mut DecodeDictionary) -> Result<Vec<u8>> {
    let mut decoder = Decoder::with_dictionary(dictionary);
    let mut output = Vec::new();
    decoder.decode(codes, &mut output)?;
    decoder.finish();
    Ok(output)
}

/// Decompress `codes` and interpret the result as UTF-8 text
pub fn decompress_to_string(codes: &[Code]) -> Result<String> {
    Ok(String::from_utf8(decompress(codes)?)?)
}

/// Serialize codes as consecutive little-endian `u32` values
pub fn pack_codes(codes: &[Code]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(codes.len() * PACKED_CODE_SIZE);
    for code in codes {
        bytes.extend_from_slice(&code.to_le_bytes());
    }
    bytes
}

/// Parse codes written by [`pack_codes`]
pub fn unpack_codes(bytes: &[u8]) -> Result<Vec<Code>> {
    if bytes.len() % PACKED_CODE_SIZE != 0 {
        return Err(LzwError::TruncatedCodeStream(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(PACKED_CODE_SIZE)
        .map(|chunk| Code::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_dictionaries_mirror_each_other() {
        let mut encode = EncodeDictionary::new();
        let mut decode = DecodeDictionary::new();
        seed_encode_dictionary(&mut encode);
        seed_decode_dictionary(&mut decode);

        assert_eq!(encode.len(), 256);
        assert_eq!(decode.len(), 256);
        for (sequence, code) in encode.iter() {
            assert_eq!(decode.get(code), Some(sequence));
        }
    }

    #[test]
    fn test_round_trip() {
        let text = "TOBEORNOTTOBEORTOBEORNOT";
        let codes = compress_str(text).unwrap();
        assert_eq!(decompress_to_string(&codes).unwrap(), text);
    }

    #[test]
    fn test_non_utf8_output() {
        let codes = compress(&[0xFF, 0xFE]).unwrap();
        assert!(matches!(
            decompress_to_string(&codes),
            Err(LzwError::InvalidUtf8(_))
        ));
        assert_eq!(decompress(&codes).unwrap(), vec![0xFF, 0xFE]);
    }

    #[test]
    fn test_dictionaries_advance_in_lockstep() {
        let input = b"abracadabra abracadabra";
        let mut encode = EncodeDictionary::new();
        let mut decode = DecodeDictionary::new();

        let codes = compress_with(input, &mut encode).unwrap();
        let output = decompress_with(&codes, &mut decode).unwrap();
        assert_eq!(output, input);

        // Every entry the decoder built matches the encoder's assignment
        for (code, sequence) in decode.iter() {
            assert_eq!(encode.get(sequence.as_slice()), Some(code));
        }
        assert_eq!(decode.len(), encode.len());
    }

    #[test]
    fn test_pack_codes() {
        let codes = vec![0, 255, 256, 70_000, Code::MAX];
        let bytes = pack_codes(&codes);
        assert_eq!(bytes.len(), 20);
        assert_eq!(&bytes[8..12], &[0x00, 0x01, 0x00, 0x00]);
        assert_eq!(unpack_codes(&bytes).unwrap(), codes);
    }

    #[test]
    fn test_unpack_truncated() {
        assert!(matches!(
            unpack_codes(&[1, 0, 0, 0, 2]),
            Err(LzwError::TruncatedCodeStream(5))
        ));
        assert!(unpack_codes(&[]).unwrap().is_empty());
    }
}

//! Key projection and bucket hashing
//!
//! Every key type stored in a [`super::HashTable`] feeds a stable projection of
//! itself into a [`PolyHasher`]. The hasher folds the projection into a
//! polynomial hash with a fixed prime, so the same key always lands in the
//! same bucket for a given bucket count, across runs and across table growth.

use super::HASH_PRIME;

/// Polynomial accumulator: `hash = hash * 31 + unit` for every unit written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolyHasher {
    state: u64,
}

impl PolyHasher {
    /// Create a hasher with a zero state
    pub const fn new() -> Self {
        Self { state: 0 }
    }

    /// Fold one projection unit into the hash
    #[inline]
    pub fn write_unit(&mut self, unit: u64) {
        self.state = self.state.wrapping_mul(HASH_PRIME).wrapping_add(unit);
    }

    /// Fold every byte of `bytes` into the hash, in order
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_unit(u64::from(byte));
        }
    }

    /// Current hash value
    pub const fn finish(&self) -> u64 {
        self.state
    }
}

/// A key type with a deterministic projection used for bucket selection
///
/// Implementations must project equal keys identically. When a type is used
/// as a borrowed lookup form of another (`[u8]` for `Vec<u8>`, `str` for
/// `String`), both must produce the same projection.
pub trait HashKey {
    /// Write the canonical projection of `self` into `hasher`
    fn project(&self, hasher: &mut PolyHasher);
}

/// Compute the bucket index of `key` for a table of `bucket_count` buckets
///
/// The bucket count is a parameter so growth can place entries against the
/// new array size before it replaces the old one.
///
/// The hash wraps in unsigned 64-bit arithmetic and is never folded through
/// a signed absolute value, so keys long enough to overflow 32 bits land in
/// different buckets than a signed 32-bit `abs(h) % n` scheme would place them.
pub fn bucket_index<Q: HashKey + ?Sized>(key: &Q, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0, "bucket count must be positive");
    let mut hasher = PolyHasher::new();
    key.project(&mut hasher);
    (hasher.finish() % bucket_count as u64) as usize
}

impl HashKey for [u8] {
    fn project(&self, hasher: &mut PolyHasher) {
        hasher.write_bytes(self);
    }
}

impl HashKey for Vec<u8> {
    fn project(&self, hasher: &mut PolyHasher) {
        hasher.write_bytes(self);
    }
}

impl HashKey for str {
    fn project(&self, hasher: &mut PolyHasher) {
        hasher.write_bytes(self.as_bytes());
    }
}

impl HashKey for String {
    fn project(&self, hasher: &mut PolyHasher) {
        hasher.write_bytes(self.as_bytes());
    }
}

impl HashKey for char {
    fn project(&self, hasher: &mut PolyHasher) {
        hasher.write_unit(u64::from(*self));
    }
}

impl<T: HashKey + ?Sized> HashKey for &T {
    fn project(&self, hasher: &mut PolyHasher) {
        (**self).project(hasher);
    }
}

/// Project an integer as its decimal digits, most significant first
fn project_decimal(mut value: u64, hasher: &mut PolyHasher) {
    let mut digits = [0u8; 20];
    let mut start = digits.len();
    loop {
        start -= 1;
        digits[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    hasher.write_bytes(&digits[start..]);
}

macro_rules! unsigned_hash_key {
    ($($ty:ty),*) => {
        $(
            impl HashKey for $ty {
                fn project(&self, hasher: &mut PolyHasher) {
                    project_decimal(*self as u64, hasher);
                }
            }
        )*
    };
}

macro_rules! signed_hash_key {
    ($($ty:ty),*) => {
        $(
            impl HashKey for $ty {
                fn project(&self, hasher: &mut PolyHasher) {
                    if *self < 0 {
                        hasher.write_unit(u64::from(b'-'));
                    }
                    project_decimal(self.unsigned_abs() as u64, hasher);
                }
            }
        )*
    };
}

unsigned_hash_key!(u8, u16, u32, u64, usize);
signed_hash_key!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of<Q: HashKey + ?Sized>(key: &Q) -> u64 {
        let mut hasher = PolyHasher::new();
        key.project(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_polynomial_hash() {
        let expected = (u64::from(b'A') * HASH_PRIME) + u64::from(b'B');
        assert_eq!(hash_of(b"AB".as_slice()), expected);
        assert_eq!(hash_of(""), 0);
    }

    #[test]
    fn test_borrowed_forms_agree() {
        let owned = b"TOBE".to_vec();
        assert_eq!(hash_of(&owned), hash_of(owned.as_slice()));
        assert_eq!(hash_of(&String::from("key1")), hash_of("key1"));
        assert_eq!(hash_of(&&owned), hash_of(&owned));
    }

    #[test]
    fn test_integers_project_as_decimal_text() {
        assert_eq!(hash_of(&0u32), hash_of("0"));
        assert_eq!(hash_of(&256u32), hash_of("256"));
        assert_eq!(hash_of(&u64::MAX), hash_of("18446744073709551615"));
        assert_eq!(hash_of(&-42i32), hash_of("-42"));
        assert_eq!(hash_of(&i64::MIN), hash_of("-9223372036854775808"));
    }

    #[test]
    fn test_bucket_index_bounds() {
        for bucket_count in [1, 2, 5, 16, 1024] {
            for key in 0u32..500 {
                assert!(bucket_index(&key, bucket_count) < bucket_count);
            }
        }
    }

    #[test]
    fn test_bucket_index_depends_on_count() {
        // "1" = 49 and "6" = 54 share bucket 4 of 5 but separate at 10
        assert_eq!(bucket_index(&1u32, 5), bucket_index(&6u32, 5));
        assert_ne!(bucket_index(&1u32, 10), bucket_index(&6u32, 10));
    }

    #[test]
    fn test_long_keys_wrap_without_panicking() {
        let long = vec![0xFFu8; 10_000];
        let index = bucket_index(long.as_slice(), 7);
        assert!(index < 7);
        assert_eq!(index, bucket_index(&long, 7));
    }

    #[test]
    fn test_placement_uses_unsigned_wrapping() {
        // Overflows 32 bits; a signed abs() fold would pick bucket 8 instead
        assert_eq!(bucket_index("TOBEORNOTTOBE", 16), 0);
        assert_eq!(bucket_index(b"TOBEORNOTTOBE".as_slice(), 16), 0);
    }
}

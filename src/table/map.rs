//! Separate-chaining hash table
//!
//! Buckets are plain vectors of `(key, value)` pairs. Growth doubles the bucket
//! array and rehashes every entry in one pass, before the insert that would
//! otherwise push the load past the configured threshold.

use super::hash::{bucket_index, HashKey};
use crate::{Result, TableConfig, DEFAULT_LOAD_FACTOR};
use std::borrow::Borrow;

/// Chain of colliding entries owned by one bucket
pub(super) type Chain<K, V> = Vec<(K, V)>;

/// Associative array with separate chaining and automatic growth
///
/// # Example
///
/// ```
/// use lzwdict::HashTable;
///
/// let mut table = HashTable::with_capacity(2);
/// table.set("one".to_string(), 1);
/// table.set("two".to_string(), 2);
/// table.set("three".to_string(), 3);
///
/// assert_eq!(table.get("two"), Some(&2));
/// assert_eq!(table.len(), 3);
/// assert!(table.bucket_count() > 2);
/// ```
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    pub(super) buckets: Vec<Chain<K, V>>,
    pub(super) len: usize,
    load_factor: f64,
}

fn empty_buckets<K, V>(count: usize) -> Vec<Chain<K, V>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, Vec::new);
    buckets
}

impl<K: HashKey + Eq, V> HashTable<K, V> {
    /// Create a table with 16 buckets and a load factor of 0.75
    pub fn new() -> Self {
        let config = TableConfig::default();
        Self::from_parts(config.initial_capacity, config.load_factor)
    }

    /// Create a table with `capacity` buckets (at least one) and the default load factor
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(capacity.max(1), DEFAULT_LOAD_FACTOR)
    }

    /// Create a table from a validated configuration
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config.initial_capacity, config.load_factor))
    }

    fn from_parts(capacity: usize, load_factor: f64) -> Self {
        Self {
            buckets: empty_buckets(capacity),
            len: 0,
            load_factor,
        }
    }

    /// Number of stored pairs
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no pairs
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current length of the bucket array
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Configured growth threshold
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Insert or replace the value for `key`
    ///
    /// Returns the previous value when the key was already present, in which
    /// case the entry count is unchanged. The table grows before placing the
    /// entry if one more entry would exceed the load factor.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.grow_for(self.len + 1);

        let index = bucket_index(&key, self.buckets.len());
        let chain = &mut self.buckets[index];
        if let Some((_, existing)) = chain.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, value));
        }

        chain.push((key, value));
        self.len += 1;
        None
    }

    /// Look up the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: HashKey + Eq + ?Sized,
    {
        let index = bucket_index(key, self.buckets.len());
        self.buckets[index]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Look up a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: HashKey + Eq + ?Sized,
    {
        let index = bucket_index(key, self.buckets.len());
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Whether `key` is present
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: HashKey + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Remove `key` and return its value, or `None` if it was absent
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: HashKey + Eq + ?Sized,
    {
        let index = bucket_index(key, self.buckets.len());
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|(k, _)| k.borrow() == key)?;
        self.len -= 1;
        Some(chain.remove(position).1)
    }

    /// Iterate over all pairs in bucket order, then chain order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.iter().flatten().map(|(k, v)| (k, v))
    }

    /// Snapshot of all pairs in bucket order, then chain order
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Double the bucket array until `entries` fit under the load factor
    fn grow_for(&mut self, entries: usize) {
        let mut target = self.buckets.len();
        while entries as f64 / target as f64 > self.load_factor {
            match target.checked_mul(2) {
                Some(doubled) => target = doubled,
                None => break,
            }
        }
        if target != self.buckets.len() {
            self.rehash(target);
        }
    }

    fn rehash(&mut self, bucket_count: usize) {
        let previous = self.buckets.len();
        let mut buckets = empty_buckets(bucket_count);
        for (key, value) in self.buckets.drain(..).flatten() {
            let index = bucket_index(&key, bucket_count);
            buckets[index].push((key, value));
        }
        self.buckets = buckets;

        log::debug!(
            "Hash table grew from {} to {} buckets ({} entries)",
            previous,
            bucket_count,
            self.len
        );
    }
}

impl<K: HashKey + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: HashKey + Eq, V> Extend<(K, V)> for HashTable<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: HashKey + Eq, V> FromIterator<(K, V)> for HashTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

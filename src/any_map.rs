//! A backend-agnostic view of maps keyed by `i64`.
//!
//! [`AnyLongMap`] captures the container contract (put/get/remove, existence
//! checks, bulk key and value listing) so callers and tests can run against
//! [`LongMap`] or any hashed `i64` map interchangeably.

use std::collections::HashMap;
use std::hash::BuildHasher;

use fnv::FnvBuildHasher;

use crate::{IndexType, LongMap};

/// A `hashbrown` map keyed by `i64` using the FNV hasher.
pub type FnvLongHashMap<V> = hashbrown::HashMap<i64, V, FnvBuildHasher>;

/// An object-safe abstraction over maps keyed by `i64`.
///
/// Implemented by [`LongMap`], `std::collections::HashMap<i64, V, S>` and
/// `hashbrown::HashMap<i64, V, S>`.
pub trait AnyLongMap<V> {
    /// Returns the number of pairs stored.
    fn len(&self) -> usize;

    /// Returns `true` if no pair is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `value` under `key`, returning the value it replaced.
    fn insert(&mut self, key: i64, value: V) -> Option<V>;

    /// Returns the value stored under `key`.
    fn get(&self, key: i64) -> Option<&V>;

    /// Removes `key`, returning its value if it was present.
    fn remove(&mut self, key: i64) -> Option<V>;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: i64) -> bool;

    /// Returns `true` if some pair holds `value`.
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq;

    /// Collects every key. Order is backend-defined.
    fn key_vec(&self) -> Vec<i64>;

    /// Collects every value, in the same order as [`key_vec`](Self::key_vec).
    fn value_vec(&self) -> Vec<&V>;

    /// Removes every pair.
    fn clear(&mut self);
}

// Support LongMap
impl<V, I: IndexType> AnyLongMap<V> for LongMap<V, I> {
    fn len(&self) -> usize {
        LongMap::len(self)
    }
    fn insert(&mut self, key: i64, value: V) -> Option<V> {
        LongMap::insert(self, key, value)
    }
    fn get(&self, key: i64) -> Option<&V> {
        LongMap::get(self, key)
    }
    fn remove(&mut self, key: i64) -> Option<V> {
        LongMap::remove(self, key)
    }
    fn contains_key(&self, key: i64) -> bool {
        LongMap::contains_key(self, key)
    }
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        LongMap::contains_value(self, value)
    }
    fn key_vec(&self) -> Vec<i64> {
        self.keys().collect()
    }
    fn value_vec(&self) -> Vec<&V> {
        self.values().collect()
    }
    fn clear(&mut self) {
        LongMap::clear(self)
    }
}

// Support standard HashMap
impl<V, S: BuildHasher> AnyLongMap<V> for HashMap<i64, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }
    fn insert(&mut self, key: i64, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }
    fn get(&self, key: i64) -> Option<&V> {
        HashMap::get(self, &key)
    }
    fn remove(&mut self, key: i64) -> Option<V> {
        HashMap::remove(self, &key)
    }
    fn contains_key(&self, key: i64) -> bool {
        HashMap::contains_key(self, &key)
    }
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }
    fn key_vec(&self) -> Vec<i64> {
        self.keys().copied().collect()
    }
    fn value_vec(&self) -> Vec<&V> {
        // `values()` walks the table in the same order as `keys()`.
        self.values().collect()
    }
    fn clear(&mut self) {
        HashMap::clear(self)
    }
}

// Support hashbrown HashMap (and so `FnvLongHashMap`)
impl<V, S: BuildHasher> AnyLongMap<V> for hashbrown::HashMap<i64, V, S> {
    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }
    fn insert(&mut self, key: i64, value: V) -> Option<V> {
        hashbrown::HashMap::insert(self, key, value)
    }
    fn get(&self, key: i64) -> Option<&V> {
        hashbrown::HashMap::get(self, &key)
    }
    fn remove(&mut self, key: i64) -> Option<V> {
        hashbrown::HashMap::remove(self, &key)
    }
    fn contains_key(&self, key: i64) -> bool {
        hashbrown::HashMap::contains_key(self, &key)
    }
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }
    fn key_vec(&self) -> Vec<i64> {
        self.keys().copied().collect()
    }
    fn value_vec(&self) -> Vec<&V> {
        self.values().collect()
    }
    fn clear(&mut self) {
        hashbrown::HashMap::clear(self)
    }
}

use core::iter::FusedIterator;
use core::mem;
use core::num::NonZeroUsize;
use std::fmt::{self, Debug};
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::IndexType;

/// Bucket count used by [`LongMap::new`] and [`Default`].
pub const DEFAULT_BUCKETS: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(n) => n,
    None => panic!("default bucket count must be non-zero"),
};

/// A hash map keyed by `i64` with a fixed number of buckets and chained collisions.
///
/// # Architecture
/// The bucket array is allocated once at construction and never resized.
/// Each bucket holds the head of a singly linked chain of entries. The
/// chains live in one **index-linked arena**:
///
/// - `heads`: one arena index per bucket (`I::NONE` for an empty bucket).
/// - `slots`: the arena. An occupied slot stores `key`, `value` and the
///   `next` index of its chain. A vacant slot is a link in the free list.
/// - `free_head`: first vacant slot, reused before the arena grows.
///
/// ## Put Algorithm
/// ```text
/// 1. bucket = |key mod bucket_count|
/// 2. If heads[bucket] is NONE: allocate a slot, make it the head.
/// 3. Else walk the chain from the head:
///    a. key matches -> overwrite value in place, len unchanged.
///    b. chain exhausted -> allocate a slot, link it after the tail, len += 1.
/// ```
///
/// ## Remove Algorithm
/// ```text
/// 1. Walk the bucket chain remembering `prev`.
/// 2. On match: prev is NONE ? heads[bucket] = next : prev.next = next.
/// 3. Push the slot onto the free list, len -= 1, return the value.
/// ```
///
/// Iteration visits buckets in index order and each chain in link order;
/// no order across buckets is promised.
#[derive(Clone)]
pub struct LongMap<V, I: IndexType = usize> {
    heads: Box<[I]>,
    slots: Vec<Slot<V, I>>,
    free_head: I,
    len: usize,
}

#[derive(Clone)]
struct Node<V, I> {
    key: i64,
    value: V,
    next: I,
}

#[derive(Clone)]
enum Slot<V, I> {
    Occupied(Node<V, I>),
    Vacant { next_free: I },
}

// --- 1. Construction ---

impl<V> LongMap<V> {
    /// Creates an empty map with [`DEFAULT_BUCKETS`] buckets.
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let mut map = LongMap::new();
    /// map.put(16, "a");
    /// assert_eq!(map.get(16), Some(&"a"));
    /// assert_eq!(map.bucket_count(), 16);
    /// ```
    pub fn new() -> Self {
        Self::with_index_buckets(DEFAULT_BUCKETS)
    }

    /// Creates an empty map with exactly `buckets` buckets.
    pub fn with_buckets(buckets: NonZeroUsize) -> Self {
        Self::with_index_buckets(buckets)
    }

    /// Creates an empty map with `buckets` buckets, rejecting a zero count.
    ///
    /// ```rust
    /// use long_map::{Error, LongMap};
    ///
    /// assert!(LongMap::<u8>::try_with_buckets(4).is_ok());
    /// assert_eq!(LongMap::<u8>::try_with_buckets(0).err(), Some(Error::ZeroBuckets));
    /// ```
    pub fn try_with_buckets(buckets: usize) -> Result<Self> {
        Self::try_with_index_buckets(buckets)
    }
}

impl<V, I: IndexType> LongMap<V, I> {
    /// Creates an empty map with `buckets` buckets and `I` as the link type.
    ///
    /// Use this to pick a compact index (`u16`, `u32`) when the number of
    /// entries is known to stay small.
    pub fn with_index_buckets(buckets: NonZeroUsize) -> Self {
        Self {
            heads: vec![I::NONE; buckets.get()].into_boxed_slice(),
            slots: Vec::new(),
            free_head: I::NONE,
            len: 0,
        }
    }

    /// Fallible counterpart of [`with_index_buckets`](Self::with_index_buckets).
    pub fn try_with_index_buckets(buckets: usize) -> Result<Self> {
        NonZeroUsize::new(buckets)
            .map(Self::with_index_buckets)
            .ok_or(Error::ZeroBuckets)
    }

    /// Returns the number of buckets, fixed for the lifetime of the map.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    /// Returns the number of key-value pairs in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // --- 2. Keyed Operations ---

    /// Stores `value` under `key` and returns a reference to the stored value.
    ///
    /// An existing entry is updated in place; a new key is appended to the
    /// tail of its bucket chain.
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let mut map = LongMap::new();
    /// *map.put(7, 1) += 10;
    /// map.put(7, 100);
    /// assert_eq!(map.get(7), Some(&100));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: i64, value: V) -> &mut V {
        let (idx, _) = self.upsert(key, value);
        &mut self.node_mut(idx).value
    }

    /// Inserts a pair, returning the value it replaced if `key` was present.
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        self.upsert(key, value).1
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get(&self, key: i64) -> Option<&V> {
        self.find(key).map(|idx| &self.node(idx).value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(&mut self.node_mut(idx).value)
    }

    /// Removes `key` from the map, returning its value if it was present.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let bucket = self.index_of(key);
        let mut prev = I::NONE;
        let mut cur = self.heads[bucket];

        while !cur.is_none() {
            let (cur_key, next) = {
                let node = self.node(cur);
                (node.key, node.next)
            };
            if cur_key == key {
                if prev.is_none() {
                    self.heads[bucket] = next;
                } else {
                    self.node_mut(prev).next = next;
                }
                self.len -= 1;
                return Some(self.release(cur));
            }
            prev = cur;
            cur = next;
        }
        None
    }

    /// Returns `true` if some entry is stored under `key`.
    pub fn contains_key(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// Returns `true` if some entry holds a value equal to `value`.
    ///
    /// Scans every bucket. Optional values are modelled with `V = Option<T>`,
    /// so `contains_value(&None)` finds stored `None`s.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Removes every pair. The bucket count is kept.
    pub fn clear(&mut self) {
        self.heads.fill(I::NONE);
        self.slots.clear();
        self.free_head = I::NONE;
        self.len = 0;
    }

    // --- 3. Bulk Views ---

    /// Iterates over `(key, &value)` pairs, buckets in index order.
    pub fn iter(&self) -> Iter<'_, V, I> {
        Iter {
            map: self,
            bucket: 0,
            cursor: I::NONE,
            remaining: self.len,
        }
    }

    /// Iterates over every key, in the same order as [`iter`](Self::iter).
    pub fn keys(&self) -> Keys<'_, V, I> {
        Keys { inner: self.iter() }
    }

    /// Iterates over every value, in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> Values<'_, V, I> {
        Values { inner: self.iter() }
    }

    /// Yields the chain length of each bucket, in bucket order.
    ///
    /// ```rust
    /// use long_map::LongMap;
    /// use std::num::NonZeroUsize;
    ///
    /// let mut map = LongMap::with_buckets(NonZeroUsize::new(2).unwrap());
    /// for key in [33, 3, 15, 16] {
    ///     map.put(key, ());
    /// }
    /// assert_eq!(map.chain_lengths().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.heads.iter().map(move |&head| {
            let mut n = 0;
            let mut cur = head;
            while !cur.is_none() {
                n += 1;
                cur = self.node(cur).next;
            }
            n
        })
    }

    // --- 4. Chain Internals ---

    /// Maps a key to its bucket: `|key mod bucket_count|`.
    ///
    /// `|key % n| == |key| % n` for a truncating remainder, and
    /// `unsigned_abs` is defined for `i64::MIN`.
    #[inline]
    fn index_of(&self, key: i64) -> usize {
        (key.unsigned_abs() % self.heads.len() as u64) as usize
    }

    #[inline]
    fn node(&self, idx: I) -> &Node<V, I> {
        match &self.slots[idx.as_usize()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("Logic Error: chain link points at a vacant slot"),
        }
    }

    #[inline]
    fn node_mut(&mut self, idx: I) -> &mut Node<V, I> {
        match &mut self.slots[idx.as_usize()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("Logic Error: chain link points at a vacant slot"),
        }
    }

    fn find(&self, key: i64) -> Option<I> {
        let mut cur = self.heads[self.index_of(key)];
        while !cur.is_none() {
            let node = self.node(cur);
            if node.key == key {
                return Some(cur);
            }
            cur = node.next;
        }
        None
    }

    /// Updates `key` in place or appends it to its chain.
    /// Returns the slot now holding `key` and the displaced value, if any.
    fn upsert(&mut self, key: i64, value: V) -> (I, Option<V>) {
        let bucket = self.index_of(key);
        let mut cur = self.heads[bucket];

        if cur.is_none() {
            let idx = self.alloc(key, value);
            self.heads[bucket] = idx;
            self.len += 1;
            return (idx, None);
        }

        loop {
            let node = self.node_mut(cur);
            if node.key == key {
                let old = mem::replace(&mut node.value, value);
                return (cur, Some(old));
            }
            if node.next.is_none() {
                break;
            }
            cur = node.next;
        }

        // `cur` is the chain tail.
        let idx = self.alloc(key, value);
        self.node_mut(cur).next = idx;
        self.len += 1;
        (idx, None)
    }

    /// Takes a slot from the free list, or grows the arena.
    fn alloc(&mut self, key: i64, value: V) -> I {
        let node = Node {
            key,
            value,
            next: I::NONE,
        };

        if self.free_head.is_none() {
            let idx = I::from_usize(self.slots.len());
            self.slots.push(Slot::Occupied(node));
            return idx;
        }

        let idx = self.free_head;
        let slot = &mut self.slots[idx.as_usize()];
        self.free_head = match slot {
            Slot::Vacant { next_free } => *next_free,
            Slot::Occupied(_) => unreachable!("Logic Error: free list points at an occupied slot"),
        };
        *slot = Slot::Occupied(node);
        idx
    }

    /// Vacates an already unlinked slot and returns its value.
    fn release(&mut self, idx: I) -> V {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = idx;
        match mem::replace(&mut self.slots[idx.as_usize()], vacant) {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("Logic Error: released a vacant slot"),
        }
    }
}

// --- 5. Trait Implementations ---

impl<V, I: IndexType> Default for LongMap<V, I> {
    fn default() -> Self {
        Self::with_index_buckets(DEFAULT_BUCKETS)
    }
}

// Prints like a std map: {16: "a", 33: "b"}
impl<V: Debug, I: IndexType> Debug for LongMap<V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same pairs, whatever their bucket counts.
impl<V: PartialEq, I: IndexType> PartialEq for LongMap<V, I> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<V: Eq, I: IndexType> Eq for LongMap<V, I> {}

/// Allows read access using `map[key]`.
///
/// # Panics
/// Panics if the key is not present in the map.
impl<V, I: IndexType> Index<i64> for LongMap<V, I> {
    type Output = V;

    fn index(&self, key: i64) -> &Self::Output {
        self.get(key).expect("no entry found for key")
    }
}

/// Allows mutable access using `map[key] = new_value`.
///
/// # Panics
/// Panics if the key is not present in the map.
impl<V, I: IndexType> IndexMut<i64> for LongMap<V, I> {
    fn index_mut(&mut self, key: i64) -> &mut Self::Output {
        self.get_mut(key).expect("no entry found for key")
    }
}

impl<V, I: IndexType> FromIterator<(i64, V)> for LongMap<V, I> {
    fn from_iter<T: IntoIterator<Item = (i64, V)>>(iter: T) -> Self {
        let mut map = LongMap::default();
        map.extend(iter);
        map
    }
}

impl<V, I: IndexType> Extend<(i64, V)> for LongMap<V, I> {
    fn extend<T: IntoIterator<Item = (i64, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

// --- 6. Iterator Support ---

/// Borrowing iterator over `(key, &value)` pairs. See [`LongMap::iter`].
pub struct Iter<'a, V, I: IndexType = usize> {
    map: &'a LongMap<V, I>,
    bucket: usize,
    cursor: I,
    remaining: usize,
}

impl<'a, V, I: IndexType> Iterator for Iter<'a, V, I> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        while self.cursor.is_none() {
            let head = *map.heads.get(self.bucket)?;
            self.cursor = head;
            self.bucket += 1;
        }
        let node = map.node(self.cursor);
        self.cursor = node.next;
        self.remaining -= 1;
        Some((node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, I: IndexType> ExactSizeIterator for Iter<'_, V, I> {}
impl<V, I: IndexType> FusedIterator for Iter<'_, V, I> {}

/// Iterator over the keys of a [`LongMap`].
pub struct Keys<'a, V, I: IndexType = usize> {
    inner: Iter<'a, V, I>,
}

impl<V, I: IndexType> Iterator for Keys<'_, V, I> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, I: IndexType> ExactSizeIterator for Keys<'_, V, I> {}
impl<V, I: IndexType> FusedIterator for Keys<'_, V, I> {}

/// Iterator over the values of a [`LongMap`].
pub struct Values<'a, V, I: IndexType = usize> {
    inner: Iter<'a, V, I>,
}

impl<'a, V, I: IndexType> Iterator for Values<'a, V, I> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, I: IndexType> ExactSizeIterator for Values<'_, V, I> {}
impl<V, I: IndexType> FusedIterator for Values<'_, V, I> {}

impl<'a, V, I: IndexType> IntoIterator for &'a LongMap<V, I> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// IntoIterator (Allows 'for (k, v) in map'), same order as `iter()`
impl<V, I: IndexType> IntoIterator for LongMap<V, I> {
    type Item = (i64, V);
    type IntoIter = IntoIter<V, I>;

    fn into_iter(self) -> Self::IntoIter {
        let slots = self
            .slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Occupied(node) => Some(node),
                Slot::Vacant { .. } => None,
            })
            .collect();

        IntoIter {
            heads: self.heads.into_vec().into_iter(),
            slots,
            cursor: I::NONE,
            remaining: self.len,
        }
    }
}

/// Owning iterator over the pairs of a [`LongMap`].
pub struct IntoIter<V, I: IndexType = usize> {
    heads: std::vec::IntoIter<I>,
    slots: Vec<Option<Node<V, I>>>,
    cursor: I,
    remaining: usize,
}

impl<V, I: IndexType> Iterator for IntoIter<V, I> {
    type Item = (i64, V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor.is_none() {
            self.cursor = self.heads.next()?;
        }
        let node = match self.slots[self.cursor.as_usize()].take() {
            Some(node) => node,
            None => unreachable!("Logic Error: chain link points at a vacant slot"),
        };
        self.cursor = node.next;
        self.remaining -= 1;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, I: IndexType> ExactSizeIterator for IntoIter<V, I> {}
impl<V, I: IndexType> FusedIterator for IntoIter<V, I> {}

// --- 7. Test Suite ---

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    // --- Basic Operations ---
    #[test]
    fn test_basic_operations() {
        let mut map: LongMap<&str> = LongMap::new();

        assert!(map.is_empty());
        assert_eq!(map.bucket_count(), 16);

        map.put(16, "a");
        assert_eq!(map.len(), 1);
        map.put(33, "b");
        assert_eq!(map.size(), 2);

        assert_eq!(map.get(16), Some(&"a"));
        assert_eq!(map.get(33), Some(&"b"));
        assert_eq!(map.get(99), None);

        assert_eq!(map.remove(16), Some("a"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(16), None);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_distinct_keys_counted() {
        let mut map = LongMap::with_buckets(buckets(5));
        for key in -50..50 {
            map.put(key, key * 2);
        }
        assert_eq!(map.len(), 100);
        for key in -50..50 {
            assert_eq!(map.get(key), Some(&(key * 2)));
        }
    }

    // --- Update In Place ---
    #[test]
    fn test_overwrite_keeps_len() {
        let mut map = LongMap::new();
        map.put(16, "test-data");
        map.put(222222, "test_data");
        assert_eq!(map.len(), 2);

        map.put(222222, "updated_data");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(222222), Some(&"updated_data"));
    }

    #[test]
    fn test_overwrite_inside_chain() {
        // Single bucket: every key shares one chain.
        let mut map = LongMap::with_buckets(buckets(1));
        map.put(1, 10);
        map.put(2, 20);
        map.put(3, 30);

        // Head, middle and tail updates must not append duplicates.
        map.put(1, 11);
        map.put(2, 21);
        map.put(3, 31);

        assert_eq!(map.len(), 3);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![11, 21, 31]);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut map = LongMap::new();
        assert_eq!(map.insert(5, "x"), None);
        assert_eq!(map.insert(5, "y"), Some("x"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_put_returns_stored_value() {
        let mut map = LongMap::new();
        assert_eq!(*map.put(3, 30), 30);
        *map.put(3, 1) += 1;
        assert_eq!(map.get(3), Some(&2));
    }

    // --- Collisions ---
    #[test]
    fn test_collisions_two_buckets() {
        let mut map = LongMap::with_buckets(buckets(2));
        map.put(16, "test-data");
        map.put(33, "test_1");
        map.put(3, "test_2");
        map.put(15, "test_3");
        assert_eq!(map.len(), 4);

        assert_eq!(map.get(33), Some(&"test_1"));
        assert_eq!(map.get(3), Some(&"test_2"));
        assert_eq!(map.get(15), Some(&"test_3"));

        assert_eq!(map.remove(15), Some("test_3"));
        assert_eq!(map.len(), 3);
        assert_eq!(map.chain_lengths().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut map = LongMap::with_buckets(buckets(2));
        for key in [1, 3, 5, 7] {
            map.put(key, key);
        }

        assert_eq!(map.remove(3), Some(3)); // middle
        assert_eq!(map.remove(7), Some(7)); // tail
        assert_eq!(map.remove(1), Some(1)); // head
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![5]);
        assert_eq!(map.len(), 1);

        assert_eq!(map.remove(5), Some(5));
        assert!(map.is_empty());
        assert_eq!(map.chain_lengths().sum::<usize>(), 0);
    }

    #[test]
    fn test_remove_missing_key() {
        let mut map = LongMap::new();
        map.put(12, "test");
        assert_eq!(map.remove(123), None);
        // Same bucket as 12, not present.
        assert_eq!(map.remove(28), None);
        assert_eq!(map.len(), 1);
    }

    // --- Edge Keys ---
    #[test]
    fn test_extreme_keys() {
        let mut map = LongMap::with_buckets(buckets(16));
        for key in [i64::MIN, i64::MAX, -1, 0, 1, -17] {
            map.put(key, key);
        }
        assert_eq!(map.len(), 6);
        for key in [i64::MIN, i64::MAX, -1, 0, 1, -17] {
            assert_eq!(map.get(key), Some(&key));
        }

        assert_eq!(map.index_of(i64::MIN), 0);
        assert_eq!(map.index_of(i64::MAX), 15);
        assert_eq!(map.index_of(-1), map.index_of(1));
        assert_eq!(map.index_of(-17), 1);
    }

    #[test]
    fn test_index_of_non_power_of_two() {
        let map: LongMap<()> = LongMap::with_buckets(buckets(3));
        assert_eq!(map.index_of(-4), 1);
        assert_eq!(map.index_of(4), 1);
        // 2^63 mod 3
        assert_eq!(map.index_of(i64::MIN), 2);
    }

    // --- Existence Checks ---
    #[test]
    fn test_contains_key_and_value() {
        let mut map = LongMap::with_buckets(buckets(3));
        map.put(16, "test-data");
        map.put(111, "some data");

        assert!(map.contains_key(111));
        assert!(!map.contains_key(123));
        assert!(map.contains_value(&"some data"));
        assert!(!map.contains_value(&"dummyValue"));

        map.remove(111);
        assert!(!map.contains_key(111));
        assert!(!map.contains_value(&"some data"));
    }

    #[test]
    fn test_optional_values() {
        let mut map: LongMap<Option<&str>> = LongMap::new();
        map.put(1, None);
        map.put(2, Some("x"));

        assert_eq!(map.get(1), Some(&None));
        assert!(map.contains_value(&None));
        assert!(map.contains_value(&Some("x")));
        assert!(!map.contains_value(&Some("y")));
    }

    // --- Bulk Views ---
    #[test]
    fn test_keys_and_values_align() {
        let mut map = LongMap::new();
        for (key, value) in [(7, "d1"), (17, "d2"), (16, "td"), (-3, "neg")] {
            map.put(key, value);
        }

        let keys: Vec<i64> = map.keys().collect();
        let values: Vec<&&str> = map.values().collect();
        assert_eq!(keys.len(), map.len());
        assert_eq!(values.len(), map.len());
        for (k, v) in keys.iter().zip(values) {
            assert_eq!(map.get(*k), Some(v));
        }

        let mut sorted = keys;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![-3, 7, 16, 17]);
    }

    #[test]
    fn test_traversal_order() {
        let mut map = LongMap::new();
        map.put(2, 'c');
        map.put(1, 'a');
        map.put(17, 'b');

        // Bucket 1 holds [1, 17] in insertion order, bucket 2 holds [2].
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![1, 17, 2]);
        assert_eq!(map.values().collect::<String>(), "abc");
        assert_eq!(map.keys().len(), 3);
    }

    // --- Clear ---
    #[test]
    fn test_clear() {
        let mut map = LongMap::with_buckets(buckets(4));
        map.put(16, "test-data");
        map.put(5, "x");
        map.clear();

        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get(16), None);
        assert_eq!(map.get(5), None);
        assert_eq!(map.bucket_count(), 4);
        assert_eq!(map.keys().count(), 0);

        // Still usable afterwards
        map.put(5, "y");
        assert_eq!(map.get(5), Some(&"y"));
    }

    // --- Arena ---
    #[test]
    fn test_free_slots_are_reused() {
        let mut map = LongMap::new();
        map.put(1, 1);
        map.put(2, 2);
        map.put(3, 3);
        map.remove(2);
        map.remove(1);

        map.put(4, 4);
        map.put(5, 5);
        assert_eq!(map.slots.len(), 3);

        map.put(6, 6);
        assert_eq!(map.slots.len(), 4);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_compact_index_type() {
        let mut map: LongMap<u32, u16> = LongMap::with_index_buckets(buckets(4));
        for key in 0..1000 {
            map.put(key, key as u32);
        }
        assert_eq!(map.len(), 1000);
        assert_eq!(map.get(999), Some(&999));
        assert_eq!(map.remove(500), Some(500));
        assert!(!map.contains_key(500));
    }

    // --- Construction ---
    #[test]
    fn test_try_with_buckets() {
        assert_eq!(
            LongMap::<i32>::try_with_buckets(0).err(),
            Some(Error::ZeroBuckets)
        );
        let map = LongMap::<i32>::try_with_buckets(7).unwrap();
        assert_eq!(map.bucket_count(), 7);
        assert!(map.is_empty());

        let compact = LongMap::<i32, u32>::try_with_index_buckets(0);
        assert!(compact.is_err());
    }

    // --- Traits ---
    #[test]
    fn test_iterators_and_traits() {
        let map: LongMap<i32> = vec![(1, 10), (2, 20), (3, 30)].into_iter().collect();
        assert_eq!(map.len(), 3);

        let mut sum = 0;
        for (k, v) in &map {
            sum += k + *v as i64;
        }
        assert_eq!(sum, (1 + 10) + (2 + 20) + (3 + 30));

        let debug_str = format!("{:?}", map);
        assert_eq!(debug_str, "{1: 10, 2: 20, 3: 30}");

        let borrowed: Vec<(i64, i32)> = map.iter().map(|(k, v)| (k, *v)).collect();
        let owned: Vec<(i64, i32)> = map.into_iter().collect();
        assert_eq!(owned, borrowed);
    }

    #[test]
    fn test_into_iter_skips_vacant_slots() {
        let mut map = LongMap::with_buckets(buckets(2));
        for key in 0..6 {
            map.put(key, key.to_string());
        }
        map.remove(2);
        map.remove(3);

        let iter = map.into_iter();
        assert_eq!(iter.len(), 4);
        let keys: Vec<i64> = iter.map(|(k, _)| k).collect();
        assert_eq!(keys, vec![0, 4, 1, 5]);
    }

    #[test]
    fn test_extend() {
        let mut map = LongMap::new();
        map.put(1, "a");
        map.extend([(1, "b"), (2, "c")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map[1], "b");
    }

    #[test]
    fn test_equality_ignores_bucket_count() {
        let mut small = LongMap::with_buckets(buckets(2));
        let mut large = LongMap::with_buckets(buckets(64));
        for key in [5, -9, 100] {
            small.put(key, key);
        }
        for key in [100, 5, -9] {
            large.put(key, key);
        }
        assert_eq!(small, large);

        large.put(5, 0);
        assert_ne!(small, large);
    }

    #[test]
    fn test_map_clone() {
        let mut map = LongMap::new();
        map.put(1, "A".to_string());

        let mut clone = map.clone();
        clone.put(2, "B".to_string());

        // Verify independence
        assert_eq!(map.len(), 1);
        assert_eq!(clone.len(), 2);
        assert_eq!(clone.get(1), Some(&"A".to_string()));
    }

    #[test]
    fn test_index_assign() {
        let mut map = LongMap::new();
        map.put(7, 10);
        map[7] = 999;
        assert_eq!(map[7], 999);
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn test_index_panic_on_missing() {
        let map: LongMap<i32> = LongMap::new();
        let _val = map[999];
    }
}

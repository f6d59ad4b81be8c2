//! # Long Map
//!
//! A map keyed by `i64` for cases where keys are known to be plain integers.
//!
//! [`LongMap`] owns a **fixed** array of buckets chosen at construction
//! (16 by default). A key lands in bucket `|key mod bucket_count|` and
//! collisions form a singly linked chain inside that bucket. The map never
//! rehashes; pick a bucket count that matches the expected population.
//!
//! ## Key Features
//!
//! * **No key hashing:** the bucket index is the key's remainder, computed so
//!   that every `i64` (including `i64::MIN`) maps to a valid bucket.
//! * **Index-linked arena:** chain links are arena indices rather than boxed
//!   nodes. Removed slots go on a free list and are reused by later inserts.
//! * **Compact links:** the [`IndexType`] parameter (`usize` by default) can be
//!   narrowed to `u32` or `u16` for small maps.
//! * **Interoperability:** [`AnyLongMap`] abstracts over `LongMap`, std
//!   `HashMap<i64, V>` and `hashbrown::HashMap<i64, V>` ([`FnvLongHashMap`]).
//!
//! ## Examples
//!
//! ```rust
//! use long_map::LongMap;
//! use std::num::NonZeroUsize;
//!
//! // Two buckets: 33, 3 and 15 all share bucket 1.
//! let mut map = LongMap::with_buckets(NonZeroUsize::new(2).unwrap());
//! map.put(33, "a");
//! map.put(3, "b");
//! map.put(15, "c");
//!
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.get(3), Some(&"b"));
//!
//! // Re-putting a key updates it in place.
//! map.put(3, "B");
//! assert_eq!(map.len(), 3);
//!
//! assert_eq!(map.remove(33), Some("a"));
//! assert!(!map.contains_key(33));
//! assert!(map.contains_value(&"c"));
//!
//! let keys: Vec<i64> = map.keys().collect();
//! assert_eq!(keys, vec![3, 15]);
//! ```
//!
//! ### Backend-agnostic code
//!
//! ```rust
//! use long_map::{AnyLongMap, FnvLongHashMap, LongMap};
//!
//! fn tally(map: &mut dyn AnyLongMap<u32>, keys: &[i64]) {
//!     for &k in keys {
//!         let n = map.get(k).copied().unwrap_or(0);
//!         map.insert(k, n + 1);
//!     }
//! }
//!
//! let mut ours: LongMap<u32> = LongMap::new();
//! let mut theirs: FnvLongHashMap<u32> = FnvLongHashMap::default();
//! tally(&mut ours, &[1, -1, 1]);
//! tally(&mut theirs, &[1, -1, 1]);
//! assert_eq!(ours.get(1), theirs.get(&1));
//! ```

// --- Module Declarations ---

pub mod any_map;
pub mod error;
pub mod map;
mod utils;

// --- Re-exports ---

pub use any_map::{AnyLongMap, FnvLongHashMap};
pub use error::{Error, Result};
pub use map::{IntoIter, Iter, Keys, LongMap, Values, DEFAULT_BUCKETS};
pub use utils::index_type::IndexType;

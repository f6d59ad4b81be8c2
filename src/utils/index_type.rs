//! Link index types for the entry arena behind [`LongMap`](crate::LongMap).

use core::fmt::Debug;

/// An unsigned integer type used as a **singly-linked chain index**.
///
/// Bucket heads, `next` links and the free list store indices into the entry
/// arena instead of boxed pointers. A narrower type shrinks every link at the
/// price of a lower ceiling on how many entries the arena can address.
///
/// | Type    | Max entries        |
/// |---------|--------------------|
/// | `u16`   | 65 535             |
/// | `u32`   | 4 294 967 295      |
/// | `usize` | `usize::MAX`       |
pub trait IndexType: Copy + Eq + Debug + 'static {
    /// Sentinel value meaning "no entry": the end of a chain, an empty bucket
    /// or an exhausted free list.
    const NONE: Self;

    /// Converts this index to a `usize` for arena access.
    fn as_usize(self) -> usize;

    /// Converts an arena slot number to this compact type.
    ///
    /// # Panics
    /// Panics if `i` does not fit below [`NONE`](Self::NONE) (e.g. `>= 65535` for `u16`).
    fn from_usize(i: usize) -> Self;

    /// Returns `true` if this is the [`NONE`](Self::NONE) sentinel.
    #[inline(always)]
    fn is_none(self) -> bool {
        self == Self::NONE
    }
}

macro_rules! impl_index_type {
    ($($t:ty),*) => {$(
        impl IndexType for $t {
            const NONE: Self = <$t>::MAX;
            #[inline(always)]
            fn as_usize(self) -> usize {
                self as usize
            }
            #[inline(always)]
            fn from_usize(i: usize) -> Self {
                assert!(
                    i < Self::NONE as usize,
                    "LongMap entry arena outgrew its index type ({})",
                    stringify!($t)
                );
                i as $t
            }
        }
    )*};
}

impl_index_type!(u16, u32, usize);

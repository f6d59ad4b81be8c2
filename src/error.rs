//! Error types for the `long-map` crate.

/// Result alias for fallible `LongMap` construction.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while configuring a [`LongMap`](crate::LongMap).
///
/// Keyed operations never fail; a missing key is reported as `None`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested bucket count was zero.
    ///
    /// Every key is reduced modulo the bucket count, so a map needs at
    /// least one bucket.
    #[error("bucket count must be greater than zero")]
    ZeroBuckets,
}

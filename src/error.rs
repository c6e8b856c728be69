//! Error type shared by the fallible operations of this crate.

use thiserror::Error;

/// Errors surfaced by [`first`](crate::first()) and
/// [`Lookahead::peek`](crate::Lookahead::peek).
///
/// Every variant is an immediate, deterministic precondition failure (asking
/// for an element that doesn't exist); there is nothing transient to retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// [`first`](crate::first()) was called on an empty iterable and no
    /// default value was provided.
    #[error("empty iterable and no default value provided")]
    EmptyIterable,

    /// The underlying iterator has no more items.
    #[error("underlying iterator is exhausted")]
    Exhausted,
}

//! Iterator utilities: one-item lookahead, sorted k-way collation, fixed-size
//! chunking, and first-element helpers.
//!
//! This crate provides [`Collate`] and a builder API to lazily merge items from
//! many individually sorted iterators according to a comparator. By default it
//! performs a min-merge by [`Ord`], breaking ties by source order. It's
//! `no_std`, with `Vec`-requiring functions behind the `alloc` feature.
//!
//! # Quick start
//!
//! ```
//! # #[cfg(feature = "alloc")]
//! # {
//! use iter_collate::collate;
//!
//! let a = vec![1, 3, 5];
//! let b = vec![2, 4, 6];
//! let merged: Vec<_> = collate([a, b]).collect();
//! assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
//! # }
//! ```
//!
//! Only the next item of each source is ever considered, so the caller must
//! hand in sources that are already sorted. If they aren't, the result won't
//! be sorted either:
//!
//! ```
//! # #[cfg(feature = "alloc")]
//! # {
//! use iter_collate::collate;
//!
//! let merged: Vec<_> = collate([vec![2, 1, 5], vec![4, 3, 6]]).collect();
//! assert_eq!(merged, vec![2, 1, 4, 3, 5, 6]);
//! # }
//! ```
//!
//! # Custom comparator
//!
//! Use the builder to specify custom ordering (min/max by comparison function,
//! by key, or by [`Ord`]). Implement a custom
//! [`comparator`](crate::comparators::Comparator) for even more control.
//!
//! ```
//! # #[cfg(feature = "alloc")]
//! # {
//! use iter_collate::collate::Builder;
//!
//! // Collate sources sorted by descending absolute value
//! let res: Vec<_> = Builder::new([vec![-3_i32, -1], vec![2, -2]])
//!     .max_by_key(|&x: &i32| x.abs())
//!     .build()
//!     .collect();
//! assert_eq!(res, vec![-3, 2, -2, -1]);
//! # }
//! ```
//!
//! # Lookahead
//!
//! [`Lookahead`] wraps any iterator with a one-item peek cache; [`Collate`] is
//! built on top of it and exposes the same peeking surface as
//! [`iter::Peekable`](core::iter::Peekable):
//!
//! ```
//! # #[cfg(feature = "alloc")]
//! # {
//! use iter_collate::collate;
//!
//! let mut it = collate([vec![1, 1, 2], vec![1, 3]]);
//! assert_eq!(it.peek(), Some(&1));
//! // consume all 1s
//! while let Some(1) = it.next_if_eq(&1) {}
//! assert_eq!(it.next(), Some(2));
//! # }
//! ```
//!
//! # Chunking and first
//!
//! ```
//! # #[cfg(feature = "alloc")]
//! # {
//! use iter_collate::{chunked, first, first_or};
//!
//! let groups: Vec<_> = chunked([1, 2, 3, 4, 5, 6, 7], 3).collect();
//! assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
//!
//! assert_eq!(first([2, 3, 4]), Ok(2));
//! assert_eq!(first_or([], 'x'), 'x');
//! # }
//! ```
//!
//! # Crate Features
//! - `alloc`: Enables the heap-allocated adaptors [`Collate`] and [`Chunked`]
//!   and the `collate*`/`chunked` convenience functions
#![no_std]
#![cfg_attr(not(feature = "alloc"), allow(unused))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod comparators;
pub mod lookahead;

mod error;
mod first;

pub use error::Error;
pub use first::{first, first_or};
pub use lookahead::Lookahead;

#[cfg(feature = "alloc")]
pub mod chunked;
#[cfg(feature = "alloc")]
pub mod collate;

#[cfg(feature = "alloc")]
pub use chunked::{chunked, Chunked};
#[cfg(feature = "alloc")]
pub use collate::Collate;

#[cfg(feature = "alloc")]
mod convenience;
#[cfg(feature = "alloc")]
pub use convenience::*;

#[doc(hidden)]
#[cfg_attr(feature = "alloc", doc = include_str!("../README.md"))]
struct _ReadmeTest;

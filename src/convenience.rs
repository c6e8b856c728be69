#![allow(clippy::type_complexity)]
use core::cmp::Ordering;

use crate::{
    collate::{Builder, DefaultCollate},
    comparators::{ByFunc, ByKey, ByOrd, MaxFirst},
    Collate,
};

/// Constructs a new [`Collate`] with default parameters:
/// * Yields items according to their [`Ord`] implementation, smallest-first
/// * Equal items are yielded in order of their respective sources
///
/// Each source must already be sorted smallest-first.
pub fn collate<IT>(iters: IT) -> DefaultCollate<<IT::Item as IntoIterator>::IntoIter>
where
    IT: IntoIterator,
    IT::Item: IntoIterator,
    <IT::Item as IntoIterator>::Item: Ord,
{
    Builder::new(iters).build()
}

/// Constructs a new [`Collate`] with default parameters:
/// * Yields smallest items according to `func`
/// * Equal items are yielded in order of their respective sources
pub fn collate_by<IT, F>(
    iters: IT, func: F,
) -> Collate<<IT::Item as IntoIterator>::IntoIter, ByFunc<F>>
where
    IT: IntoIterator,
    IT::Item: IntoIterator,
    F: Fn(&<IT::Item as IntoIterator>::Item, &<IT::Item as IntoIterator>::Item) -> Ordering,
{
    Builder::new(iters).min_by_func(func).build()
}

/// Constructs a new [`Collate`] with default parameters:
/// * Yields items with the smallest key according to `func`
/// * Equal items are yielded in order of their respective sources
///
/// The key is used for comparison only; the original element is emitted.
pub fn collate_by_key<IT, F, K>(
    iters: IT, func: F,
) -> Collate<<IT::Item as IntoIterator>::IntoIter, ByKey<F>>
where
    IT: IntoIterator,
    IT::Item: IntoIterator,
    F: Fn(&<IT::Item as IntoIterator>::Item) -> K,
    K: Ord,
{
    Builder::new(iters).min_by_key(func).build()
}

/// Constructs a new [`Collate`] over sources sorted largest-first:
/// * Yields items according to their [`Ord`] implementation, largest-first
/// * Equal items are yielded in order of their respective sources
pub fn collate_rev<IT>(
    iters: IT,
) -> Collate<<IT::Item as IntoIterator>::IntoIter, MaxFirst<ByOrd>>
where
    IT: IntoIterator,
    IT::Item: IntoIterator,
    <IT::Item as IntoIterator>::Item: Ord,
{
    Builder::new(iters).max_by(ByOrd).build()
}

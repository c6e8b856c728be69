//! Implementation of [`Collate`]

use core::fmt;
use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::{comparators::Comparator, Lookahead};

mod builder;
pub use builder::{Builder, DefaultBuilder, DefaultCollate};

/// Iterator over the sorted collation of several sorted sources
///
/// Yields every element of every source exactly once, smallest head first
/// under the configured [`Comparator`]. Each `next()` scans the cached head
/// of every live source and consumes the minimal one, so no more than one
/// item per source is ever buffered. Sources are only ever read in order, so
/// equal items keep their per-source relative order, and ties between sources
/// go to the earliest one.
///
/// Construct via [`Builder`] or the [`collate`](crate::collate())
/// family of functions.
///
/// Invariant: every wrapper in `sources` has a cached head item; exhausted
/// sources are removed as soon as they are detected.
pub struct Collate<I: Iterator, CMP> {
    sources: Vec<Lookahead<I>>,
    cmp: CMP,
}

// Manual impls: derives would bound only `I` and `CMP`, missing the
// `I::Item: Debug`/`Clone` that the cached heads inside `Lookahead` require.
impl<I, CMP> fmt::Debug for Collate<I, CMP>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
    CMP: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collate")
            .field("sources", &self.sources)
            .field("cmp", &self.cmp)
            .finish()
    }
}

impl<I, CMP> Clone for Collate<I, CMP>
where
    I: Iterator + Clone,
    I::Item: Clone,
    CMP: Clone,
{
    fn clone(&self) -> Self {
        Self {
            sources: self.sources.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<I, CMP> Collate<I, CMP>
where
    I: Iterator,
    CMP: Comparator<I::Item>,
{
    fn new(iters: Vec<I>, cmp: CMP) -> Self {
        let mut sources: Vec<_> = iters.into_iter().map(Lookahead::new).collect();
        // Kill empties; caches the head of every survivor.
        sources.retain_mut(Lookahead::has_more);
        Self { sources, cmp }
    }

    /// Index of the source whose cached head would be yielded next.
    fn front(&self) -> Option<usize> {
        self.sources
            .iter()
            .enumerate()
            .filter_map(|(idx, src)| Some((idx, src.peeked()?)))
            // strictly-less keeps the earliest source on ties
            .reduce(|min, cur| {
                if self.cmp.compare(cur.1, min.1).is_lt() {
                    cur
                } else {
                    min
                }
            })
            .map(|(idx, _)| idx)
    }

    /// Returns a reference to the item that will be returned by `next()`
    /// without consuming it.
    ///
    /// This method behaves identically to [`Peekable::peek`] from the
    /// standard library: it returns a reference to the next item, or `None`
    /// if all sources are exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use iter_collate::collate;
    ///
    /// let mut merged = collate([vec![1, 3, 5], vec![2, 4, 6]]);
    ///
    /// assert_eq!(merged.peek(), Some(&1));
    /// assert_eq!(merged.next(), Some(1));
    /// assert_eq!(merged.peek(), Some(&2));
    /// ```
    ///
    /// [`Peekable::peek`]: core::iter::Peekable::peek
    #[inline]
    pub fn peek(&self) -> Option<&I::Item> {
        self.sources[self.front()?].peeked()
    }

    /// Returns the next item of the collation if it satisfies a predicate.
    ///
    /// This method behaves identically to [`Peekable::next_if`] from the
    /// standard library: it returns the next item if it satisfies the
    /// predicate, otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iter_collate::collate;
    ///
    /// let mut merged = collate([vec![1, 1, 2, 3], vec![1, 4, 5, 6]]);
    ///
    /// // Consume all 1s
    /// while let Some(item) = merged.next_if(|&x| x == 1) {
    ///     assert_eq!(item, 1);
    /// }
    ///
    /// assert_eq!(merged.next(), Some(2));
    /// ```
    ///
    /// [`Peekable::next_if`]: core::iter::Peekable::next_if
    pub fn next_if(&mut self, func: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        match self.peek() {
            Some(item) if func(item) => self.next(),
            _ => None,
        }
    }

    /// Returns the next item of the collation if it is equal to a given
    /// value.
    ///
    /// This method behaves identically to [`Peekable::next_if_eq`] from the
    /// standard library. It is a convenience method equivalent to
    /// `next_if(|item| item == expected)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iter_collate::collate;
    ///
    /// let mut merged = collate([vec![1, 1, 2, 3], vec![1, 4, 5, 6]]);
    ///
    /// // Consume all 1s
    /// while let Some(item) = merged.next_if_eq(&1) {
    ///     assert_eq!(item, 1);
    /// }
    ///
    /// assert_eq!(merged.next(), Some(2));
    /// ```
    ///
    /// [`Peekable::next_if_eq`]: core::iter::Peekable::next_if_eq
    pub fn next_if_eq<T>(&mut self, expected: &T) -> Option<I::Item>
    where
        T: ?Sized,
        I::Item: PartialEq<T>,
    {
        self.next_if(|item| item == expected)
    }
}

impl<I, CMP> Iterator for Collate<I, CMP>
where
    I: Iterator,
    CMP: Comparator<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let front = self.front()?;
        let item = self.sources[front].next();
        if !self.sources[front].has_more() {
            // Vec::remove, not swap_remove: source order breaks ties
            self.sources.remove(front);
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // the per-source hints already account for cached heads
        let mut min = 0_usize;
        let mut max = Some(0_usize);
        for src in &self.sources {
            let (src_min, src_max) = src.size_hint();
            min = min.saturating_add(src_min);
            max = match (max, src_max) {
                (Some(max), Some(src_max)) => max.checked_add(src_max),
                _ => None,
            };
        }
        (min, max)
    }
}

// Fused: sources are removed as they exhaust, and an empty live set stays
// empty.
impl<I, CMP> FusedIterator for Collate<I, CMP>
where
    I: Iterator,
    CMP: Comparator<I::Item>,
{
}

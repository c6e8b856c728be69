//! Implementation of [`Lookahead`]

use core::iter::FusedIterator;

use crate::Error;

/// Iterator adaptor that supports inspecting the next item without consuming
/// it.
///
/// Unlike [`iter::Peekable`](core::iter::Peekable), lookahead failures are
/// reported as [`Error::Exhausted`] rather than folded into an `Option`, and
/// the cached item is separately observable through [`peeked`](Self::peeked)
/// without a mutable borrow.
///
/// # Examples
///
/// ```
/// use iter_collate::{Error, Lookahead};
///
/// let mut it = Lookahead::new([0, 1]);
/// assert_eq!(it.peek(), Ok(&0));
/// assert_eq!(it.peek(), Ok(&0)); // idempotent
/// assert_eq!(it.next(), Some(0));
/// assert_eq!(it.peek(), Ok(&1));
/// assert_eq!(it.next(), Some(1));
/// assert_eq!(it.peek(), Err(Error::Exhausted));
/// ```
#[derive(Debug, Clone)]
pub struct Lookahead<I: Iterator> {
    iter: I,
    slot: Option<I::Item>,
}

impl<I: Iterator> Lookahead<I> {
    /// Wraps an iterable for one-item lookahead.
    ///
    /// No items are read until the first [`peek`](Self::peek),
    /// [`has_more`](Self::has_more) or `next` call.
    #[inline]
    pub fn new<T>(iterable: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: iterable.into_iter(),
            slot: None,
        }
    }

    /// Returns a reference to the item that the next `next()` call will
    /// return, without consuming it.
    ///
    /// Repeated calls with no intervening `next()` return the same value and
    /// read at most one item from the underlying iterator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] if there are no items left.
    ///
    /// # Examples
    ///
    /// ```
    /// use iter_collate::Lookahead;
    ///
    /// let mut it = Lookahead::new("AB".chars());
    /// assert_eq!(it.peek(), Ok(&'A'));
    /// assert_eq!(it.next(), Some('A'));
    /// assert_eq!(it.peek(), Ok(&'B'));
    /// ```
    #[inline]
    pub fn peek(&mut self) -> Result<&I::Item, Error> {
        if self.slot.is_none() {
            self.slot = self.iter.next();
        }
        self.slot.as_ref().ok_or(Error::Exhausted)
    }

    /// Returns the cached item, if any, without reading ahead.
    ///
    /// `None` means no item is currently cached; it does not mean the
    /// iterator is exhausted. Use [`peek`](Self::peek) to force a read-ahead.
    #[inline]
    pub fn peeked(&self) -> Option<&I::Item> {
        self.slot.as_ref()
    }

    /// Returns `true` iff a subsequent [`peek`](Self::peek) would succeed.
    ///
    /// May trigger the one-item read-ahead needed to answer, but never
    /// consumes anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use iter_collate::Lookahead;
    ///
    /// let mut it = Lookahead::new([1]);
    /// assert!(it.has_more());
    /// it.next();
    /// assert!(!it.has_more());
    /// ```
    #[inline]
    pub fn has_more(&mut self) -> bool {
        self.peek().is_ok()
    }
}

impl<I: Iterator> Iterator for Lookahead<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.slot.take() {
            Some(item) => Some(item),
            None => self.iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // this accounts for the cached item
        let cached = usize::from(self.slot.is_some());
        let (min, max) = self.iter.size_hint();
        (
            min.saturating_add(cached),
            max.and_then(|max| max.checked_add(cached)),
        )
    }
}

// Fused only when the inner iterator is: with an empty slot we re-query the
// source on every call, and a non-fused source may revive.
impl<I: FusedIterator> FusedIterator for Lookahead<I> {}

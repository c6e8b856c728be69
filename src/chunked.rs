//! Implementation of [`Chunked`]

use core::iter::FusedIterator;

use alloc::vec::Vec;

/// Breaks an iterable into groups of up to `size` consecutive elements.
///
/// If the length of the source is not evenly divisible by `size`, the last
/// group holds the 1..size remainder; groups are never padded. An empty
/// source yields no groups at all.
///
/// Useful for splitting a computation over a large number of keys into
/// batches to hand off to workers, or to keep per-request row counts bounded.
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// # Examples
///
/// ```
/// use iter_collate::chunked;
///
/// let groups: Vec<_> = chunked([1, 2, 3, 4, 5, 6, 7], 3).collect();
/// assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
/// ```
///
/// The source is consumed lazily, one group at a time, so unbounded sources
/// are fine:
///
/// ```
/// use iter_collate::chunked;
///
/// let mut groups = chunked(0.., 2);
/// assert_eq!(groups.next(), Some(vec![0, 1]));
/// assert_eq!(groups.next(), Some(vec![2, 3]));
/// ```
#[inline]
pub fn chunked<I: IntoIterator>(iterable: I, size: usize) -> Chunked<I::IntoIter> {
    assert!(size > 0, "chunk size must be positive");
    Chunked {
        iter: iterable.into_iter(),
        size,
    }
}

/// Iterator over fixed-size groups of another iterator's elements.
///
/// Created by [`chunked`]; see its documentation for details.
#[derive(Debug, Clone)]
pub struct Chunked<I: Iterator> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Iterator for Chunked<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // Counting the elements read for the current group directly; no
        // fill-value sentinel to strip from the tail.
        let mut group = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            match self.iter.next() {
                Some(item) => group.push(item),
                None => break,
            }
        }
        if group.is_empty() {
            None
        } else {
            Some(group)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (min, max) = self.iter.size_hint();
        (min.div_ceil(self.size), max.map(|max| max.div_ceil(self.size)))
    }
}

// Fused only when the inner iterator is: an empty group means the source
// returned None, and a fused source stays exhausted.
impl<I: FusedIterator> FusedIterator for Chunked<I> {}

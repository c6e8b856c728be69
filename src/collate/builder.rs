use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::{
    comparators::{ByFunc, ByKey, ByOrd, Comparator, MaxFirst},
    Collate,
};

/// [`Collate`] with the default comparator
pub type DefaultCollate<I> = Collate<I, ByOrd>;

/// [`Builder`] with the default comparator
pub type DefaultBuilder<I> = Builder<I, ByOrd>;

/// Builder for [`Collate`](crate::Collate)
///
/// Allows to configure how to compare the head items of the sources being
/// collated.
///
/// By default items are compared using [`Ord`], smallest item yielded first,
/// and if items are equal - the one from the earliest source is yielded
/// first.
#[derive(Debug)]
pub struct Builder<I, CMP> {
    iters: Vec<I>,
    comparator: CMP,
}

impl<I: Iterator> Builder<I, ByOrd> {
    /// Collects the sources to collate; comparison defaults to [`Ord`],
    /// smallest first.
    ///
    /// No items are read until [`build`](Self::build).
    pub fn new<IT>(iters: IT) -> Self
    where
        IT: IntoIterator,
        IT::Item: IntoIterator<IntoIter = I>,
    {
        Self {
            iters: iters.into_iter().map(IntoIterator::into_iter).collect(),
            comparator: ByOrd,
        }
    }
}

impl<I: Iterator, CMP> Builder<I, CMP> {
    /// Compare head items using comparator `cmp` and yield smallest item
    /// first
    #[inline]
    pub fn min_by<C: Comparator<I::Item>>(self, cmp: C) -> Builder<I, C> {
        Builder {
            iters: self.iters,
            comparator: cmp,
        }
    }

    /// Compare head items using comparator `cmp` and yield largest item first
    #[inline]
    pub fn max_by<C: Comparator<I::Item>>(self, cmp: C) -> Builder<I, MaxFirst<C>> {
        self.min_by(MaxFirst(cmp))
    }

    /// Compare head items using `func` and yield smallest item first
    #[inline]
    pub fn min_by_func<F>(self, func: F) -> Builder<I, ByFunc<F>>
    where
        F: Fn(&I::Item, &I::Item) -> Ordering,
    {
        self.min_by(ByFunc(func))
    }

    /// Compare head items using `func` and yield largest item first
    #[inline]
    pub fn max_by_func<F>(self, func: F) -> Builder<I, MaxFirst<ByFunc<F>>>
    where
        F: Fn(&I::Item, &I::Item) -> Ordering,
    {
        self.max_by(ByFunc(func))
    }

    /// Compare head items by comparing their keys produced by `func` and
    /// yield smallest item first
    ///
    /// The key is used for comparison only; the original element is emitted.
    #[inline]
    pub fn min_by_key<F, K>(self, func: F) -> Builder<I, ByKey<F>>
    where
        F: Fn(&I::Item) -> K,
        K: Ord,
    {
        self.min_by(ByKey(func))
    }

    /// Compare head items by comparing their keys produced by `func` and
    /// yield largest item first
    #[inline]
    pub fn max_by_key<F, K>(self, func: F) -> Builder<I, MaxFirst<ByKey<F>>>
    where
        F: Fn(&I::Item) -> K,
        K: Ord,
    {
        self.max_by(ByKey(func))
    }
}

impl<I, CMP> Builder<I, CMP>
where
    I: Iterator,
    CMP: Comparator<I::Item>,
{
    /// Builds the [`Collate`] using the specified comparator.
    ///
    /// Wraps every source for lookahead and drops the ones that are
    /// immediately empty.
    ///
    /// Getting a compiler error
    /// ```custom
    /// the method `build` exists for struct `Builder<...>`,
    /// but its trait bounds were not satisfied
    /// ```
    /// means that the item type does not implement [`Ord`].
    /// Either implement it for your type or specify another way to compare
    /// items by using the builder methods documented above.
    #[inline]
    pub fn build(self) -> Collate<I, CMP> {
        Collate::new(self.iters, self.comparator)
    }
}

//! Defines comparators for [`Collate`](crate::Collate)
//!
//! Users of this crate may implement the [`Comparator`] trait to create a
//! custom comparator or use [`ByOrd`] in builder functions
//! [`{min|max}_by`](crate::collate::Builder::min_by) to compare items using
//! the [`Ord`] trait.
//!
//! The rest of the structures here have no public constructors, they are
//! constructed by various [`Builder`](crate::collate::Builder) methods.

use core::cmp::Ordering;

/// Trait used to compare head elements of [`Collate`](crate::Collate) sources
///
/// Implementations should produce a consistent total ordering, see [`Ord`]
/// documentation for details.
///
/// Producing a non-total or inconsistent ordering may result in incorrect
/// behavior (i.e. items are yielded in a wrong order) but will not result
/// in UB.
pub trait Comparator<T>: Sized {
    /// Compares two elements and returns an [`Ordering`]
    fn compare<'a>(&self, a: &'a T, b: &'a T) -> Ordering;
}

impl<T, C> Comparator<T> for &C
where
    C: Comparator<T>,
{
    #[inline]
    fn compare<'a>(&self, a: &'a T, b: &'a T) -> Ordering {
        C::compare(self, a, b)
    }
}

/// Wrapper that reverses a comparator.
///
/// The collation loop is min-first, so to get max-first we're just inverting
/// the order of operands passed to comparators.
#[derive(Debug, Clone)]
pub struct MaxFirst<C>(pub(crate) C);

impl<C> MaxFirst<C> {
    #[inline]
    #[doc(hidden)]
    pub const fn new<T>(comparator: C) -> Self
    where
        C: Comparator<T>,
    {
        Self(comparator)
    }
}

impl<T, C> Comparator<T> for MaxFirst<C>
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Comparator that uses [`Ord`] to compare items, default for
/// [`Collate`](crate::Collate).
///
/// # Example
/// Max-first collation of descending sources:
///
/// ```
/// # #[cfg(feature = "alloc")]
/// # {
/// use iter_collate::{collate::Builder, comparators::ByOrd};
/// let res: Vec<_> = Builder::new([vec![3, 2], vec![4, 1]])
///     .max_by(ByOrd)
///     .build()
///     .collect();
/// assert_eq!(res, vec![4, 3, 2, 1]);
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByOrd;

impl<T: Ord> Comparator<T> for ByOrd {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Ord::cmp(a, b)
    }
}

/// Comparator that uses a function to compare items
///
/// Construct via [`{min|max}_by_func`](crate::collate::Builder::min_by_func)
#[derive(Debug, Clone)]
pub struct ByFunc<F>(pub(crate) F);

impl<T, F> Comparator<T> for ByFunc<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    // Leaving decision to inline this to the compiler because F can be long
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a, b)
    }
}

/// Comparator that uses a key to compare items
///
/// The key is used for comparison only; the emitted value is always the
/// original element. Construct via
/// [`{min|max}_by_key`](crate::collate::Builder::min_by_key)
#[derive(Debug, Clone)]
pub struct ByKey<F>(pub(crate) F);

impl<T, F, K> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    // Leaving decision to inline this to the compiler because F can be long
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a).cmp(&self.0(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparators() {
        let [a, b] = [1_i32, 2];
        assert!(Comparator::compare(&ByOrd, &a, &b).is_lt());
        assert!(Comparator::compare(&MaxFirst(ByOrd), &a, &b).is_gt());
        assert!(Comparator::compare(
            &ByFunc(|a: &i32, b: &i32| {
                assert!(*a == 1);
                assert!(*b == 2);
                Ordering::Equal
            }),
            &a,
            &b
        )
        .is_eq());
        assert!(Comparator::compare(
            &MaxFirst(ByFunc(|a: &i32, b: &i32| {
                assert!(*a == 2);
                assert!(*b == 1);
                Ordering::Equal
            })),
            &a,
            &b
        )
        .is_eq());

        assert!(Comparator::compare(
            &ByKey(|v: &i32| {
                assert!(*v == 1 || *v == 2);
                0
            }),
            &a,
            &b
        )
        .is_eq());
    }
}

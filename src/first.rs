use crate::Error;

/// Returns the first item of an iterable.
///
/// Less verbose than `iterable.into_iter().next()` and consumes at most one
/// item from the source. Passing `&mut iter` leaves the iterator advanced by
/// one position.
///
/// # Errors
///
/// Returns [`Error::EmptyIterable`] if there are no items. Use
/// [`first_or`] to fall back to a default value instead.
///
/// # Examples
///
/// ```
/// use iter_collate::{first, Error};
///
/// assert_eq!(first([2, 3, 4]), Ok(2));
/// assert_eq!(first::<[i32; 0]>([]), Err(Error::EmptyIterable));
/// ```
#[inline]
pub fn first<I: IntoIterator>(iterable: I) -> Result<I::Item, Error> {
    iterable.into_iter().next().ok_or(Error::EmptyIterable)
}

/// Returns the first item of an iterable, `default` if there is none.
///
/// # Examples
///
/// ```
/// use iter_collate::first_or;
///
/// assert_eq!(first_or([2, 3, 4], 0), 2);
/// assert_eq!(first_or([], "some default"), "some default");
/// ```
#[inline]
pub fn first_or<I: IntoIterator>(iterable: I, default: I::Item) -> I::Item {
    iterable.into_iter().next().unwrap_or(default)
}

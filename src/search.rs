// SPDX-License-Identifier: MPL-2.0

//! Binary search over sorted slices.

use core::cmp::Ordering;

use crate::compare::Compare;

/// Searches `slice`, which must be sorted under `order`, for an element equal to `key`.
///
/// Returns the index of a matching element, or `None` if there is none. If several elements
/// match, any one of them may be returned.
///
/// ```
/// use collections_kit::{compare::NaturalOrder, search::binary_search};
///
/// let primes = [2, 3, 5, 7, 11, 13];
/// assert_eq!(binary_search(&primes, &7, &NaturalOrder), Some(3));
/// assert_eq!(binary_search(&primes, &8, &NaturalOrder), None);
/// ```
pub fn binary_search<T, C: Compare<T>>(slice: &[T], key: &T, order: &C) -> Option<usize> {
    binary_search_by(slice, key, |element, key| order.compare(element, key))
}

/// Like [`binary_search`], with the order given as a comparison function.
///
/// `compare` is always called with an element of `slice` first and `key` second.
pub fn binary_search_by<T, F>(slice: &[T], key: &T, mut compare: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut lo, mut hi) = (0, slice.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match compare(&slice[mid], key) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}

// SPDX-License-Identifier: MPL-2.0

//! Pluggable total orders.
//!
//! Containers that keep their contents ordered take a [`Compare`] capability at construction
//! and hold on to it for their whole lifetime. [`NaturalOrder`] is the default and defers to the
//! element type's [`Ord`] implementation. Any closure or function with the signature
//! `Fn(&T, &T) -> Ordering` is a comparator as well.
//!
//! ```
//! use std::cmp::Ordering;
//! use collections_kit::compare::{Compare, NaturalOrder, Reversed};
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
//! assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
//! ```

use core::cmp::Ordering;

/// A total order over values of type `T`.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The ordering given by the element type's [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Compare<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the order of the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

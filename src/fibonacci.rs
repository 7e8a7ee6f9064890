// SPDX-License-Identifier: MPL-2.0

//! Arbitrary-precision Fibonacci sequences.

use num_bigint::BigUint;
use num_traits::One;

/// Errors propagated by methods in this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FibonacciError {
    /// Tried to generate a sequence with fewer than two terms.
    #[error("sequence length must be at least 2, got {0}")]
    LengthTooShort(usize),
}

/// Returns an iterator over the first `len` Fibonacci numbers, starting `1, 1, 2, 3, ...`.
///
/// Terms are computed lazily and never overflow.
///
/// ```
/// use collections_kit::fibonacci::fibonacci;
///
/// let terms: Vec<u32> = fibonacci(10)
///     .unwrap()
///     .map(|term| u32::try_from(term).unwrap())
///     .collect();
/// assert_eq!(terms, [1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
/// ```
pub fn fibonacci(len: usize) -> Result<Fibonacci, FibonacciError> {
    if len < 2 {
        return Err(FibonacciError::LengthTooShort(len));
    }

    Ok(Fibonacci {
        remaining: len,
        current: BigUint::one(),
        next: BigUint::one(),
    })
}

/// A single pass over a Fibonacci sequence, created by [`fibonacci`].
///
/// The iterator cannot be restarted or cloned. Call [`fibonacci`] again for a new pass.
#[derive(Debug)]
pub struct Fibonacci {
    remaining: usize,
    current: BigUint,
    next: BigUint,
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // The term after the last yielded one is never needed.
        let following = if self.remaining > 1 {
            &self.current + &self.next
        } else {
            BigUint::default()
        };
        let next = core::mem::replace(&mut self.next, following);
        Some(core::mem::replace(&mut self.current, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Fibonacci {}
impl core::iter::FusedIterator for Fibonacci {}

// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]

//! Generic in-memory collections.
//!
//! The two containers are independent of each other:
//!
//! - [`bst::BinarySearchTree`]: an append-only, unbalanced binary search tree ordered by a
//!   pluggable [`compare::Compare`] capability, with pre-order, in-order and post-order walks.
//! - [`queue::Queue`]: a FIFO queue over a growable circular buffer, with a fail-fast
//!   [`queue::Cursor`] that refuses to continue once the queue has been modified.
//!
//! A few unrelated helpers live alongside them: [`search`] for binary search over sorted slices,
//! [`fibonacci`] for arbitrary-precision Fibonacci sequences, and [`timer`] for broadcasting a
//! message to registered listeners.
//!
//! None of the types here synchronize internally. Share them across threads only behind
//! external synchronization.

pub mod bst;
pub mod compare;
pub mod fibonacci;
pub mod queue;
pub mod search;
pub mod timer;

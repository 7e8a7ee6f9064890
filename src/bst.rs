// SPDX-License-Identifier: MPL-2.0

//! An append-only, unbalanced binary search tree.
//!
//! ## Properties:
//! - Ordered: values are placed according to a [`Compare`] capability chosen at construction.
//!   For every node, the left subtree holds values strictly less than the node's value and the
//!   right subtree holds values greater than or equal to it.
//! - Right-biased ties: a value that compares equal to a node is always routed right, so equal
//!   values come out of an in-order walk in the order they were inserted.
//! - Append-only: the tree only grows, values can be inserted and traversed but never removed.
//! - Unbalanced: the shape is a function of insertion order alone. Sorted input produces a tree
//!   of height `n`.
//!
//! ## Creation
//! Use [`BinarySearchTree::new`] for the natural order of the element type, or
//! [`BinarySearchTree::with_comparator`] to supply any other [`Compare`] implementation,
//! including a plain closure.
//!
//! ## Traversal
//! [`BinarySearchTree::pre_order`], [`BinarySearchTree::in_order`] and
//! [`BinarySearchTree::post_order`] return lazy iterators over the stored values, or
//! [`BstError::Empty`] if nothing was ever inserted. Every call starts a fresh walk. The walks
//! keep an explicit stack instead of recursing, so degenerate trees of any height can be
//! traversed.
//!
//! Iterating the tree by reference is the in-order walk. Unlike [`BinarySearchTree::in_order`],
//! it yields nothing for an empty tree instead of failing.
//!
//! ## Example
//! This tree can be created with the following code:
//!
//! ```txt
//!             19
//!          /      \
//!        13        33
//!      /    \     /  \
//!     3     17   31   35
//!          /  \
//!        15    18
//! ```
//!
//! ```
//! use collections_kit::bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! tree.insert_all([19, 13, 3, 17, 15, 18, 33, 31, 35]);
//!
//! let pre_order: Vec<_> = tree.pre_order().unwrap().copied().collect();
//! assert_eq!(pre_order, [19, 13, 3, 17, 15, 18, 33, 31, 35]);
//!
//! let sorted: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(sorted, [3, 13, 15, 17, 18, 19, 31, 33, 35]);
//! ```

use core::cmp::Ordering;
use core::fmt::{self, Debug};
use core::iter::FusedIterator;

use crate::compare::{Compare, NaturalOrder};

/// Errors triggered by binary search tree operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BstError {
    /// Error when traversing a tree that has no root.
    #[error("there are no elements in the tree")]
    Empty,
}

type Link<T> = Option<Box<Node<T>>>;

/// Represents a node of a binary search tree.
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

/// Represents an append-only binary search tree ordered by `C`.
pub struct BinarySearchTree<T, C = NaturalOrder> {
    root: Link<T>,
    order: C,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree ordered by the natural order of `T`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Compare<T>> BinarySearchTree<T, C> {
    /// Creates an empty tree ordered by `order`.
    ///
    /// The comparator is kept for the lifetime of the tree.
    pub fn with_comparator(order: C) -> Self {
        Self {
            root: None,
            order,
            len: 0,
        }
    }

    /// Inserts the value into the tree.
    ///
    /// This function walks down from the root node, going left when `value` compares strictly
    /// less than the node's value and right otherwise, and attaches a new leaf at the first
    /// missing child. The tree is never rebalanced.
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match self.order.compare(&value, &node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::leaf(value));
        self.len += 1;
    }

    /// Inserts every value of `values`, in iteration order.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }

    /// Returns whether the tree holds a value that compares equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match self.order.compare(value, &node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }
}

impl<T, C> BinarySearchTree<T, C> {
    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing was ever inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of levels in the tree, or zero if it is empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level.iter().flat_map(|node| node.children()).collect();
        }

        height
    }

    /// Returns the comparator that orders the tree.
    pub fn comparator(&self) -> &C {
        &self.order
    }

    /// Visits each node before its left subtree, then its right subtree.
    pub fn pre_order(&self) -> Result<PreOrder<'_, T>, BstError> {
        let root = self.root.as_deref().ok_or(BstError::Empty)?;
        Ok(PreOrder {
            stack: vec![root],
            remaining: self.len,
        })
    }

    /// Visits the left subtree, then the node, then the right subtree.
    ///
    /// Values come out in ascending order, with equal values in insertion order.
    pub fn in_order(&self) -> Result<InOrder<'_, T>, BstError> {
        let root = self.root.as_deref().ok_or(BstError::Empty)?;
        Ok(InOrder::new(Some(root), self.len))
    }

    /// Visits both subtrees, left first, before the node itself.
    pub fn post_order(&self) -> Result<PostOrder<'_, T>, BstError> {
        let root = self.root.as_deref().ok_or(BstError::Empty)?;
        Ok(PostOrder {
            stack: vec![PostStep::Expand(root)],
            remaining: self.len,
        })
    }

    /// Walks the tree in order. Yields nothing if the tree is empty.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref(), self.len)
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.insert_all(iter);
        tree
    }
}

impl<T, C: Compare<T>> Extend<T> for BinarySearchTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug, C> Debug for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Boxed children would otherwise be dropped recursively, one stack frame per level.
impl<T, C> Drop for BinarySearchTree<T, C> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

#[cfg(feature = "test-util")]
impl<T: fmt::Display, C> fmt::Display for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Begin Tree ---")?;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            writeln!(f, "{:indent$}{}", "", node.value, indent = 2 * depth)?;
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
        }
        write!(f, "--- End Tree ---")
    }
}

/// Pre-order walk over a [`BinarySearchTree`].
///
/// The walk holds a shared borrow of the tree, so the tree cannot be modified until the iterator
/// is dropped. No runtime check against modification is made.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Clone for PreOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// In-order walk over a [`BinarySearchTree`].
///
/// The walk holds a shared borrow of the tree, so the tree cannot be modified until the iterator
/// is dropped. No runtime check against modification is made.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

enum PostStep<'a, T> {
    /// Children of this node have not been scheduled yet.
    Expand(&'a Node<T>),
    /// Both subtrees have been visited.
    Emit(&'a Node<T>),
}

impl<T> Clone for PostStep<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PostStep<'_, T> {}

/// Post-order walk over a [`BinarySearchTree`].
///
/// The walk holds a shared borrow of the tree, so the tree cannot be modified until the iterator
/// is dropped. No runtime check against modification is made.
pub struct PostOrder<'a, T> {
    stack: Vec<PostStep<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                PostStep::Emit(node) => {
                    self.remaining -= 1;
                    return Some(&node.value);
                }
                PostStep::Expand(node) => {
                    self.stack.push(PostStep::Emit(node));
                    self.stack.extend(node.right.as_deref().map(PostStep::Expand));
                    self.stack.extend(node.left.as_deref().map(PostStep::Expand));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Clone for PostOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> ExactSizeIterator for PreOrder<'_, T> {}
impl<T> ExactSizeIterator for InOrder<'_, T> {}
impl<T> ExactSizeIterator for PostOrder<'_, T> {}
impl<T> FusedIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}
impl<T> FusedIterator for PostOrder<'_, T> {}

impl<T> Debug for PreOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreOrder")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<T> Debug for InOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InOrder")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<T> Debug for PostOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostOrder")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

// SPDX-License-Identifier: MPL-2.0

//! A growable FIFO queue backed by a circular buffer.
//!
//! ## Layout
//! Elements live in a boxed slice of slots that is reused as a ring. `head` is the slot of the
//! oldest element and `tail` the slot just past the newest one; both wrap modulo the capacity.
//! The `count` logical elements occupy slots `(head + i) % capacity` for `i` in `0..count`, and
//! every other slot is empty so that no ownership is retained after a dequeue.
//!
//! ## Growth
//! When an enqueue finds the buffer full, the capacity doubles and the elements are copied to the
//! front of the new buffer in FIFO order. This is the only step whose cost depends on the queue
//! size; callers that need bounded latency per call should pre-size with
//! [`Queue::with_capacity`]. The buffer never shrinks.
//!
//! ## Fail-fast iteration
//! Every enqueue and dequeue bumps a version counter. A [`Cursor`] remembers the version it was
//! created at and refuses to step once the queue has changed structurally, returning
//! [`QueueError::Modified`]. Only structural changes are versioned: a value overwritten in place
//! through other means would not be noticed.
//!
//! [`Queue::iter`] borrows the queue instead, so the borrow checker already rules out
//! modification while it is alive.
//!
//! ```
//! use collections_kit::queue::{Queue, QueueError};
//!
//! let mut queue: Queue<u32> = [232, 43243, 324].into_iter().collect();
//! let mut cursor = queue.cursor();
//! assert_eq!(cursor.advance(&queue), Ok(Some(&232)));
//!
//! assert_eq!(queue.dequeue(), Ok(232));
//! assert_eq!(cursor.advance(&queue), Err(QueueError::Modified));
//! ```

use core::fmt::{self, Debug};
use core::iter::FusedIterator;

use tracing::debug;

/// Errors triggered by queue operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum QueueError {
    /// Error when creating a queue with room for no elements.
    #[error("capacity must be at least 1, got {0}")]
    CapacityOutOfRange(usize),
    /// Error when dequeuing from a queue with no elements.
    #[error("queue is empty")]
    Empty,
    /// Error when stepping a cursor after the queue was enqueued to or dequeued from.
    #[error("collection was modified; iteration may not continue")]
    Modified,
    /// Error when stepping a cursor over a queue other than the one that created it.
    #[error("cursor was created by a different queue")]
    ForeignQueue,
}

/// FIFO queue with amortized O(1) enqueue and dequeue.
#[derive(Clone)]
pub struct Queue<T> {
    buffer: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    count: usize,
    version: u64,
}

impl<T> Queue<T> {
    /// Capacity of a queue created without an explicit capacity.
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Factor the capacity is multiplied by each time the buffer fills up.
    const GROWTH_FACTOR: usize = 2;

    /// Creates an empty queue with [`Self::DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_slots(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty queue with room for `capacity` elements before it has to grow.
    ///
    /// # Errors
    /// Returns [`QueueError::CapacityOutOfRange`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, QueueError> {
        if capacity < 1 {
            return Err(QueueError::CapacityOutOfRange(capacity));
        }

        Ok(Self::with_slots(capacity))
    }

    fn with_slots(capacity: usize) -> Self {
        Self {
            buffer: empty_slots(capacity),
            head: 0,
            tail: 0,
            count: 0,
            version: 0,
        }
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of elements the queue can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Appends `item` at the back of the queue, growing the buffer if it is full.
    pub fn enqueue(&mut self, item: T) {
        if self.count == self.capacity() {
            self.grow(self.capacity() * Self::GROWTH_FACTOR);
        }

        self.buffer[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.capacity();
        self.count += 1;
        self.version = self.version.wrapping_add(1);
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if there is nothing to dequeue. The queue is left untouched.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.count == 0 {
            return Err(QueueError::Empty);
        }

        let item = self.buffer[self.head].take().ok_or(QueueError::Empty)?;
        self.head = (self.head + 1) % self.capacity();
        self.count -= 1;
        self.version = self.version.wrapping_add(1);
        Ok(item)
    }

    /// Returns the element at the front of the queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Starts a fail-fast pass over the queue. See [`Cursor`].
    pub fn cursor(&self) -> Cursor {
        Cursor {
            buffer: self.buffer_addr(),
            version: self.version,
            position: 0,
        }
    }

    /// Address of the slot buffer. Distinct live queues never share it, and it only changes on
    /// growth, which also bumps the version.
    fn buffer_addr(&self) -> usize {
        self.buffer.as_ptr() as usize
    }

    /// Iterates over the queue from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            front: 0,
            back: self.count,
        }
    }

    /// Returns the element `index` positions behind the front of the queue.
    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }

        self.buffer[(self.head + index) % self.capacity()].as_ref()
    }

    /// Moves the elements to the front of a buffer with `capacity` slots.
    ///
    /// The live range `head..head + count` may wrap past the end of the old buffer, in which case
    /// it is copied as two runs: `head..capacity`, then `0..tail`.
    fn grow(&mut self, capacity: usize) {
        debug!(
            from = self.capacity(),
            to = capacity,
            count = self.count,
            "growing queue buffer"
        );

        let first_run = self.count.min(self.capacity() - self.head);
        let second_run = self.count - first_run;

        let mut buffer = Vec::with_capacity(capacity);
        buffer.extend(
            self.buffer[self.head..self.head + first_run]
                .iter_mut()
                .map(Option::take),
        );
        buffer.extend(self.buffer[..second_run].iter_mut().map(Option::take));
        buffer.resize_with(capacity, || None);

        self.buffer = buffer.into_boxed_slice();
        self.head = 0;
        self.tail = self.count % capacity;
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Creates a queue with the default capacity and enqueues each item in order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Drains the queue in FIFO order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// A fail-fast position within a [`Queue`].
///
/// A cursor does not borrow the queue. It records the queue's version when it is created by
/// [`Queue::cursor`], and [`Cursor::advance`] checks that version before every step, even after
/// the last element has been returned. A cursor also records which queue created it and refuses
/// to step over any other queue, including a clone of its own.
/// It cannot be rewound; start a new pass with another call to [`Queue::cursor`].
#[derive(Clone, Debug)]
pub struct Cursor {
    buffer: usize,
    version: u64,
    position: usize,
}

impl Cursor {
    /// Returns the next element of `queue` in FIFO order, or `None` once all elements have been
    /// visited.
    ///
    /// # Errors
    /// Returns [`QueueError::Modified`] if `queue` was enqueued to or dequeued from since the
    /// cursor was created, and [`QueueError::ForeignQueue`] if `queue` did not create the cursor.
    pub fn advance<'a, T>(&mut self, queue: &'a Queue<T>) -> Result<Option<&'a T>, QueueError> {
        if queue.version != self.version {
            return Err(QueueError::Modified);
        }
        if queue.buffer_addr() != self.buffer {
            return Err(QueueError::ForeignQueue);
        }

        let item = queue.get(self.position);
        if item.is_some() {
            self.position += 1;
        }
        Ok(item)
    }
}

/// Borrowing iterator over a [`Queue`], from front to back.
pub struct Iter<'a, T> {
    queue: &'a Queue<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let item = self.queue.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        self.queue.get(self.back)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that dequeues every element of a [`Queue`].
pub struct IntoIter<T>(Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

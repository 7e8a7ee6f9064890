// SPDX-License-Identifier: MPL-2.0

use std::collections::VecDeque;

use assert_matches::assert_matches;
use collections_kit::queue::{Queue, QueueError};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn dequeue_returns_values_in_fifo_order() {
    let cases: [(&[i32], i32); 2] = [
        (&[232, 43243, 324, 3, 43, 2, 5, 3], 43243),
        (&[1, 43, 434, 34, 4234, 32, 565, 765, 5543], 43),
    ];
    for (values, expected) in cases {
        let mut queue: Queue<i32> = values.iter().copied().collect();
        queue.dequeue().unwrap();
        assert_eq!(queue.dequeue(), Ok(expected));
    }
}

#[test]
fn dequeue_from_empty_after_any_history() {
    let mut queue = Queue::with_capacity(3).unwrap();
    assert_matches!(queue.dequeue(), Err(QueueError::Empty));

    for round in 0..5 {
        queue.extend(0..round * 3);
        while queue.dequeue().is_ok() {}
        assert_matches!(queue.dequeue(), Err(QueueError::Empty));
        assert!(queue.is_empty());
    }
}

#[test]
fn zero_capacity_is_rejected() {
    let err = Queue::<String>::with_capacity(0).unwrap_err();
    assert_eq!(err, QueueError::CapacityOutOfRange(0));
    assert_eq!(err.to_string(), "capacity must be at least 1, got 0");
}

#[test]
fn cursor_detects_modification() {
    let mut queue: Queue<&str> = ["a", "b", "c"].into_iter().collect();

    let mut cursor = queue.cursor();
    assert_eq!(cursor.advance(&queue), Ok(Some(&"a")));
    queue.enqueue("d");
    assert_matches!(cursor.advance(&queue), Err(QueueError::Modified));

    let mut cursor = queue.cursor();
    queue.dequeue().unwrap();
    assert_matches!(cursor.advance(&queue), Err(QueueError::Modified));

    let mut cursor = queue.cursor();
    let mut seen = Vec::new();
    while let Some(item) = cursor.advance(&queue).unwrap() {
        seen.push(*item);
    }
    assert_eq!(seen, ["b", "c", "d"]);
}

#[test]
fn cursor_is_tied_to_its_queue() {
    let mut queue: Queue<u8> = Queue::new();
    let mut twin: Queue<u8> = Queue::new();
    for value in 0..6 {
        queue.enqueue(value);
        twin.enqueue(value + 100);
    }

    // Same history, so the same version, but a different queue.
    let mut cursor = queue.cursor();
    assert_matches!(cursor.advance(&twin), Err(QueueError::ForeignQueue));
    assert_matches!(
        cursor.advance(&queue.clone()),
        Err(QueueError::ForeignQueue)
    );
    assert!(std::iter::from_fn(|| cursor.advance(&queue).unwrap()).eq(queue.iter()));

    let err = twin.cursor().advance(&queue).unwrap_err();
    assert_eq!(err.to_string(), "cursor was created by a different queue");
}

#[test]
fn growth_preserves_order_across_wraps() {
    let mut queue = Queue::with_capacity(1).unwrap();
    let mut next = 0u32;
    let mut expected_front = 0u32;

    // Alternate bursts of enqueues and dequeues so the live range wraps before each resize.
    for burst in 1..12 {
        for _ in 0..burst * 2 {
            queue.enqueue(next);
            next += 1;
        }
        for _ in 0..burst {
            assert_eq!(queue.dequeue(), Ok(expected_front));
            expected_front += 1;
        }
        assert!(queue.iter().copied().eq(expected_front..next));
    }

    assert!(queue.into_iter().eq(expected_front..next));
}

#[test]
fn matches_vec_deque() {
    let mut rng = StdRng::seed_from_u64(0xf1f0);
    let mut queue = Queue::with_capacity(2).unwrap();
    let mut model = VecDeque::new();

    for step in 0..10_000u32 {
        if rng.random_bool(0.55) {
            queue.enqueue(step);
            model.push_back(step);
        } else {
            assert_eq!(queue.dequeue().ok(), model.pop_front(), "step {step}");
        }

        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.peek(), model.front());
        if step % 97 == 0 {
            assert!(queue.iter().eq(model.iter()), "step {step}");
        }
    }
}

#[test]
fn capacity_only_grows() {
    let mut queue = Queue::new();
    let mut capacity = queue.capacity();
    for value in 0..100 {
        queue.enqueue(value);
        assert!(queue.capacity() >= capacity);
        capacity = queue.capacity();
        if value % 3 == 0 {
            queue.dequeue().unwrap();
        }
        assert_eq!(queue.capacity(), capacity);
    }
    assert!(capacity.is_power_of_two());
}

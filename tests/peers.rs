// SPDX-License-Identifier: MPL-2.0

use std::{cell::RefCell, cmp::Ordering, rc::Rc, time::Duration};

use assert_matches::assert_matches;
use collections_kit::{
    compare::NaturalOrder,
    fibonacci::{fibonacci, FibonacciError},
    search::{binary_search, binary_search_by},
    timer::{TimerError, TimerManager},
};
use num_bigint::BigUint;

#[test]
fn search_sorted_integers() {
    let cases: [(&[i32], i32, Option<usize>); 3] = [
        (&[1, 2, 3, 4, 5, 6, 7, 8, 9], 4, Some(3)),
        (&[10, 140, 208, 329, 428, 512, 690, 770, 800], 428, Some(4)),
        (&[10, 140, 208, 329, 428, 512, 690, 770, 800], 1000, None),
    ];
    for (slice, key, expected) in cases {
        assert_eq!(binary_search(slice, &key, &NaturalOrder), expected);
    }
}

#[test]
fn search_with_comparison_function() {
    fn ordinal(a: &&str, b: &&str) -> Ordering {
        a.cmp(b)
    }

    let words = ["AAA", "BdA", "CrT", "Zrt"];
    assert_eq!(binary_search(&words, &"CrT", &ordinal), Some(2));
    assert_eq!(binary_search_by(&words, &"BdA", ordinal), Some(1));
    assert_eq!(binary_search_by(&words, &"bda", ordinal), None);
}

#[test]
fn fibonacci_terms() {
    let terms: Vec<BigUint> = fibonacci(15).unwrap().collect();
    let expected: Vec<BigUint> = [1u32, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610]
        .into_iter()
        .map(BigUint::from)
        .collect();
    assert_eq!(terms, expected);

    assert_matches!(fibonacci(1), Err(FibonacciError::LengthTooShort(1)));
}

#[test]
fn fibonacci_recurrence_holds() {
    let terms: Vec<BigUint> = fibonacci(300).unwrap().collect();
    assert_eq!(terms.len(), 300);
    for window in terms.windows(3) {
        assert_eq!(&window[0] + &window[1], window[2]);
    }
}

#[test]
fn timer_broadcasts_until_unregistered() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let mut timer = TimerManager::new();

    let ids: Vec<_> = ["first", "second", "third"]
        .into_iter()
        .map(|name| {
            let received = Rc::clone(&received);
            timer.register(move |event| {
                received
                    .borrow_mut()
                    .push((name, event.message().to_owned()));
            })
        })
        .collect();

    timer.notify("one", Duration::from_millis(1)).unwrap();
    assert!(timer.unregister(ids[1]));
    timer.notify("two", Duration::ZERO).unwrap();
    assert_matches!(
        timer.notify("", Duration::ZERO),
        Err(TimerError::BlankMessage)
    );

    let received = received.borrow();
    let names: Vec<&str> = received.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["first", "second", "third", "first", "third"]);
    assert!(received[..3].iter().all(|(_, message)| message == "one"));
    assert!(received[3..].iter().all(|(_, message)| message == "two"));
}

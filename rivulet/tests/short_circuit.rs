//! Short-circuiting terminals settle the moment one element determines the
//! answer; the rest of the upstream is abandoned, not drained.

use std::cell::Cell;
use std::rc::Rc;

use rivulet::operators::*;
use rivulet::Stream;

#[test]
fn any_match_stops_at_the_first_witness() {
    let checked = Rc::new(Cell::new(0));
    let counter = Rc::clone(&checked);
    let hit = Stream::of([1, 2, 3, 4, 5, 6])
        .any_match(move |n| {
            counter.set(counter.get() + 1);
            *n > 3
        })
        .unwrap();
    assert!(hit);
    assert_eq!(checked.get(), 4);
}

#[test]
fn all_match_stops_at_the_first_counterexample() {
    let checked = Rc::new(Cell::new(0));
    let counter = Rc::clone(&checked);
    let hit = Stream::of([1, 2, 0, 4, 5])
        .all_match(move |n| {
            counter.set(counter.get() + 1);
            *n > 0
        })
        .unwrap();
    assert!(!hit);
    assert_eq!(checked.get(), 3);
}

#[test]
fn none_match_stops_at_the_first_witness() {
    let checked = Rc::new(Cell::new(0));
    let counter = Rc::clone(&checked);
    let hit = Stream::of([1, 2, 9, 4])
        .none_match(move |n| {
            counter.set(counter.get() + 1);
            *n > 8
        })
        .unwrap();
    assert!(!hit);
    assert_eq!(checked.get(), 3);
}

#[test]
fn undecided_predicates_drain_the_whole_stream() {
    assert!(Stream::of([1, 2, 3, 4]).all_match(|n| *n > 0).unwrap());
    assert!(!Stream::of([1, 2, 3, 4]).any_match(|n| *n > 9).unwrap());
    assert!(Stream::of([1, 2, 3, 4]).none_match(|n| *n > 9).unwrap());
}

#[test]
fn find_any_returns_the_first_match() {
    let hit = Stream::of([1, 2, 3, 4]).find_any(|n| *n % 2 == 0).unwrap();
    assert_eq!(hit, Some(2));
}

#[test]
fn find_any_reports_nothing_found() {
    let hit = Stream::of([1, 3, 5]).find_any(|n| *n % 2 == 0).unwrap();
    assert_eq!(hit, None);
}

#[test]
fn a_short_circuit_ends_an_infinite_source() {
    let mut next = 0;
    let hit = Stream::generate(move || {
        next += 1;
        next
    })
    .any_match(|n| *n == 20)
    .unwrap();
    assert!(hit);
}

#[test]
fn empty_streams_settle_by_their_defaults() {
    assert!(Stream::<i64>::empty().all_match(|_| false).unwrap());
    assert!(!Stream::<i64>::empty().any_match(|_| true).unwrap());
    assert!(Stream::<i64>::empty().none_match(|_| true).unwrap());
    assert_eq!(Stream::<i64>::empty().find_any(|_| true).unwrap(), None);
}

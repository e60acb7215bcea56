//! Exhaustive terminals observe every element and own the final result;
//! "nothing seen yet" is always distinct from a zero-like value.

use std::collections::{HashMap, HashSet};

use rivulet::operators::*;
use rivulet::Stream;

#[test]
fn count_tallies_what_reaches_the_tail() {
    let over_five = Stream::of([1, 10, 100, 1000]).filter(|n| *n > 5).count().unwrap();
    assert_eq!(over_five, 3);
    assert_eq!(Stream::<i64>::empty().count().unwrap(), 0);
}

#[test]
fn reduce_combines_pairwise() {
    let product = Stream::of([2, 3, 4]).reduce(|a, b| a * b).unwrap();
    assert_eq!(product, Some(24));
}

#[test]
fn reduce_of_nothing_is_no_result() {
    let nothing = Stream::<i64>::empty().reduce(|a, b| a + b).unwrap();
    assert_eq!(nothing, None);
}

#[test]
fn fold_starts_from_the_seed() {
    let product = Stream::range(1, 4).unwrap().fold(5, |a, b| a * b).unwrap();
    assert_eq!(product, 120);
    assert_eq!(Stream::<i64>::empty().fold(7, |a, b| a + b).unwrap(), 7);
}

#[test]
fn min_and_max_track_the_comparator() {
    let least = Stream::of([3, 1, 4, 1, 5]).min_by(|a, b| a.cmp(b)).unwrap();
    assert_eq!(least, Some(1));
    let greatest = Stream::of([3, 1, 4, 1, 5]).max_by(|a, b| a.cmp(b)).unwrap();
    assert_eq!(greatest, Some(5));
    assert_eq!(Stream::<i64>::empty().min_by(|a, b| a.cmp(b)).unwrap(), None);
}

#[test]
fn min_and_max_keep_the_first_of_equals() {
    let pairs = [(1, "early"), (1, "late"), (3, "top"), (3, "later")];
    let least = Stream::of(pairs).min_by(|a, b| a.0.cmp(&b.0)).unwrap();
    assert_eq!(least, Some((1, "early")));
    let greatest = Stream::of(pairs).max_by(|a, b| a.0.cmp(&b.0)).unwrap();
    assert_eq!(greatest, Some((3, "top")));
}

#[test]
fn average_is_the_arithmetic_mean() {
    let mean = Stream::range(0, 100).unwrap().average().unwrap();
    assert_eq!(mean, Some(50.0));
}

#[test]
fn average_of_nothing_is_no_result() {
    let mean = Stream::range(1, 5).unwrap().filter(|_| false).average().unwrap();
    assert_eq!(mean, None);
}

#[test]
fn sum_follows_reduce_semantics() {
    assert_eq!(Stream::range(1, 4).unwrap().sum().unwrap(), Some(10));
    assert_eq!(Stream::<i64>::empty().sum().unwrap(), None);
}

#[test]
fn range_round_trips_through_a_list() {
    let range = Stream::range(1, 5).unwrap().collect(to_list()).unwrap();
    assert_eq!(range, vec![1, 2, 3, 4, 5]);
}

#[test]
fn range_step_lands_on_every_increment() {
    let stepped = Stream::range_step(0, 10, 3).unwrap().collect(to_list()).unwrap();
    assert_eq!(stepped, vec![0, 3, 6, 9]);
}

#[test]
fn set_collection_deduplicates() {
    let set = Stream::of([1, 2, 2, 3]).collect(to_set()).unwrap();
    assert_eq!(set, HashSet::from([1, 2, 3]));
}

#[test]
fn map_collection_keeps_the_last_write_per_key() {
    let index = Stream::of([("a", 1), ("b", 2), ("a", 3)])
        .collect(to_map(|pair: &(&str, i32)| pair.0, |pair| pair.1))
        .unwrap();
    assert_eq!(index, HashMap::from([("a", 3), ("b", 2)]));
}

#[test]
fn map_collection_applies_both_functions() {
    let index = Stream::of(["a", "b", "c", "d", "e"])
        .filter(|s| *s != "e")
        .collect(to_map(|s: &&str| *s, |s| s.as_bytes()[0]))
        .unwrap();
    assert_eq!(index.len(), 4);
    assert_eq!(index["a"], b'a');
    assert_eq!(index["d"], b'd');
}

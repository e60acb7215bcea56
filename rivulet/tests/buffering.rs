//! Buffering operations accumulate the whole upstream, materialize, and
//! splice the result back into the live chain; downstream of the splice the
//! chain behaves exactly as if a finite source had always been there.

use rivulet::operators::*;
use rivulet::Stream;

#[test]
fn sorted_reorders_the_whole_sequence() {
    let ordered = Stream::of([3, 1, 2]).sorted().collect(to_list()).unwrap();
    assert_eq!(ordered, vec![1, 2, 3]);
}

#[test]
fn sorted_by_is_stable_for_equal_keys() {
    let ranked = Stream::of([(2, "first"), (1, "a"), (2, "second"), (1, "b"), (2, "third")])
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .collect(to_list())
        .unwrap();
    assert_eq!(
        ranked,
        vec![(1, "a"), (1, "b"), (2, "first"), (2, "second"), (2, "third")]
    );
}

#[test]
fn distinct_keeps_first_occurrences_in_order() {
    let unique = Stream::of([1, 2, 2, 3, 1]).distinct().collect(to_list()).unwrap();
    assert_eq!(unique, vec![1, 2, 3]);
}

#[test]
fn concat_appends_after_the_streamed_elements() {
    let unique = Stream::of([1, 2, 3, 4])
        .concat([3, 4, 5])
        .distinct()
        .collect(to_list())
        .unwrap();
    assert_eq!(unique, vec![1, 2, 3, 4, 5]);
}

#[test]
fn flat_map_expands_one_level_in_input_order() {
    let flat = Stream::of([vec![2, 5], vec![4, 6], vec![3, 7]])
        .flat_map(|pair| pair)
        .collect(to_list())
        .unwrap();
    assert_eq!(flat, vec![2, 5, 4, 6, 3, 7]);
}

#[test]
fn flat_map_tolerates_empty_expansions() {
    let flat = Stream::of([vec![1], vec![], vec![2, 3], vec![]])
        .flat_map(|group| group)
        .collect(to_list())
        .unwrap();
    assert_eq!(flat, vec![1, 2, 3]);
}

#[test]
fn streaming_operations_apply_downstream_of_a_splice() {
    let top = Stream::of([3, 0, 1, 6, 4, 0, 8, 9, 7])
        .filter(|n| *n != 0)
        .sorted()
        .limit(3)
        .map(|n| n * 10)
        .collect(to_list())
        .unwrap();
    assert_eq!(top, vec![10, 30, 40]);
}

#[test]
fn a_cut_reaches_a_buffering_node_downstream() {
    // The limit cuts the generator after four pulls; the sort only then
    // materializes what made it through.
    let mut countdown = 10;
    let ordered = Stream::generate(move || {
        countdown -= 1;
        countdown
    })
    .limit(4)
    .sorted()
    .collect(to_list())
    .unwrap();
    assert_eq!(ordered, vec![6, 7, 8, 9]);
}

#[test]
fn buffering_stages_chain_through_repeated_splices() {
    let result = Stream::of([5, 3, 5, 1, 3])
        .sorted()
        .distinct()
        .concat([0])
        .collect(to_list())
        .unwrap();
    assert_eq!(result, vec![1, 3, 5, 0]);
}

#[test]
fn empty_streams_survive_every_buffering_stage() {
    let result = Stream::<i64>::empty()
        .sorted()
        .distinct()
        .flat_map(|n| vec![n])
        .collect(to_list())
        .unwrap();
    assert!(result.is_empty());
}

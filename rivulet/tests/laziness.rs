//! A generator source has no end of its own: the only thing that stops it
//! is a cut downstream, and that cut must arrive before a single element
//! too many is pulled.

use std::cell::Cell;
use std::rc::Rc;

use rivulet::operators::*;
use rivulet::Stream;

fn counted_generator(calls: &Rc<Cell<usize>>) -> Stream<usize> {
    let counter = Rc::clone(calls);
    Stream::generate(move || {
        counter.set(counter.get() + 1);
        counter.get()
    })
}

#[test]
fn limit_pulls_the_generator_exactly_k_times() {
    let calls = Rc::new(Cell::new(0));
    let taken = counted_generator(&calls).limit(3).collect(to_list()).unwrap();
    assert_eq!(taken, vec![1, 2, 3]);
    assert_eq!(calls.get(), 3);
}

#[test]
fn limit_zero_never_invokes_the_generator() {
    let calls = Rc::new(Cell::new(0));
    let taken = counted_generator(&calls).limit(0).collect(to_list()).unwrap();
    assert!(taken.is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn stacked_limits_pull_the_tighter_count() {
    let calls = Rc::new(Cell::new(0));
    let taken = counted_generator(&calls)
        .limit(5)
        .limit(3)
        .collect(to_list())
        .unwrap();
    assert_eq!(taken.len(), 3);
    assert_eq!(calls.get(), 3);

    let calls = Rc::new(Cell::new(0));
    let taken = counted_generator(&calls)
        .limit(3)
        .limit(5)
        .collect(to_list())
        .unwrap();
    assert_eq!(taken.len(), 3);
    assert_eq!(calls.get(), 3);
}

#[test]
fn intermediate_work_happens_per_pull_not_up_front() {
    let calls = Rc::new(Cell::new(0));
    let mapped = Rc::new(Cell::new(0));
    let mapped_in = Rc::clone(&mapped);
    let taken = counted_generator(&calls)
        .map(move |n| {
            mapped_in.set(mapped_in.get() + 1);
            n * n
        })
        .limit(4)
        .collect(to_list())
        .unwrap();
    assert_eq!(taken, vec![1, 4, 9, 16]);
    assert_eq!(calls.get(), 4);
    assert_eq!(mapped.get(), 4);
}

//! A registry subscriber observes the life of a chain: its topology when
//! the run starts, each splice a buffering node performs, and the shutdown
//! of every node the run retires.

use std::cell::RefCell;
use std::rc::Rc;

use rivulet::logging::{PipelineEvent, PIPELINE_LOG};
use rivulet::operators::*;
use rivulet::Stream;

fn subscribe<T: 'static>(stream: &Stream<T>) -> Rc<RefCell<Vec<PipelineEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    stream
        .log_register()
        .insert::<PipelineEvent, _>(PIPELINE_LOG, move |_time, batch| {
            sink.borrow_mut().extend(batch.drain(..).map(|(_, _, event)| event));
        });
    seen
}

#[test]
fn a_run_reports_its_topology_in_pull_order() {
    let mut stream = Stream::of([3, 1, 2]).filter(|n| *n > 1).map(|n| n * 10);
    let seen = subscribe(&stream);
    stream.count().unwrap();

    let names: Vec<String> = seen
        .borrow()
        .iter()
        .filter_map(|event| match event {
            PipelineEvent::Operates(op) => Some(op.name.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["Items", "Filter", "Map", "Count"]);
}

#[test]
fn a_buffering_node_reports_its_splice() {
    let mut stream = Stream::of([3, 1, 3, 2]).sorted();
    let seen = subscribe(&stream);
    stream.collect(to_list()).unwrap();

    let splices: Vec<usize> = seen
        .borrow()
        .iter()
        .filter_map(|event| match event {
            PipelineEvent::Splice(splice) => Some(splice.length),
            _ => None,
        })
        .collect();
    assert_eq!(splices, vec![4]);
}

#[test]
fn every_participating_node_shuts_down() {
    let mut stream = Stream::of([1, 2, 3]).map(|n| n + 1);
    let seen = subscribe(&stream);
    stream.count().unwrap();

    let shutdowns = seen
        .borrow()
        .iter()
        .filter(|event| matches!(event, PipelineEvent::Shutdown(_)))
        .count();
    // Source, map, and terminal all retire.
    assert_eq!(shutdowns, 3);
}

#[test]
fn a_short_circuit_retires_only_the_terminal() {
    let mut stream = Stream::of([1, 2, 3]);
    let seen = subscribe(&stream);
    assert!(stream.any_match(|n| *n == 1).unwrap());

    let shutdowns = seen
        .borrow()
        .iter()
        .filter(|event| matches!(event, PipelineEvent::Shutdown(_)))
        .count();
    // The source was never exhausted; only the terminal retired.
    assert_eq!(shutdowns, 1);
}

#[test]
fn unsubscribed_runs_log_nothing() {
    // No registry insertion: the run proceeds without a logger.
    assert_eq!(Stream::of([1, 2, 3]).count().unwrap(), 3);
}

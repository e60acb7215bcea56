//! Operation nodes and the closed set of behavior families.

use std::any::Any;
use std::cmp::Ordering;
use std::mem;

use crate::chain::sink::{Sink, Verdict};
use crate::chain::source::Source;
use crate::chain::NodeId;

/// A type-erased element moving between nodes.
///
/// The typed `Stream` surface erases on the way in and downcasts on the way
/// out, so adjacent nodes agree on the payload type by construction.
pub(crate) type Elem = Box<dyn Any>;

/// Recovers the typed payload at a family boundary.
pub(crate) fn unwrap_elem<T: 'static>(elem: Elem) -> T {
    *elem
        .downcast::<T>()
        .unwrap_or_else(|_| panic!("chain links operations over one element type"))
}

/// Borrows the typed payload without taking it out of the chain.
pub(crate) fn peek_elem<T: 'static>(elem: &Elem) -> &T {
    elem.downcast_ref::<T>()
        .expect("chain links operations over one element type")
}

/// One operation in a chain: a behavior, a forward link, a completion flag.
pub(crate) struct Node {
    pub kind: NodeKind,
    /// Link to the successor; `None` only at the tail.
    pub next: Option<NodeId>,
    /// Once set, the node is never invoked again.
    pub done: bool,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node { kind, next: None, done: false }
    }

    /// Display name, used for event logging and chain rendering.
    pub fn name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Source(source) => source.name(),
            NodeKind::Streaming(op) => op.name(),
            NodeKind::Buffering(op) => op.name(),
            NodeKind::Terminal(op) => op.name(),
        }
    }
}

/// The four operation families.
pub(crate) enum NodeKind {
    Source(Source),
    Streaming(Streaming),
    Buffering(BufferingOp),
    Terminal(TerminalOp),
}

/// Outcome of handing one element to a streaming operation.
pub(crate) enum Step {
    /// Forward the element.
    Emit(Elem),
    /// Drop the element and keep the chain alive.
    Discard,
    /// Forward the element, then cut the chain at this node.
    EmitLast(Elem),
    /// Drop the element and cut the chain at this node.
    Cut,
}

/// Element-at-a-time operations: no buffering, at most one output per input.
pub(crate) enum Streaming {
    Filter { predicate: Box<dyn FnMut(&Elem) -> bool> },
    Map { logic: Box<dyn FnMut(Elem) -> Elem> },
    Limit { remaining: usize },
    Skip { remaining: usize },
}

impl Streaming {
    /// Processes one element.
    pub fn apply(&mut self, elem: Elem) -> Step {
        match self {
            Streaming::Filter { predicate } => {
                if predicate(&elem) {
                    Step::Emit(elem)
                } else {
                    Step::Discard
                }
            }
            Streaming::Map { logic } => Step::Emit(logic(elem)),
            Streaming::Limit { remaining } => {
                if *remaining == 0 {
                    // Unreachable after a pre-run cut; kept as a hard stop.
                    Step::Cut
                } else {
                    *remaining -= 1;
                    if *remaining == 0 {
                        Step::EmitLast(elem)
                    } else {
                        Step::Emit(elem)
                    }
                }
            }
            Streaming::Skip { remaining } => {
                if *remaining > 0 {
                    *remaining -= 1;
                    Step::Discard
                } else {
                    Step::Emit(elem)
                }
            }
        }
    }

    /// True when the operation can forward nothing at all, before any
    /// element has flowed (`limit(0)`).
    pub fn spent_on_arrival(&self) -> bool {
        matches!(self, Streaming::Limit { remaining: 0 })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Streaming::Filter { .. } => "Filter",
            Streaming::Map { .. } => "Map",
            Streaming::Limit { .. } => "Limit",
            Streaming::Skip { .. } => "Skip",
        }
    }
}

/// Whole-sequence operations: accumulate everything upstream produces, then
/// materialize a replacement sequence in one go.
pub(crate) struct BufferingOp {
    buffer: Vec<Elem>,
    policy: Policy,
}

/// Materialization policies for buffering operations.
pub(crate) enum Policy {
    /// Stable comparator order.
    Sort { comparator: Box<dyn FnMut(&Elem, &Elem) -> Ordering> },
    /// Full-value deduplication, first occurrences kept.
    Distinct { dedup: Box<dyn FnMut(Vec<Elem>) -> Vec<Elem>> },
    /// The accumulated sequence, then the extras.
    Concat { extra: Vec<Elem> },
    /// One-level expansion of each input, in input order.
    Flatten { unpack: Box<dyn FnMut(Elem) -> Vec<Elem>> },
}

impl BufferingOp {
    pub fn new(policy: Policy) -> Self {
        BufferingOp { buffer: Vec::new(), policy }
    }

    /// Accepts one upstream element.
    pub fn accept(&mut self, elem: Elem) {
        match &mut self.policy {
            // Expansion can happen on arrival; output order is unchanged.
            Policy::Flatten { unpack } => {
                let unpacked = unpack(elem);
                self.buffer.extend(unpacked);
            }
            _ => self.buffer.push(elem),
        }
    }

    /// Materializes the accumulated sequence under the policy.
    pub fn materialize(&mut self) -> Vec<Elem> {
        let mut items = mem::take(&mut self.buffer);
        match &mut self.policy {
            Policy::Sort { comparator } => items.sort_by(|a, b| comparator(a, b)),
            Policy::Distinct { dedup } => items = dedup(items),
            Policy::Concat { extra } => items.append(extra),
            Policy::Flatten { .. } => {}
        }
        items
    }

    pub fn name(&self) -> &'static str {
        match self.policy {
            Policy::Sort { .. } => "Sorted",
            Policy::Distinct { .. } => "Distinct",
            Policy::Concat { .. } => "Concat",
            Policy::Flatten { .. } => "FlatMap",
        }
    }
}

/// The chain tail: owns the run's result until it is read out.
pub(crate) struct TerminalOp {
    name: &'static str,
    sink: Box<dyn Sink>,
}

impl TerminalOp {
    pub fn new(name: &'static str, sink: Box<dyn Sink>) -> Self {
        TerminalOp { name, sink }
    }

    /// Observes one element.
    pub fn absorb(&mut self, elem: Elem) -> Verdict {
        self.sink.absorb(elem)
    }

    /// Reads the result out; valid exactly once, after the run.
    pub fn settle(&mut self) -> Elem {
        self.sink.settle()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

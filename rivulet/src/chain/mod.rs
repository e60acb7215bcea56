//! The operation chain: an index-addressed arena of nodes with an explicit
//! head, walked forward one element at a time.
//!
//! Elements always flow forward; completion flows forward too, as an
//! explicit [`Tick`] result handed back to the driver rather than a callback
//! cascade. When completion reaches a buffering node, the node materializes
//! its accumulation and a fresh source is spliced in right behind it, at
//! which point the splice becomes the chain's new head.

pub(crate) mod node;
pub(crate) mod sink;
pub(crate) mod source;

use std::fmt;

use itertools::Itertools;

use crate::chain::node::{Elem, Node, NodeKind, Step};
use crate::chain::sink::Verdict;
use crate::chain::source::Source;
use crate::logging::{PipelineLogger, ShutdownEvent, SpliceEvent};

/// Index of a node within its chain's arena.
pub(crate) type NodeId = usize;

/// Outcome of one driver tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tick {
    /// The head supplied an element and it flowed as far as it goes.
    Produced,
    /// The chain drained; the terminal saw everything it will ever see.
    Exhausted,
    /// A short-circuiting terminal settled its result early.
    Terminated,
}

pub(crate) struct Chain {
    nodes: Vec<Node>,
    /// The node currently being pulled; moves forward across splices.
    head: NodeId,
    logger: Option<PipelineLogger>,
}

impl Chain {
    pub fn with_source(source: Source) -> Self {
        Chain {
            nodes: vec![Node::new(NodeKind::Source(source))],
            head: 0,
            logger: None,
        }
    }

    /// Appends a node at the current tail and returns its index.
    pub fn append(&mut self, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(kind));
        let mut at = self.head;
        while let Some(next) = self.nodes[at].next {
            at = next;
        }
        self.nodes[at].next = Some(id);
        id
    }

    pub fn set_logger(&mut self, logger: Option<PipelineLogger>) {
        self.logger = logger;
    }

    /// Nodes in pull order, head first.
    pub fn topology(&self) -> impl Iterator<Item = (NodeId, &'static str)> + '_ {
        let mut at = Some(self.head);
        std::iter::from_fn(move || {
            let id = at?;
            at = self.nodes[id].next;
            Some((id, self.nodes[id].name()))
        })
    }

    /// Pulls the head once and routes the outcome through the chain.
    pub fn tick(&mut self) -> Tick {
        let head = self.head;
        debug_assert!(!self.nodes[head].done, "finished nodes are never re-pulled");
        let next = self.nodes[head].next;
        let supplied = match &mut self.nodes[head].kind {
            NodeKind::Source(src) => src.supply(),
            _ => unreachable!("the chain head is always a source"),
        };
        match supplied {
            Some(elem) => self.forward(next, elem),
            None => {
                self.retire(head);
                self.propagate_done(next)
            }
        }
    }

    /// Finds a streaming node that can forward nothing before any element
    /// has flowed (`limit(0)`), retires it, and returns the link to cut
    /// from. Must run before the first tick so such a node truncates the
    /// chain without a single upstream pull.
    pub fn pre_run_cut(&mut self) -> Option<Option<NodeId>> {
        let mut at = Some(self.head);
        while let Some(id) = at {
            let next = self.nodes[id].next;
            let spent = match &self.nodes[id].kind {
                NodeKind::Streaming(op) => op.spent_on_arrival(),
                _ => false,
            };
            if spent {
                self.retire(id);
                return Some(next);
            }
            at = next;
        }
        None
    }

    /// Walks one element forward from `at` until it is absorbed or dropped.
    ///
    /// A node that forwards its final element (`EmitLast`) leaves a pending
    /// cut: the element still travels the rest of the chain, and only then
    /// does completion propagate from the cutting node's successor.
    fn forward(&mut self, start: Option<NodeId>, elem: Elem) -> Tick {
        let mut at = start;
        let mut elem = elem;
        let mut cut: Option<Option<NodeId>> = None;
        'walk: while let Some(id) = at {
            let next = self.nodes[id].next;
            match &mut self.nodes[id].kind {
                NodeKind::Source(_) => unreachable!("sources never receive elements"),
                NodeKind::Streaming(op) => {
                    let step = op.apply(elem);
                    match step {
                        Step::Emit(out) => {
                            elem = out;
                            at = next;
                        }
                        Step::EmitLast(out) => {
                            self.retire(id);
                            if cut.is_none() {
                                cut = Some(next);
                            }
                            elem = out;
                            at = next;
                        }
                        Step::Discard => break 'walk,
                        Step::Cut => {
                            self.retire(id);
                            if cut.is_none() {
                                cut = Some(next);
                            }
                            break 'walk;
                        }
                    }
                }
                NodeKind::Buffering(op) => {
                    op.accept(elem);
                    break 'walk;
                }
                NodeKind::Terminal(op) => {
                    let verdict = op.absorb(elem);
                    match verdict {
                        Verdict::Continue => break 'walk,
                        Verdict::Settled => {
                            self.retire(id);
                            return Tick::Terminated;
                        }
                    }
                }
            }
        }
        match cut {
            Some(from) => self.propagate_done(from),
            None => Tick::Produced,
        }
    }

    /// Carries upstream exhaustion forward from `at`: streaming nodes pass
    /// it along, a buffering node materializes and splices, the terminal
    /// ends the run. Sources never observe completion; the driver simply
    /// stops pulling whatever sits upstream of a cut.
    pub fn propagate_done(&mut self, at: Option<NodeId>) -> Tick {
        let mut at = at;
        while let Some(id) = at {
            let next = self.nodes[id].next;
            if self.nodes[id].done {
                // Already finished (e.g. a second cut on the same element);
                // the signal just moves past it.
                at = next;
                continue;
            }
            match &mut self.nodes[id].kind {
                NodeKind::Source(_) => unreachable!("sources have no upstream"),
                NodeKind::Streaming(_) => {
                    self.retire(id);
                    at = next;
                }
                NodeKind::Buffering(op) => {
                    let items = op.materialize();
                    self.retire(id);
                    let spliced = self.splice_after(id, items);
                    self.head = spliced;
                    return Tick::Produced;
                }
                NodeKind::Terminal(_) => {
                    self.retire(id);
                    return Tick::Exhausted;
                }
            }
        }
        unreachable!("completion always reaches the terminal")
    }

    /// Reads the terminal's result out; valid exactly once, after the run.
    pub fn settle_terminal(&mut self, id: NodeId) -> Elem {
        match &mut self.nodes[id].kind {
            NodeKind::Terminal(op) => op.settle(),
            _ => unreachable!("the chain tail is always a terminal"),
        }
    }

    /// Installs a fresh source over `items` immediately after `after`,
    /// inheriting its link. The buffering node keeps a link to the spliced
    /// source, so the arena stays fully connected.
    fn splice_after(&mut self, after: NodeId, items: Vec<Elem>) -> NodeId {
        let id = self.nodes.len();
        if let Some(logger) = &self.logger {
            logger.log(SpliceEvent { node: after, source: id, length: items.len() });
        }
        let mut node = Node::new(NodeKind::Source(Source::items(items)));
        node.next = self.nodes[after].next;
        self.nodes.push(node);
        self.nodes[after].next = Some(id);
        id
    }

    /// Marks a node finished; it will never be invoked again.
    fn retire(&mut self, id: NodeId) {
        debug_assert!(!self.nodes[id].done, "nodes finish at most once");
        self.nodes[id].done = true;
        if let Some(logger) = &self.logger {
            logger.log(ShutdownEvent { id });
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chain [{}]", self.topology().map(|(_, name)| name).join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::node::{BufferingOp, NodeKind, Policy, TerminalOp};
    use super::sink::Reducer;
    use super::source::Source;
    use super::{Chain, Tick};
    use crate::chain::node::{peek_elem, Elem};

    fn boxed(values: &[i64]) -> Vec<Elem> {
        values.iter().map(|v| Box::new(*v) as Elem).collect()
    }

    fn list_terminal() -> NodeKind {
        NodeKind::Terminal(TerminalOp::new(
            "ToList",
            Box::new(Reducer::new(
                Vec::new(),
                |mut list: Vec<i64>, item: i64| {
                    list.push(item);
                    list
                },
                |list| list,
            )),
        ))
    }

    #[test]
    fn materialization_splices_a_new_head() {
        let mut chain = Chain::with_source(Source::items(boxed(&[3, 1, 2])));
        let sort = chain.append(NodeKind::Buffering(BufferingOp::new(Policy::Sort {
            comparator: Box::new(|a, b| peek_elem::<i64>(a).cmp(peek_elem::<i64>(b))),
        })));
        let terminal = chain.append(list_terminal());

        // Three elements buffer up, then exhaustion reaches the sort, which
        // splices a materialized source in as the new head.
        for _ in 0..3 {
            assert_eq!(chain.tick(), Tick::Produced);
        }
        assert_eq!(chain.head, 0);
        assert_eq!(chain.tick(), Tick::Produced);
        assert_eq!(chain.head, terminal + 1);
        assert!(chain.nodes[sort].done);
        assert_eq!(chain.nodes[sort].next, Some(chain.head));
        assert_eq!(chain.nodes[chain.head].next, Some(terminal));

        // The spliced source drains into the terminal in sorted order.
        let mut tick = Tick::Produced;
        while tick == Tick::Produced {
            tick = chain.tick();
        }
        assert_eq!(tick, Tick::Exhausted);
        let result = chain.settle_terminal(terminal);
        assert_eq!(*result.downcast::<Vec<i64>>().ok().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn chain_renders_in_pull_order() {
        let mut chain = Chain::with_source(Source::items(boxed(&[1])));
        chain.append(NodeKind::Buffering(BufferingOp::new(Policy::Concat { extra: boxed(&[2]) })));
        chain.append(list_terminal());
        assert_eq!(format!("{:?}", chain), "Chain [Items -> Concat -> ToList]");
    }
}

//! The chain driver: owns a chain, pulls its head until the terminal
//! completes, and hands the result out exactly once.

use std::cell::{RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::chain::node::{NodeKind, TerminalOp};
use crate::chain::sink::Sink;
use crate::chain::source::Source;
use crate::chain::{Chain, Tick};
use crate::error::Error;
use crate::logging::{ChainIdentifier, OperatesEvent, PipelineEvent, PIPELINE_LOG};
use crate::logging_core::Registry;

/// Allocates process-unique chain identifiers for event logging.
static CHAIN_IDENTIFIER: AtomicUsize = AtomicUsize::new(0);

/// Drives one chain through one run.
pub(crate) struct Worker {
    chain: Chain,
    /// Set by the first run; later runs are rejected.
    closed: bool,
    logging: Rc<RefCell<Registry<ChainIdentifier>>>,
}

impl Worker {
    pub fn with_source(source: Source) -> Self {
        let identifier = CHAIN_IDENTIFIER.fetch_add(1, Ordering::Relaxed);
        Worker {
            chain: Chain::with_source(source),
            closed: false,
            logging: Rc::new(RefCell::new(Registry::new(Instant::now(), identifier))),
        }
    }

    pub fn append(&mut self, kind: NodeKind) {
        self.chain.append(kind);
    }

    /// Provides access to the chain's logging registry.
    pub fn log_register(&self) -> RefMut<'_, Registry<ChainIdentifier>> {
        self.logging.borrow_mut()
    }

    /// Appends `sink` as the chain's terminal and pulls the head until the
    /// terminal completes, naturally or by short-circuit.
    pub fn run<R: 'static>(&mut self, name: &'static str, sink: Box<dyn Sink>) -> Result<R, Error> {
        if self.closed {
            return Err(Error::StreamClosed);
        }
        self.closed = true;

        let terminal = self
            .chain
            .append(NodeKind::Terminal(TerminalOp::new(name, sink)));

        // The chain is sealed once its terminal arrives: report the topology
        // to any subscriber, then keep the logger around for run events.
        let logger = self.logging.borrow().get::<PipelineEvent>(PIPELINE_LOG);
        if let Some(logger) = &logger {
            logger.log_many(
                self.chain
                    .topology()
                    .map(|(id, label)| OperatesEvent { id, name: label.to_owned() }),
            );
        }
        self.chain.set_logger(logger);

        // A node that starts out spent (limit of zero) truncates the chain
        // before the first pull, so the source is never invoked.
        let mut tick = match self.chain.pre_run_cut() {
            Some(from) => self.chain.propagate_done(from),
            None => Tick::Produced,
        };
        while tick == Tick::Produced {
            tick = self.chain.tick();
        }

        let result = self.chain.settle_terminal(terminal);
        self.chain.set_logger(None);
        if let Some(logger) = self.logging.borrow().get::<PipelineEvent>(PIPELINE_LOG) {
            logger.flush();
        }
        Ok(*result
            .downcast::<R>()
            .unwrap_or_else(|_| panic!("terminal result matches the requested type")))
    }
}

impl fmt::Debug for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.chain, f)?;
        if self.closed {
            f.write_str(" (closed)")?;
        }
        Ok(())
    }
}

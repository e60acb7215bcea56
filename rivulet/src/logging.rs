//! Traits, implementations, and types related to logging pipeline events.

use serde::{Deserialize, Serialize};

/// Type alias for identifying a chain within the process.
pub type ChainIdentifier = usize;

/// Logger type for chain-local logging.
pub type Logger<Event> = crate::logging_core::Logger<Event, ChainIdentifier>;

/// Logger for rivulet pipeline events.
pub type PipelineLogger = Logger<PipelineEvent>;

/// Name under which pipeline event subscriptions are registered.
pub const PIPELINE_LOG: &str = "rivulet";

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
/// The installation of an operation node in a chain, reported in pull order
/// when a run starts.
pub struct OperatesEvent {
    /// Chain-unique identifier for the node.
    pub id: usize,
    /// A helpful name.
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
/// A buffering node materialized its accumulation and a fresh source was
/// spliced into the chain behind it.
pub struct SpliceEvent {
    /// The buffering node that finished accumulating.
    pub node: usize,
    /// The source node spliced in behind it.
    pub source: usize,
    /// Number of materialized elements handed to the new source.
    pub length: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
/// Node completion: the node will never be invoked again.
pub struct ShutdownEvent {
    /// Identifier of the finished node.
    pub id: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
/// An event in the life of a chain.
pub enum PipelineEvent {
    /// Node installation.
    Operates(OperatesEvent),
    /// Materialize-and-splice by a buffering node.
    Splice(SpliceEvent),
    /// Node completion.
    Shutdown(ShutdownEvent),
}

impl From<OperatesEvent> for PipelineEvent {
    fn from(v: OperatesEvent) -> PipelineEvent { PipelineEvent::Operates(v) }
}

impl From<SpliceEvent> for PipelineEvent {
    fn from(v: SpliceEvent) -> PipelineEvent { PipelineEvent::Splice(v) }
}

impl From<ShutdownEvent> for PipelineEvent {
    fn from(v: ShutdownEvent) -> PipelineEvent { PipelineEvent::Shutdown(v) }
}

//! Data-dependency graph over a trace.
//!
//! Nodes live in an arena indexed by their trace position. Producer and consumer
//! relations are stored as ordered sets of `NodeId`s, so the graph owns every node
//! exactly once and there are no reference cycles. It provides:
//! 1. **Construction:** `DependencyGraph::build` wires edges through a scoped `RenameTable`.
//! 2. **Invariant checks:** Edge insertion rejects anything but earlier-to-later edges,
//!    which makes the graph acyclic by construction.
//! 3. **Run state:** Per-node lifecycle status, remaining latency and the memoized
//!    critical-path value, all restorable with `reset`.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, trace};

use crate::common::error::GraphError;
use crate::core::rename::RenameTable;
use crate::isa::Instruction;

/// Stable identifier of a node: its 0-based trace index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of a node during scheduling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NodeStatus {
    /// Not yet fetched.
    #[default]
    Waiting,
    /// In the issue window, waiting for an execution unit or a producer.
    Fetched,
    /// Occupying an execution unit.
    Executing,
    /// Retired. Terminal.
    Completed,
}

/// One instruction of the trace, as a graph vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionNode {
    /// Trace index.
    pub id: NodeId,
    /// Execution latency in cycles.
    pub latency: u32,
    /// Nodes whose results this node reads.
    pub producers: BTreeSet<NodeId>,
    /// Nodes that read this node's result.
    pub consumers: BTreeSet<NodeId>,
    /// Current lifecycle state.
    pub status: NodeStatus,
    /// Cycles of execution still owed.
    pub remaining_latency: u32,
    /// Memoized longest latency-weighted path starting at this node.
    pub best_path_from_here: Option<u64>,
}

impl InstructionNode {
    fn new(id: NodeId, latency: u32) -> Self {
        Self {
            id,
            latency,
            producers: BTreeSet::new(),
            consumers: BTreeSet::new(),
            status: NodeStatus::Waiting,
            remaining_latency: latency,
            best_path_from_here: None,
        }
    }

    /// Returns true if no other node feeds this one.
    pub fn is_source(&self) -> bool {
        self.producers.is_empty()
    }

    /// Returns true if no other node reads this one.
    pub fn is_sink(&self) -> bool {
        self.consumers.is_empty()
    }
}

/// Directed acyclic graph of register data dependencies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: Vec<InstructionNode>,
}

impl DependencyGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph for a trace, in trace order.
    ///
    /// Each instruction becomes a node; each source register whose latest writer is a
    /// previous instruction contributes one producer edge. The destination register is
    /// then renamed to the new node.
    ///
    /// # Arguments
    ///
    /// * `trace` - Instructions in program order.
    ///
    /// # Returns
    ///
    /// The dependency graph, or a structural error if an invariant was violated.
    pub fn build(trace: &[Instruction]) -> Result<Self, GraphError> {
        let mut graph = Self {
            nodes: Vec::with_capacity(trace.len()),
        };
        let mut renames = RenameTable::new();

        for inst in trace {
            let id = graph.push_node(inst.latency);
            for producer in renames.producers_of(inst.sources()) {
                graph.add_edge(producer, id)?;
            }
            renames.set_writer(inst.dest, id);
        }

        debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            sources = graph.sources().count(),
            "dependency graph built"
        );
        Ok(graph)
    }

    /// Appends a node with the given latency and returns its id.
    pub fn push_node(&mut self, latency: u32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(InstructionNode::new(id, latency));
        id
    }

    /// Adds the edge `producer -> consumer`.
    ///
    /// Inserting an edge that already exists is a no-op.
    ///
    /// # Errors
    ///
    /// `GraphError::UnknownNode` if either endpoint is not in the graph, and
    /// `GraphError::NotForward` unless `producer` precedes `consumer` in the trace.
    pub fn add_edge(&mut self, producer: NodeId, consumer: NodeId) -> Result<(), GraphError> {
        for end in [producer, consumer] {
            if end.0 >= self.nodes.len() {
                return Err(GraphError::UnknownNode(end));
            }
        }
        if producer >= consumer {
            return Err(GraphError::NotForward { producer, consumer });
        }

        if self.nodes[producer.0].consumers.insert(consumer) {
            let _ = self.nodes[consumer.0].producers.insert(producer);
            trace!(%producer, %consumer, "edge");
        }
        Ok(())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the trace was empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// If `id` was not issued by this graph.
    pub fn node(&self, id: NodeId) -> &InstructionNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut InstructionNode {
        &mut self.nodes[id.0]
    }

    /// All nodes in trace order.
    pub fn nodes(&self) -> &[InstructionNode] {
        &self.nodes
    }

    /// Nodes with no producers, in trace order.
    pub fn sources(&self) -> impl Iterator<Item = &InstructionNode> {
        self.nodes.iter().filter(|n| n.is_source())
    }

    /// Nodes with no consumers, in trace order.
    pub fn sinks(&self) -> impl Iterator<Item = &InstructionNode> {
        self.nodes.iter().filter(|n| n.is_sink())
    }

    /// Total number of producer -> consumer edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.consumers.len()).sum()
    }

    /// Sum of all node latencies; the serial execution time of the trace.
    pub fn total_latency(&self) -> u64 {
        self.nodes.iter().map(|n| u64::from(n.latency)).sum()
    }

    /// Largest single latency, or 0 for an empty graph.
    pub fn max_latency(&self) -> u64 {
        self.nodes
            .iter()
            .map(|n| u64::from(n.latency))
            .max()
            .unwrap_or(0)
    }

    /// Returns true once every node has completed.
    pub fn all_completed(&self) -> bool {
        self.nodes
            .iter()
            .all(|n| n.status == NodeStatus::Completed)
    }

    /// Returns true if every producer of `id` has completed (vacuously true for sources).
    pub fn producers_completed(&self, id: NodeId) -> bool {
        self.nodes[id.0]
            .producers
            .iter()
            .all(|p| self.nodes[p.0].status == NodeStatus::Completed)
    }

    /// Restores all run state: every node `Waiting`, full remaining latency, no memo.
    ///
    /// Topology is untouched.
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.status = NodeStatus::Waiting;
            node.remaining_latency = node.latency;
            node.best_path_from_here = None;
        }
    }
}

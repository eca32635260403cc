//! Value types observed by callers of the stepper.

use std::fmt;

use crate::edge::{Decision, Edge, EdgeState};

/// Lifecycle of a single run.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum RunState {
    /// No edges supplied yet, or the run was reset.
    #[default]
    Idle,
    /// Edges are being ordered by weight. Only held inside `start`.
    Sorting,
    /// Edges remain to be visited.
    Stepping,
    /// Every edge was visited, or the graph was spanned early.
    Finished,
}

impl RunState {
    /// Returns a lowercase label for rendering and logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sorting => "sorting",
            Self::Stepping => "stepping",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sorted edge paired with its visit state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TracedEdge {
    pub(crate) edge: Edge,
    pub(crate) state: EdgeState,
}

impl TracedEdge {
    /// Returns the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> Edge { self.edge }

    /// Returns the current visit state.
    #[must_use]
    #[rustfmt::skip]
    pub const fn state(&self) -> EdgeState { self.state }
}

/// The transition produced by one call to `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    pub(crate) index: usize,
    pub(crate) edge: Edge,
    pub(crate) decision: Decision,
    pub(crate) total_weight: f64,
}

impl StepRecord {
    /// Position of the visited edge in sorted order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(&self) -> usize { self.index }

    /// The visited edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> Edge { self.edge }

    /// Whether the edge joined the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn decision(&self) -> Decision { self.decision }

    /// Total weight of accepted edges after this step.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }
}

/// Result of calling `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// An edge was visited.
    Visited(StepRecord),
    /// The run had already finished; nothing was visited.
    Exhausted,
}

impl StepOutcome {
    /// Returns the step record, if an edge was visited.
    #[must_use]
    pub const fn record(self) -> Option<StepRecord> {
        match self {
            Self::Visited(record) => Some(record),
            Self::Exhausted => None,
        }
    }
}

/// Accepted edges of a run in the order they were accepted.
///
/// When the input graph is connected the forest is a minimum spanning tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanningForest {
    pub(crate) edges: Vec<Edge>,
    pub(crate) total_weight: f64,
    pub(crate) node_count: usize,
    pub(crate) component_count: usize,
}

impl SpanningForest {
    pub(crate) const fn empty(node_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
            node_count,
            component_count: node_count,
        }
    }

    pub(crate) fn accept(&mut self, edge: Edge, component_count: usize) {
        self.edges.push(edge);
        self.total_weight += edge.weight();
        self.component_count = component_count;
    }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the summed weight of the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of nodes the run was started with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of components joined by the accepted edges so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the accepted edges connect every node.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

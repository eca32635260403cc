//! Stepwise Kruskal minimum spanning tree (MST) construction.
//!
//! [`KruskalStepper`] orders candidate edges by weight and visits them one at
//! a time, accepting an edge when its endpoints lie in different components
//! of a [`DisjointSetForest`] and rejecting it otherwise. Callers can drive the
//! run at their own cadence with [`KruskalStepper::step`] or drain it with
//! [`KruskalStepper::run_to_completion`]; both paths share the same
//! transition, so they always agree on the final forest.

mod types;

use tracing::{Span, debug, field, instrument};

use crate::{
    builder::StepperConfig,
    disjoint_set::DisjointSetForest,
    edge::{Decision, Edge, EdgeState, NodeId},
    error::{KruskalError, Result},
    matrix,
};

pub use self::types::{RunState, SpanningForest, StepOutcome, StepRecord, TracedEdge};

/// Kruskal's algorithm as an explicit state machine.
///
/// # Examples
/// ```
/// use kruskal_core::{Decision, Edge, KruskalStepper, RunState, StepOutcome};
///
/// let mut stepper = KruskalStepper::new();
/// let edges = vec![
///     Edge::new(1, 0, 1.0, 0),
///     Edge::new(2, 0, 1.0, 1),
///     Edge::new(2, 1, 1.0, 2),
/// ];
/// stepper.start(edges, 0..3)?;
///
/// let first = stepper.step()?.record().expect("three edges remain");
/// assert_eq!(first.decision(), Decision::Accepted);
///
/// let forest = stepper.run_to_completion()?;
/// assert_eq!(forest.edge_count(), 2);
/// assert_eq!(forest.total_weight(), 2.0);
/// assert_eq!(stepper.state(), RunState::Finished);
/// assert_eq!(stepper.step()?, StepOutcome::Exhausted);
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct KruskalStepper {
    config: StepperConfig,
    state: RunState,
    edges: Vec<TracedEdge>,
    cursor: usize,
    disjoint_set: DisjointSetForest,
    forest: SpanningForest,
    trace: Vec<StepRecord>,
}

impl KruskalStepper {
    /// Creates an idle stepper with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_config(config: StepperConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration applied to every run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn config(&self) -> StepperConfig { self.config }

    /// Returns the current run state.
    #[must_use]
    #[rustfmt::skip]
    pub const fn state(&self) -> RunState { self.state }

    /// Returns the edges in processing order together with their visit state.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TracedEdge] { &self.edges }

    /// Returns the index of the next edge to visit.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cursor(&self) -> usize { self.cursor }

    /// Returns how many edges have not been visited yet.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.edges.len().saturating_sub(self.cursor)
    }

    /// Returns the accepted edges and running total.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest(&self) -> &SpanningForest { &self.forest }

    /// Returns the component structure built so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn disjoint_set(&self) -> &DisjointSetForest { &self.disjoint_set }

    /// Returns every step taken in this run, in order.
    #[must_use]
    #[rustfmt::skip]
    pub fn trace(&self) -> &[StepRecord] { &self.trace }

    /// Consumes the stepper and returns its accepted edges.
    #[must_use]
    pub fn into_forest(self) -> SpanningForest {
        self.forest
    }

    /// Validates and orders `edges`, registers `node_ids` and enters
    /// [`RunState::Stepping`], or [`RunState::Finished`] when there are no
    /// edges.
    ///
    /// Edges are sorted by ascending weight with a stable sort, so equal
    /// weights keep their input order. Nothing is modified when an error is
    /// returned.
    ///
    /// # Errors
    /// - [`KruskalError::InvalidStateTransition`] while a run is stepping.
    /// - [`KruskalError::EmptyGraph`] when empty graphs are disallowed and
    ///   `node_ids` is empty.
    /// - [`KruskalError::InvalidEdge`] for self-loops and non-positive or
    ///   non-finite weights.
    /// - [`KruskalError::UnknownNode`] when an endpoint is not in `node_ids`.
    #[instrument(
        name = "core.start",
        err,
        skip(self, edges, node_ids),
        fields(edges = field::Empty, nodes = field::Empty),
    )]
    pub fn start(
        &mut self,
        edges: impl IntoIterator<Item = Edge>,
        node_ids: impl IntoIterator<Item = NodeId>,
    ) -> Result<()> {
        if matches!(self.state, RunState::Sorting | RunState::Stepping) {
            return Err(KruskalError::InvalidStateTransition {
                operation: "start",
                state: self.state,
            });
        }

        let disjoint_set = DisjointSetForest::new(node_ids);
        if disjoint_set.is_empty() && !self.config.allow_empty_graph {
            return Err(KruskalError::EmptyGraph);
        }

        let mut edges: Vec<Edge> = edges.into_iter().collect();
        for edge in &edges {
            edge.validate()?;
            for node in [edge.source(), edge.target()] {
                if !disjoint_set.contains(node) {
                    return Err(KruskalError::UnknownNode { node });
                }
            }
        }

        let span = Span::current();
        span.record("edges", edges.len());
        span.record("nodes", disjoint_set.len());

        self.state = RunState::Sorting;
        edges.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

        self.forest = SpanningForest::empty(disjoint_set.len());
        self.disjoint_set = disjoint_set;
        self.edges = edges
            .into_iter()
            .map(|edge| TracedEdge {
                edge,
                state: EdgeState::Unvisited,
            })
            .collect();
        self.cursor = 0;
        self.trace.clear();
        self.state = RunState::Stepping;
        self.finish_if_done();

        debug!(state = %self.state, "run started");
        Ok(())
    }

    /// Visits the next edge in sorted order.
    ///
    /// Returns [`StepOutcome::Exhausted`] once the run has finished.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidStateTransition`] before `start`.
    pub fn step(&mut self) -> Result<StepOutcome> {
        match self.state {
            RunState::Stepping => {}
            RunState::Finished => return Ok(StepOutcome::Exhausted),
            state @ (RunState::Idle | RunState::Sorting) => {
                return Err(KruskalError::InvalidStateTransition {
                    operation: "step",
                    state,
                });
            }
        }

        let index = self.cursor;
        let Some(traced) = self.edges.get(index) else {
            self.state = RunState::Finished;
            return Ok(StepOutcome::Exhausted);
        };
        let edge = traced.edge;

        let left_root = self.disjoint_set.find_root(edge.source())?;
        let right_root = self.disjoint_set.find_root(edge.target())?;
        let decision = if left_root == right_root {
            Decision::Rejected
        } else {
            self.disjoint_set.union(left_root, right_root)?;
            self.forest.accept(edge, self.disjoint_set.component_count());
            Decision::Accepted
        };

        if let Some(slot) = self.edges.get_mut(index) {
            slot.state = EdgeState::from(decision);
        }
        self.cursor = index.saturating_add(1);

        let record = StepRecord {
            index,
            edge,
            decision,
            total_weight: self.forest.total_weight(),
        };
        self.trace.push(record);
        record_decision_metric(decision);
        debug!(
            index,
            source = edge.source(),
            target = edge.target(),
            weight = edge.weight(),
            decision = decision.as_str(),
            total_weight = record.total_weight,
            "edge visited"
        );

        self.finish_if_done();
        Ok(StepOutcome::Visited(record))
    }

    /// Visits every remaining edge and returns the finished forest.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidStateTransition`] before `start`.
    pub fn run_to_completion(&mut self) -> Result<&SpanningForest> {
        self.drain()?;
        Ok(&self.forest)
    }

    #[instrument(
        name = "core.run_to_completion",
        err,
        skip(self),
        fields(remaining = self.remaining()),
    )]
    fn drain(&mut self) -> Result<()> {
        if matches!(self.state, RunState::Idle | RunState::Sorting) {
            return Err(KruskalError::InvalidStateTransition {
                operation: "run_to_completion",
                state: self.state,
            });
        }
        while let StepOutcome::Visited(_) = self.step()? {}
        debug!(
            accepted = self.forest.edge_count(),
            total_weight = self.forest.total_weight(),
            components = self.forest.component_count(),
            "run finished"
        );
        Ok(())
    }

    /// Returns to [`RunState::Idle`], discarding edges, components and the
    /// accumulated forest. The configuration is kept.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    fn finish_if_done(&mut self) {
        let exhausted = self.cursor >= self.edges.len();
        let spanned = self.config.stop_when_spanning && self.disjoint_set.component_count() <= 1;
        if exhausted || spanned {
            self.state = RunState::Finished;
        }
    }
}

#[cfg(feature = "metrics")]
fn record_decision_metric(decision: Decision) {
    match decision {
        Decision::Accepted => metrics::counter!("kruskal_edges_accepted").increment(1),
        Decision::Rejected => metrics::counter!("kruskal_edges_rejected").increment(1),
    }
}

#[cfg(not(feature = "metrics"))]
const fn record_decision_metric(_decision: Decision) {}

/// Computes a minimum spanning forest over nodes `0..node_count` in one call.
///
/// # Errors
/// Propagates the validation errors of [`KruskalStepper::start`].
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, kruskal};
///
/// let forest = kruskal(2, [Edge::new(1, 0, 5.0, 0)])?;
/// assert_eq!(forest.total_weight(), 5.0);
/// assert!(forest.is_tree());
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
pub fn kruskal(
    node_count: usize,
    edges: impl IntoIterator<Item = Edge>,
) -> Result<SpanningForest> {
    let mut stepper = KruskalStepper::new();
    stepper.start(edges, 0..node_count)?;
    stepper.run_to_completion()?;
    Ok(stepper.into_forest())
}

/// Extracts edges from a weight matrix and computes its minimum spanning
/// forest.
///
/// # Errors
/// Returns [`KruskalError::NonSquareMatrix`] or [`KruskalError::InvalidEdge`]
/// from extraction.
///
/// # Examples
/// ```
/// use kruskal_core::kruskal_from_matrix;
///
/// let matrix = vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0]];
/// let forest = kruskal_from_matrix(&matrix)?;
/// assert_eq!(forest.edge_count(), 2);
/// assert_eq!(forest.total_weight(), 2.0);
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
pub fn kruskal_from_matrix(matrix: &[Vec<f64>]) -> Result<SpanningForest> {
    let edges = matrix::extract_edges(matrix)?;
    kruskal(matrix.len(), edges)
}

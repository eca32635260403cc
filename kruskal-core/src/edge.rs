//! Node and edge types shared by the extractor and the stepper.

use std::fmt;

use crate::error::{InvalidEdgeReason, KruskalError, Result};

/// Identifier of a graph node: its row index in the weight matrix.
pub type NodeId = usize;

/// A weighted undirected edge candidate.
///
/// `sequence` records the position of the edge in extraction order and is
/// only used to make traces reproducible; it does not affect decisions
/// beyond the stable sort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    weight: f64,
    sequence: u64,
}

impl Edge {
    /// Creates an edge. No validation happens here; see [`Edge::validate`].
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Edge;
    ///
    /// let edge = Edge::new(1, 0, 4.0, 0);
    /// assert_eq!(edge.endpoints(), (1, 0));
    /// assert_eq!(edge.weight(), 4.0);
    /// ```
    #[must_use]
    pub const fn new(source: NodeId, target: NodeId, weight: f64, sequence: u64) -> Self {
        Self {
            source,
            target,
            weight,
            sequence,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeId { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> NodeId { self.target }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (NodeId, NodeId) { (self.source, self.target) }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the extraction sequence number.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> u64 { self.sequence }

    /// Checks that the edge joins two distinct nodes with a finite, positive
    /// weight.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidEdge`] describing the first failed check.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{Edge, KruskalErrorCode};
    ///
    /// assert!(Edge::new(0, 1, 2.5, 0).validate().is_ok());
    /// let err = Edge::new(2, 2, 1.0, 0).validate().unwrap_err();
    /// assert_eq!(err.code(), KruskalErrorCode::InvalidEdge);
    /// ```
    pub fn validate(&self) -> Result<()> {
        let reason = if self.source == self.target {
            InvalidEdgeReason::SelfLoop
        } else if !self.weight.is_finite() {
            InvalidEdgeReason::NonFiniteWeight
        } else if self.weight <= 0.0 {
            InvalidEdgeReason::NonPositiveWeight
        } else {
            return Ok(());
        };
        Err(KruskalError::InvalidEdge {
            left: self.source,
            right: self.target,
            reason,
        })
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.source, self.target, self.weight)
    }
}

/// Outcome of visiting one edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Decision {
    /// The endpoints were in different components; the edge joined the forest.
    Accepted,
    /// The endpoints already shared a component; the edge would close a cycle.
    Rejected,
}

impl Decision {
    /// Returns a lowercase label for rendering and logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visit state of an edge inside a run.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EdgeState {
    /// Not yet reached by the cursor.
    #[default]
    Unvisited,
    /// Visited and added to the spanning forest.
    Accepted,
    /// Visited and skipped because it would form a cycle.
    Rejected,
}

impl From<Decision> for EdgeState {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Accepted => Self::Accepted,
            Decision::Rejected => Self::Rejected,
        }
    }
}

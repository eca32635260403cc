//! Kruskal core library.
//!
//! Computes minimum spanning trees one edge at a time so callers can observe,
//! replay or animate every accept/reject decision. The pieces are:
//!
//! - [`DisjointSetForest`]: union-by-size component tracking.
//! - [`matrix::extract_edges`]: weight matrix to edge list.
//! - [`KruskalStepper`]: the sorted, stepwise Kruskal run.
//!
//! When the `metrics` feature is enabled each step increments either
//! `kruskal_edges_accepted` or `kruskal_edges_rejected` (counters).
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod disjoint_set;
mod edge;
mod error;
pub mod matrix;
mod stepper;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{KruskalBuilder, StepperConfig},
    disjoint_set::{DisjointSetForest, UnionOutcome},
    edge::{Decision, Edge, EdgeState, NodeId},
    error::{InvalidEdgeReason, KruskalError, KruskalErrorCode, Result},
    stepper::{
        KruskalStepper, RunState, SpanningForest, StepOutcome, StepRecord, TracedEdge, kruskal,
        kruskal_from_matrix,
    },
};

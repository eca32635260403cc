//! Weight matrix to edge list extraction.
//!
//! A matrix entry `matrix[i][j] > 0` denotes an undirected edge of that weight
//! and anything `<= 0` denotes no edge. Only the strict lower triangle
//! (`j < i`) is read, so each undirected edge appears once; symmetry is assumed
//! rather than checked. Diagonal entries would be self-loops and are skipped.

use std::ops::Range;

use tracing::{instrument, trace};

use crate::{
    edge::{Edge, NodeId},
    error::{InvalidEdgeReason, KruskalError, Result},
};

/// Extracts the edges of a square weight matrix in row-major lower-triangle
/// order, numbering them with increasing sequence numbers.
///
/// # Errors
/// - [`KruskalError::NonSquareMatrix`] when a row length differs from the row
///   count.
/// - [`KruskalError::InvalidEdge`] when a lower-triangle entry is NaN or
///   infinite.
///
/// # Examples
/// ```
/// use kruskal_core::matrix::extract_edges;
///
/// let matrix = vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0]];
/// let edges = extract_edges(&matrix)?;
/// let pairs: Vec<_> = edges.iter().map(|edge| edge.endpoints()).collect();
/// assert_eq!(pairs, vec![(1, 0), (2, 0), (2, 1)]);
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[instrument(name = "core.extract_edges", err, skip(matrix), fields(nodes = matrix.len()))]
pub fn extract_edges(matrix: &[Vec<f64>]) -> Result<Vec<Edge>> {
    let expected = matrix.len();
    if let Some((row, actual)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(KruskalError::NonSquareMatrix {
            row,
            expected,
            actual,
        });
    }

    let mut edges = Vec::new();
    let mut sequence = 0_u64;
    for (source, row) in matrix.iter().enumerate() {
        for (target, &weight) in row.iter().enumerate().take(source) {
            if !weight.is_finite() {
                return Err(KruskalError::InvalidEdge {
                    left: source,
                    right: target,
                    reason: InvalidEdgeReason::NonFiniteWeight,
                });
            }
            if weight > 0.0 {
                edges.push(Edge::new(source, target, weight, sequence));
                sequence = sequence.saturating_add(1);
            }
        }
    }

    trace!(edges = edges.len(), "edges extracted");
    Ok(edges)
}

/// Returns the node ids of a matrix: one per row.
#[must_use]
pub const fn node_ids(matrix: &[Vec<f64>]) -> Range<NodeId> {
    0..matrix.len()
}

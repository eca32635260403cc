//! Prim oracle for MST property verification.
//!
//! Grows a tree from every not-yet-reached node directly over the weight
//! matrix, so it shares no code or ordering with the stepper. The minimum
//! spanning forest weight is unique even when edge sets are not, which makes
//! the total a valid point of comparison.

/// Result of the Prim oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components of the input graph.
    pub component_count: usize,
}

/// Computes the minimum spanning forest of `matrix` with Prim's algorithm.
pub(super) fn prim(matrix: &[Vec<f64>]) -> OracleResult {
    let node_count = matrix.len();
    let mut in_tree = vec![false; node_count];
    let mut best = vec![f64::INFINITY; node_count];
    let mut total_weight = 0.0;
    let mut edge_count = 0;
    let mut component_count = 0;

    for root in 0..node_count {
        if in_tree[root] {
            continue;
        }
        component_count += 1;
        best[root] = 0.0;
        let mut is_root = true;

        while let Some(next) = closest_outside(&in_tree, &best) {
            in_tree[next] = true;
            if is_root {
                is_root = false;
            } else {
                total_weight += best[next];
                edge_count += 1;
            }
            for (other, &weight) in matrix[next].iter().enumerate() {
                let weight = if other < next { weight } else { matrix[other][next] };
                if !in_tree[other] && weight > 0.0 && weight < best[other] {
                    best[other] = weight;
                }
            }
        }
    }

    OracleResult {
        total_weight,
        edge_count,
        component_count,
    }
}

/// Returns the unreached node with the smallest finite key.
fn closest_outside(in_tree: &[bool], best: &[f64]) -> Option<usize> {
    best.iter()
        .enumerate()
        .filter(|&(node, key)| !in_tree[node] && key.is_finite())
        .min_by(|left, right| left.1.total_cmp(right.1))
        .map(|(node, _)| node)
}

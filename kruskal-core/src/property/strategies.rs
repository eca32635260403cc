//! Strategy builders for MST property-based tests.
//!
//! Every generator produces a symmetric weight matrix so the extractor is
//! exercised on the way into the stepper. Integer-valued weights keep
//! floating-point totals exact; continuous weights are compared with a
//! tolerance.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for generated graphs.
const MAX_NODES: usize = 40;

/// Generates MST fixtures covering all five weight distributions, biased
/// towards `ManyIdentical` where tie handling matters most.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let matrix = match distribution {
        WeightDistribution::Unique => {
            random_graph(rng, (0.2, 0.6), |r| r.gen_range(0.1_f64..100.0))
        }
        WeightDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<f64> = (0..pool_size)
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            random_graph(rng, (0.3, 0.7), move |r| pool[r.gen_range(0..pool.len())])
        }
        WeightDistribution::Sparse => sparse_graph(rng),
        WeightDistribution::Dense => {
            random_graph(rng, (0.7, 0.95), |r| f64::from(r.gen_range(1_u16..=1000)))
        }
        WeightDistribution::Disconnected => disconnected_graph(rng),
    };
    MstFixture {
        matrix,
        distribution,
    }
}

/// Returns a random permutation of the lower-triangle edges of `fixture`,
/// with endpoints swapped and sequence numbers reassigned in the new order.
pub(super) fn shuffled_edges(fixture: &MstFixture, seed: u64) -> Vec<Edge> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = fixture.edges();
    for i in (1..edges.len()).rev() {
        let j = rng.gen_range(0..=i);
        edges.swap(i, j);
    }
    edges
        .into_iter()
        .zip(0_u64..)
        .map(|(edge, sequence)| Edge::new(edge.target(), edge.source(), edge.weight(), sequence))
        .collect()
}

fn empty_matrix(node_count: usize) -> Vec<Vec<f64>> {
    vec![vec![0.0; node_count]; node_count]
}

fn set_weight(matrix: &mut [Vec<f64>], left: usize, right: usize, weight: f64) {
    matrix[left][right] = weight;
    matrix[right][left] = weight;
}

/// Adds each unordered pair with a probability sampled from `edge_prob_range`.
fn random_graph(
    rng: &mut SmallRng,
    edge_prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> Vec<Vec<f64>> {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut matrix = empty_matrix(node_count);
    for i in 0..node_count {
        for j in 0..i {
            if rng.gen_bool(probability) {
                let value = weight(rng);
                set_weight(&mut matrix, i, j, value);
            }
        }
    }
    matrix
}

/// Builds a random spanning path, then adds roughly `n / 2` to `n` extra
/// edges.
fn sparse_graph(rng: &mut SmallRng) -> Vec<Vec<f64>> {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut matrix = empty_matrix(node_count);

    let mut order: Vec<usize> = (0..node_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
    for pair in order.windows(2) {
        let value = f64::from(rng.gen_range(1_u16..=500));
        set_weight(&mut matrix, pair[0], pair[1], value);
    }

    let extra = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        if i != j {
            let value = f64::from(rng.gen_range(1_u16..=500));
            set_weight(&mut matrix, i, j, value);
        }
    }
    matrix
}

/// Builds two to five blocks with internal edges only.
fn disconnected_graph(rng: &mut SmallRng) -> Vec<Vec<f64>> {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=8))
        .collect();
    let node_count = sizes.iter().sum();
    let mut matrix = empty_matrix(node_count);

    let mut offset = 0;
    for size in sizes {
        let probability = rng.gen_range(0.3..=0.8);
        for i in 1..size {
            // Link each node to an earlier one so the block stays connected.
            let anchor = rng.gen_range(0..i);
            let value = f64::from(rng.gen_range(1_u8..=20));
            set_weight(&mut matrix, offset + i, offset + anchor, value);
            for j in 0..i {
                if j != anchor && rng.gen_bool(probability) {
                    let value = f64::from(rng.gen_range(1_u8..=20));
                    set_weight(&mut matrix, offset + i, offset + j, value);
                }
            }
        }
        offset += size;
    }
    matrix
}

// Biased manually: ManyIdentical is the most important stress case.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}

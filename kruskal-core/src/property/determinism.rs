//! Property 3: Determinism of the decision trace.
//!
//! - Stepping one edge at a time and draining with `run_to_completion` give
//!   the same forest and trace.
//! - `reset` followed by `start` on the same input replays the same trace.
//! - Permuting the input edges leaves the total weight unchanged.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{KruskalStepper, StepOutcome, matrix::node_ids};

use super::strategies::shuffled_edges;
use super::types::MstFixture;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Compares manual stepping against draining, then replays after a reset.
pub(super) fn run_replay_property(fixture: &MstFixture) -> TestCaseResult {
    let nodes = node_ids(&fixture.matrix);

    let mut stepped = KruskalStepper::new();
    stepped.start(fixture.edges(), nodes.clone())?;
    while let StepOutcome::Visited(_) = stepped.step()? {}

    let mut drained = KruskalStepper::new();
    drained.start(fixture.edges(), nodes.clone())?;
    drained.run_to_completion()?;

    if stepped.forest() != drained.forest() || stepped.trace() != drained.trace() {
        return Err(TestCaseError::fail(format!(
            "stepping and draining diverged ({})",
            fixture.describe()
        )));
    }

    let baseline = drained.trace().to_vec();
    drained.reset();
    drained.start(fixture.edges(), nodes)?;
    drained.run_to_completion()?;
    if drained.trace() != baseline.as_slice() {
        return Err(TestCaseError::fail(format!(
            "trace changed after reset ({})",
            fixture.describe()
        )));
    }
    Ok(())
}

/// Runs the stepper on a shuffled copy of the edges and compares totals.
pub(super) fn run_permutation_property(fixture: &MstFixture, seed: u64) -> TestCaseResult {
    let nodes = node_ids(&fixture.matrix);

    let mut ordered = KruskalStepper::new();
    ordered.start(fixture.edges(), nodes.clone())?;
    let expected = ordered.run_to_completion()?.total_weight();

    let mut shuffled = KruskalStepper::new();
    shuffled.start(shuffled_edges(fixture, seed), nodes)?;
    let forest = shuffled.run_to_completion()?;

    let scale = expected.abs().max(1.0);
    if (forest.total_weight() - expected).abs() > WEIGHT_TOLERANCE * scale {
        return Err(TestCaseError::fail(format!(
            "total weight depends on input order: {} vs {expected} ({})",
            forest.total_weight(),
            fixture.describe()
        )));
    }
    if forest.edge_count() != ordered.forest().edge_count() {
        return Err(TestCaseError::fail(format!(
            "edge count depends on input order ({})",
            fixture.describe()
        )));
    }
    Ok(())
}

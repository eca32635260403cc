//! Property 2: Structural invariant verification.
//!
//! For any finished run, verifies:
//!
//! - **Order**: visited weights never decrease.
//! - **Decisions**: an edge is accepted iff its endpoints were in different
//!   components when it was visited.
//! - **Acyclicity**: accepted edges never close a cycle.
//! - **Edge count**: `N - C` accepted edges for `C` input components.
//! - **Accounting**: the running total matches the accepted weights.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Decision, DisjointSetForest, EdgeState, KruskalStepper, matrix::node_ids};

use super::oracle::prim;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let mut stepper = KruskalStepper::new();
    stepper
        .start(fixture.edges(), node_ids(&fixture.matrix))
        .map_err(|e| TestCaseError::fail(format!("start failed: {e} ({})", fixture.describe())))?;
    stepper
        .run_to_completion()
        .map_err(|e| TestCaseError::fail(format!("run failed: {e} ({})", fixture.describe())))?;

    validate_order(&stepper)?;
    validate_decisions(&stepper, fixture)?;
    validate_edge_count(&stepper, fixture)?;
    validate_accounting(&stepper)?;
    Ok(())
}

fn validate_order(stepper: &KruskalStepper) -> TestCaseResult {
    for pair in stepper.trace().windows(2) {
        let (earlier, later) = (pair[0].edge().weight(), pair[1].edge().weight());
        if later < earlier {
            return Err(TestCaseError::fail(format!(
                "weights out of order: {earlier} visited before {later}"
            )));
        }
    }
    if stepper.trace().len() != stepper.edges().len() {
        return Err(TestCaseError::fail("not every edge was visited"));
    }
    Ok(())
}

/// Replays the trace against a fresh forest, checking each decision and
/// that accepted edges never join an already-connected pair.
fn validate_decisions(stepper: &KruskalStepper, fixture: &MstFixture) -> TestCaseResult {
    let mut replay = DisjointSetForest::new(0..fixture.node_count());
    for (record, traced) in stepper.trace().iter().zip(stepper.edges()) {
        let (source, target) = record.edge().endpoints();
        let joined = replay.same_component(source, target)?;
        let expected = if joined {
            Decision::Rejected
        } else {
            replay.union(source, target)?;
            Decision::Accepted
        };
        if record.decision() != expected {
            return Err(TestCaseError::fail(format!(
                "step {} decided {} for {}, expected {expected} ({})",
                record.index(),
                record.decision(),
                record.edge(),
                fixture.describe(),
            )));
        }
        if traced.state() != EdgeState::from(expected) {
            return Err(TestCaseError::fail(format!(
                "edge {} has state {:?} but was {expected}",
                record.index(),
                traced.state(),
            )));
        }
    }
    Ok(())
}

fn validate_edge_count(stepper: &KruskalStepper, fixture: &MstFixture) -> TestCaseResult {
    let components = prim(&fixture.matrix).component_count;
    let expected = fixture.node_count() - components;
    let forest = stepper.forest();
    if forest.edge_count() != expected {
        return Err(TestCaseError::fail(format!(
            "expected {expected} accepted edges for {components} components, got {} ({})",
            forest.edge_count(),
            fixture.describe(),
        )));
    }
    if forest.is_tree() != (components == 1) {
        return Err(TestCaseError::fail("is_tree disagrees with connectivity"));
    }
    Ok(())
}

fn validate_accounting(stepper: &KruskalStepper) -> TestCaseResult {
    let forest = stepper.forest();
    let summed: f64 = forest.edges().iter().map(|edge| edge.weight()).sum();
    if summed != forest.total_weight() {
        return Err(TestCaseError::fail(format!(
            "running total {} differs from accepted sum {summed}",
            forest.total_weight()
        )));
    }
    let last = stepper.trace().last().map_or(0.0, |record| record.total_weight());
    if last != forest.total_weight() {
        return Err(TestCaseError::fail(format!(
            "last step reported {last}, forest holds {}",
            forest.total_weight()
        )));
    }
    Ok(())
}

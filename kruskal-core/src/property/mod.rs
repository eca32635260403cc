//! Property-based tests for the stepwise Kruskal implementation.
//!
//! Checks the stepper against an independent Prim oracle, validates the
//! structural invariants of the accepted forest, and confirms that stepping,
//! draining, resetting and reordering the input cannot change the outcome.

mod determinism;
mod oracle;
mod strategies;
mod structural;

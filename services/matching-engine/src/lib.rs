//! Matching Engine Service
//!
//! Computes assignments between applicants and capacity-bounded slots from
//! two-sided ranked preferences. Two solvers are offered: a randomized
//! first-fit baseline and a capacitated deferred-acceptance (Gale-Shapley)
//! procedure that guarantees a stable matching.
//!
//! **Key Invariants:**
//! - No slot ever holds more applicants than its capacity
//! - No applicant is assigned to more than one slot
//! - The deferred-acceptance solver terminates with no blocking pair
//! - Every call builds its own working state; nothing is shared across calls

pub mod engine;
pub mod index;
pub mod matching;
pub mod metrics;

pub use engine::MatchingEngine;
pub use metrics::{Instrumented, SolverMetrics};

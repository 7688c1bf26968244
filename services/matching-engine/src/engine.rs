//! Matching engine facade
//!
//! Entry points for both solvers. The engine carries no state of its own:
//! every call builds its working structures from the input and drops them
//! on return, which is what makes concurrent calls safe without locking.

use types::applicant::Applicant;
use types::assignment::MatchOutcome;
use types::slot::Slot;

use crate::index::PreferenceIndex;
use crate::matching::{greedy, stable};

/// Stateless matching engine
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchingEngine;

impl MatchingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Randomized first-fit assignment, no stability guarantee
    pub fn solve_greedy(&self, applicants: &[Applicant], slots: &[Slot]) -> MatchOutcome {
        let assignments = greedy::solve(applicants, slots);
        tracing::info!(assignments = assignments.len(), "greedy matching completed");
        MatchOutcome::unstable(assignments)
    }

    /// Capacitated deferred acceptance, stable on success
    ///
    /// An internal fault never leaks a partial result: the outcome degrades
    /// to empty with the stability flag cleared.
    pub fn solve_stable(&self, applicants: &[Applicant], slots: &[Slot]) -> MatchOutcome {
        let index = PreferenceIndex::build(applicants, slots);
        match stable::solve(&index, applicants, slots) {
            Ok(assignments) => {
                tracing::info!(
                    assignments = assignments.len(),
                    "deferred-acceptance matching completed"
                );
                MatchOutcome::stable(assignments)
            }
            Err(err) => {
                tracing::error!(error = %err, "deferred-acceptance matching failed");
                MatchOutcome::unstable(Vec::new())
            }
        }
    }
}

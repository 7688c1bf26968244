//! Committed placements and the solve outcome

use crate::ids::{ApplicantId, SlotId};
use serde::{Deserialize, Serialize};

/// One committed placement of an applicant into a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub applicant_id: ApplicantId,
    pub slot_id: SlotId,
}

impl Assignment {
    pub fn new(applicant_id: ApplicantId, slot_id: SlotId) -> Self {
        Self {
            applicant_id,
            slot_id,
        }
    }
}

/// Result of one solve call
///
/// Each applicant appears in at most one assignment. The `stable` flag is
/// true only when the outcome was produced by a completed run of the
/// deferred-acceptance solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub assignments: Vec<Assignment>,
    pub stable: bool,
}

impl MatchOutcome {
    /// Outcome carrying a stability guarantee
    pub fn stable(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            stable: true,
        }
    }

    /// Outcome without a stability guarantee
    pub fn unstable(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            stable: false,
        }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

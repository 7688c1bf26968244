//! Error types for the matching engine
//!
//! Error taxonomy using thiserror

use crate::ids::{ApplicantId, SlotId};
use thiserror::Error;

/// Internal faults raised by the stable solver
///
/// These indicate corrupted per-call state, not malformed input. Malformed
/// input (unknown references, empty lists) is handled locally and never
/// surfaces as an error; the engine entry point converts these faults into
/// an empty, non-stable outcome instead of exposing a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("applicant {0} missing from lookup table")]
    UnknownApplicant(ApplicantId),

    #[error("slot {0} missing from lookup table")]
    UnknownSlot(SlotId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatchError::UnknownApplicant(ApplicantId::new(5));
        assert_eq!(err.to_string(), "applicant 5 missing from lookup table");
    }
}

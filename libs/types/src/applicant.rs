//! Applicant entity

use crate::ids::{ApplicantId, SlotId};
use serde::{Deserialize, Serialize};

/// An applicant seeking a slot
///
/// Preferences list slot ids most preferred first. The list may be empty,
/// in which case the applicant can never be assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    /// Slot ids in descending preference order
    #[serde(default)]
    pub preferences: Vec<SlotId>,
}

impl Applicant {
    pub fn new(id: ApplicantId, preferences: Vec<SlotId>) -> Self {
        Self { id, preferences }
    }
}

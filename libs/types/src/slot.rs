//! Slot entity

use crate::ids::{ApplicantId, SlotId};
use serde::{Deserialize, Serialize};

/// A capacity-bounded slot being allocated
///
/// A missing capacity deserializes to 0, meaning no seats are available.
/// The preference list ranks applicants best first; an empty or missing
/// list means the slot expressed no preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    /// Number of seats
    #[serde(default)]
    pub capacity: u32,
    /// Applicant ids ranked best first
    #[serde(default)]
    pub preferences: Vec<ApplicantId>,
}

impl Slot {
    pub fn new(id: SlotId, capacity: u32, preferences: Vec<ApplicantId>) -> Self {
        Self {
            id,
            capacity,
            preferences,
        }
    }

    /// Whether the slot declared a ranking over applicants
    pub fn has_ranking(&self) -> bool {
        !self.preferences.is_empty()
    }
}

//! Per-call preference index
//!
//! Lookup structures mapping identifiers to entities and ranks. Built fresh
//! at the start of a solve call and discarded when it returns. Slot ranks
//! are precomputed into hash maps so rank comparisons during the proposal
//! loop cost O(1) instead of rescanning preference lists.

use std::collections::HashMap;
use types::applicant::Applicant;
use types::ids::{ApplicantId, SlotId};
use types::slot::Slot;

/// Rank assigned to an applicant absent from a declared preference list.
/// Worse than every declared rank.
pub const SENTINEL_RANK: usize = usize::MAX;

/// Transient lookup tables for one solve call
pub struct PreferenceIndex<'a> {
    applicants: HashMap<ApplicantId, &'a Applicant>,
    slots: HashMap<SlotId, SlotEntry<'a>>,
}

/// A slot together with its precomputed applicant ranking
pub struct SlotEntry<'a> {
    slot: &'a Slot,
    ranks: HashMap<ApplicantId, usize>,
}

impl<'a> PreferenceIndex<'a> {
    /// Build the index from the request entities
    pub fn build(applicants: &'a [Applicant], slots: &'a [Slot]) -> Self {
        let applicants = applicants.iter().map(|a| (a.id, a)).collect();
        let slots = slots
            .iter()
            .map(|s| {
                // First occurrence wins when a list repeats an id
                let mut ranks = HashMap::with_capacity(s.preferences.len());
                for (rank, &id) in s.preferences.iter().enumerate() {
                    ranks.entry(id).or_insert(rank);
                }
                (s.id, SlotEntry { slot: s, ranks })
            })
            .collect();
        Self { applicants, slots }
    }

    /// Look up an applicant by id
    pub fn applicant(&self, id: ApplicantId) -> Option<&'a Applicant> {
        self.applicants.get(&id).copied()
    }

    /// Look up a slot entry by id; None means the reference is unknown
    pub fn slot(&self, id: SlotId) -> Option<&SlotEntry<'a>> {
        self.slots.get(&id)
    }
}

impl<'a> SlotEntry<'a> {
    pub fn id(&self) -> SlotId {
        self.slot.id
    }

    pub fn capacity(&self) -> u32 {
        self.slot.capacity
    }

    /// Whether the slot declared a ranking over applicants
    pub fn has_ranking(&self) -> bool {
        self.slot.has_ranking()
    }

    /// Rank of an applicant in this slot's declared list
    ///
    /// Applicants absent from the list get [`SENTINEL_RANK`]. Only
    /// meaningful when `has_ranking()` is true.
    pub fn rank_of(&self, id: ApplicantId) -> usize {
        self.ranks.get(&id).copied().unwrap_or(SENTINEL_RANK)
    }
}

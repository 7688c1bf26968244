//! Capacitated deferred acceptance
//!
//! Applicant-proposing Gale-Shapley generalized to slots holding more than
//! one applicant. Free applicants propose down their preference lists; a
//! full slot keeps the proposer only by evicting its worst current holder
//! (see [`rank`](super::rank) for the comparison policy). Every applicant
//! advances its cursor on each proposal, so the loop performs at most one
//! proposal per preference-list entry overall.

use std::collections::{HashMap, VecDeque};
use types::applicant::Applicant;
use types::assignment::Assignment;
use types::errors::MatchError;
use types::ids::{ApplicantId, SlotId};
use types::slot::Slot;

use crate::index::PreferenceIndex;
use crate::matching::rank;

/// Run deferred acceptance to a stable matching
///
/// Errors only on corrupted per-call state (a queued id missing from the
/// lookup tables); all malformed-input conditions are absorbed locally.
pub fn solve(
    index: &PreferenceIndex<'_>,
    applicants: &[Applicant],
    slots: &[Slot],
) -> Result<Vec<Assignment>, MatchError> {
    if applicants.is_empty() || slots.is_empty() {
        return Ok(Vec::new());
    }

    // Holder lists stay in admission order; eviction removes in place, so
    // the front is always the earliest-admitted holder still present.
    let mut holders: HashMap<SlotId, Vec<ApplicantId>> =
        slots.iter().map(|s| (s.id, Vec::new())).collect();
    let mut cursors: HashMap<ApplicantId, usize> =
        applicants.iter().map(|a| (a.id, 0)).collect();
    let mut free: VecDeque<ApplicantId> = applicants.iter().map(|a| a.id).collect();

    while let Some(applicant_id) = free.pop_front() {
        let applicant = index
            .applicant(applicant_id)
            .ok_or(MatchError::UnknownApplicant(applicant_id))?;
        let cursor = cursors
            .get_mut(&applicant_id)
            .ok_or(MatchError::UnknownApplicant(applicant_id))?;

        // List exhausted: permanently unassigned
        if *cursor >= applicant.preferences.len() {
            continue;
        }

        let slot_id = applicant.preferences[*cursor];
        *cursor += 1;

        // Unknown slot: void proposal, try the next preference later
        let Some(entry) = index.slot(slot_id) else {
            free.push_back(applicant_id);
            continue;
        };

        let held = holders
            .get_mut(&slot_id)
            .ok_or(MatchError::UnknownSlot(slot_id))?;

        if (held.len() as u32) < entry.capacity() {
            held.push(applicant_id);
            continue;
        }

        match rank::worst_holder(entry, held) {
            // Zero-capacity slot: nothing to displace, proposer moves on
            None => free.push_back(applicant_id),
            Some(worst) => {
                if rank::prefers(entry, applicant_id, worst) {
                    held.retain(|&h| h != worst);
                    held.push(applicant_id);
                    free.push_back(worst);
                } else {
                    free.push_back(applicant_id);
                }
            }
        }
    }

    // Assemble pairs in slot input order for a deterministic result; each
    // holder list is consumed once even if an id repeats in the input
    let mut assignments = Vec::new();
    for slot in slots {
        if let Some(held) = holders.remove(&slot.id) {
            assignments.extend(
                held.into_iter()
                    .map(|applicant_id| Assignment::new(applicant_id, slot.id)),
            );
        }
    }
    Ok(assignments)
}

//! Randomized first-fit assignment
//!
//! Baseline strategy used for comparison against the stable solver. The
//! applicant processing order is shuffled on every call, so two runs over
//! the same input may produce different assignments; capacity limits hold
//! regardless. No backtracking, no eviction.

use rand::seq::SliceRandom;
use std::collections::HashMap;
use types::applicant::Applicant;
use types::assignment::Assignment;
use types::ids::SlotId;
use types::slot::Slot;

/// Assign each applicant to the first preferred slot with a seat left
///
/// Unknown slot references are skipped as if the slot had no seats.
/// Applicants whose whole list is exhausted stay unassigned, silently.
pub fn solve(applicants: &[Applicant], slots: &[Slot]) -> Vec<Assignment> {
    let mut remaining: HashMap<SlotId, u32> =
        slots.iter().map(|s| (s.id, s.capacity)).collect();

    let mut order: Vec<&Applicant> = applicants.iter().collect();
    order.shuffle(&mut rand::thread_rng());

    let mut assignments = Vec::new();
    for applicant in order {
        for &slot_id in &applicant.preferences {
            let Some(seats) = remaining.get_mut(&slot_id) else {
                continue;
            };
            if *seats > 0 {
                *seats -= 1;
                assignments.push(Assignment::new(applicant.id, slot_id));
                break;
            }
        }
    }
    assignments
}

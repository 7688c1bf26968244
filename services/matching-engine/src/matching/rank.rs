//! Rank comparison policy
//!
//! Decides which holder a full slot gives up and whether a new proposer
//! displaces it. The fallback for slots without a declared ranking is
//! asymmetric on purpose: such a slot always yields to a new proposer
//! (first-come-first-served), while under a declared ranking two unlisted
//! candidates tie in favor of the incumbent.

use crate::index::SlotEntry;
use types::ids::ApplicantId;

/// Find the worst-ranked holder of a slot
///
/// Without a declared ranking the worst holder is the first element of the
/// holder list in its current order; holder lists are kept in admission
/// order with in-place eviction, so this is the earliest-admitted holder
/// still present. With a ranking, the holder with the numerically largest
/// rank loses; unlisted holders carry the sentinel rank, and ties go to the
/// first one encountered in the scan.
///
/// Returns None when the holder list is empty (a zero-capacity slot).
pub fn worst_holder(entry: &SlotEntry<'_>, holders: &[ApplicantId]) -> Option<ApplicantId> {
    if !entry.has_ranking() {
        return holders.first().copied();
    }

    let mut worst: Option<(ApplicantId, usize)> = None;
    for &holder in holders {
        let rank = entry.rank_of(holder);
        match worst {
            Some((_, worst_rank)) if rank <= worst_rank => {}
            _ => worst = Some((holder, rank)),
        }
    }
    worst.map(|(id, _)| id)
}

/// Whether a slot prefers a new proposer over an incumbent holder
///
/// Without a declared ranking the proposer always wins. With one, a
/// strictly lower rank wins; two unlisted candidates compare equal at the
/// sentinel rank and the incumbent is kept.
pub fn prefers(entry: &SlotEntry<'_>, proposer: ApplicantId, incumbent: ApplicantId) -> bool {
    if !entry.has_ranking() {
        return true;
    }
    entry.rank_of(proposer) < entry.rank_of(incumbent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::PreferenceIndex;
    use types::applicant::Applicant;
    use types::ids::SlotId;
    use types::slot::Slot;

    fn ids(raw: &[u64]) -> Vec<ApplicantId> {
        raw.iter().map(|&id| ApplicantId::new(id)).collect()
    }

    fn index_for(slot: Slot) -> (Vec<Applicant>, Vec<Slot>) {
        (Vec::new(), vec![slot])
    }

    #[test]
    fn test_worst_holder_without_ranking_is_first_in_order() {
        let (applicants, slots) = index_for(Slot::new(SlotId::new(10), 2, Vec::new()));
        let index = PreferenceIndex::build(&applicants, &slots);
        let entry = index.slot(SlotId::new(10)).unwrap();

        let holders = ids(&[5, 3, 8]);
        assert_eq!(worst_holder(entry, &holders), Some(ApplicantId::new(5)));
    }

    #[test]
    fn test_worst_holder_empty_holders() {
        let (applicants, slots) = index_for(Slot::new(SlotId::new(10), 0, Vec::new()));
        let index = PreferenceIndex::build(&applicants, &slots);
        let entry = index.slot(SlotId::new(10)).unwrap();

        assert_eq!(worst_holder(entry, &[]), None);
    }

    #[test]
    fn test_worst_holder_follows_declared_ranking() {
        let (applicants, slots) = index_for(Slot::new(SlotId::new(10), 3, ids(&[1, 2, 3])));
        let index = PreferenceIndex::build(&applicants, &slots);
        let entry = index.slot(SlotId::new(10)).unwrap();

        // 3 carries the largest rank even though it sits in the middle
        let holders = ids(&[2, 3, 1]);
        assert_eq!(worst_holder(entry, &holders), Some(ApplicantId::new(3)));
    }

    #[test]
    fn test_unlisted_holder_is_worst() {
        let (applicants, slots) = index_for(Slot::new(SlotId::new(10), 2, ids(&[1, 2])));
        let index = PreferenceIndex::build(&applicants, &slots);
        let entry = index.slot(SlotId::new(10)).unwrap();

        let holders = ids(&[1, 9]);
        assert_eq!(worst_holder(entry, &holders), Some(ApplicantId::new(9)));
    }

    #[test]
    fn test_sentinel_tie_picks_first_encountered() {
        let (applicants, slots) = index_for(Slot::new(SlotId::new(10), 2, ids(&[1])));
        let index = PreferenceIndex::build(&applicants, &slots);
        let entry = index.slot(SlotId::new(10)).unwrap();

        // Both unlisted: the scan keeps the first one it saw
        let holders = ids(&[7, 9]);
        assert_eq!(worst_holder(entry, &holders), Some(ApplicantId::new(7)));
    }

    #[test]
    fn test_prefers_without_ranking_favors_proposer() {
        let (applicants, slots) = index_for(Slot::new(SlotId::new(10), 1, Vec::new()));
        let index = PreferenceIndex::build(&applicants, &slots);
        let entry = index.slot(SlotId::new(10)).unwrap();

        assert!(prefers(entry, ApplicantId::new(2), ApplicantId::new(1)));
    }

    #[test]
    fn test_prefers_follows_declared_ranking() {
        let (applicants, slots) = index_for(Slot::new(SlotId::new(10), 1, ids(&[2, 1])));
        let index = PreferenceIndex::build(&applicants, &slots);
        let entry = index.slot(SlotId::new(10)).unwrap();

        assert!(prefers(entry, ApplicantId::new(2), ApplicantId::new(1)));
        assert!(!prefers(entry, ApplicantId::new(1), ApplicantId::new(2)));
    }

    #[test]
    fn test_prefers_sentinel_tie_keeps_incumbent() {
        let (applicants, slots) = index_for(Slot::new(SlotId::new(10), 1, ids(&[3])));
        let index = PreferenceIndex::build(&applicants, &slots);
        let entry = index.slot(SlotId::new(10)).unwrap();

        // Neither candidate is listed: the incumbent stays
        assert!(!prefers(entry, ApplicantId::new(1), ApplicantId::new(2)));
    }

    #[test]
    fn test_listed_proposer_beats_unlisted_incumbent() {
        let (applicants, slots) = index_for(Slot::new(SlotId::new(10), 1, ids(&[4])));
        let index = PreferenceIndex::build(&applicants, &slots);
        let entry = index.slot(SlotId::new(10)).unwrap();

        assert!(prefers(entry, ApplicantId::new(4), ApplicantId::new(9)));
        assert!(!prefers(entry, ApplicantId::new(9), ApplicantId::new(4)));
    }
}

//! Priority ranking for fetched changes
//!
//! Drops the changes a reviewer cannot act on and orders the rest: CI-clean
//! changes first, oldest first within the same CI status. A change whose
//! gate system failed is the author's problem, not the reviewer's, so it
//! sinks to the bottom rather than disappearing.

use crate::models::ChangeRecord;

/// Names the CI accounts the ranking pays attention to
#[derive(Debug, Clone)]
pub struct RankPolicy {
    /// Primary gate system; a failing verdict demotes the change
    pub gate_system: String,

    /// Secondary smoke system; a failing verdict demotes the change, but a
    /// missing one is neutral (the smoke system is lazy and may not have
    /// looked at every change)
    pub smoke_system: String,
}

impl Default for RankPolicy {
    fn default() -> Self {
        Self {
            gate_system: "jenkins".to_string(),
            smoke_system: "smokestack".to_string(),
        }
    }
}

impl RankPolicy {
    /// Drop non-actionable changes and order the rest, highest priority first
    ///
    /// A change is not actionable when it is work-in-progress or carries a
    /// blocking -2 vote. The remaining changes sort by: gate not failing,
    /// then smoke not failing, then creation time ascending, then change
    /// number ascending. The number tie-break exists only for determinism.
    ///
    /// Deterministic for a given input; ranking an already-ranked list is a
    /// fixed point.
    #[must_use]
    pub fn rank(&self, changes: Vec<ChangeRecord>) -> Vec<ChangeRecord> {
        let mut actionable: Vec<ChangeRecord> = changes
            .into_iter()
            .filter(|c| !c.work_in_progress && !c.review_blocked)
            .collect();

        actionable.sort_by_key(|c| {
            (
                c.verdict_for(&self.gate_system).is_failing(),
                c.verdict_for(&self.smoke_system).is_failing(),
                c.created_on,
                c.number,
            )
        });

        actionable
    }
}

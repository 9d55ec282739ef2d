//! Progress snapshot derived from the attempt log.

use super::{AttemptRecord, PlanEntry, SessionKey};

/// What the user should attempt next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upcoming {
    /// No normal attempt logged yet; the first plan entry is suggested
    Start(PlanEntry),

    /// The next session after the last normal attempt
    Scheduled(PlanEntry),

    /// The next session was computed but the plan has no such entry
    NotInPlan(SessionKey),

    /// The last normal attempt was the final session of the plan
    PlanComplete,

    /// Nothing logged and the plan is empty
    NoPlan,
}

impl Upcoming {
    /// The plan entry to run, if one is known.
    pub fn entry(&self) -> Option<&PlanEntry> {
        match self {
            Upcoming::Start(entry) | Upcoming::Scheduled(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Summary of where the user stands in the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Most recent attempt of any kind
    pub last_attempt: Option<AttemptRecord>,

    /// Most recent attempt that is not a TEST
    pub last_normal: Option<AttemptRecord>,

    /// Whether a max test is recommended now
    pub suggest_test: bool,

    /// Session to attempt next
    pub upcoming: Upcoming,
}

//! Per-set results collected while running a session.

use serde::{Deserialize, Serialize};

/// Repetitions performed for one set against its target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetResult {
    /// Repetitions actually performed
    pub actual: u32,

    /// Minimum repetitions the plan asked for
    pub required: u32,
}

impl SetResult {
    pub fn new(actual: u32, required: u32) -> Self {
        Self { actual, required }
    }

    /// Whether the set met its target.
    pub fn is_met(&self) -> bool {
        self.actual >= self.required
    }

    /// Whether the set was attempted but fell short of its target.
    pub fn is_short(&self) -> bool {
        self.actual > 0 && self.actual < self.required
    }
}

/// Results of walking through a plan entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRun {
    /// Results of the sets reached, in order
    pub results: Vec<SetResult>,

    /// False when the operator quit before the last set
    pub completed: bool,
}

impl SessionRun {
    /// Actual repetitions per set, as stored in the log.
    pub fn actuals(&self) -> Vec<u32> {
        self.results.iter().map(|r| r.actual).collect()
    }
}

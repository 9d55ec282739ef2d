//! Outcome enumeration for logged attempts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Type-safe enumeration of attempt outcomes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    /// Every set met its target
    Success,

    /// Session completed with at least one set short of target but above zero
    Partial,

    /// Session quit early, or completed without meeting targets
    Incomplete,

    /// Single-set max-effort test outside the weekly plan
    Test,
}

impl Outcome {
    /// All outcomes in the order they are offered to the user.
    pub const ALL: [Outcome; 4] = [
        Outcome::Success,
        Outcome::Partial,
        Outcome::Incomplete,
        Outcome::Test,
    ];

    /// Convert to the representation stored in the attempt log.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Partial => "PARTIAL",
            Outcome::Incomplete => "INCOMPLETE",
            Outcome::Test => "TEST",
        }
    }

    /// Short tag used in compact listings and the progress chart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pushups_core::models::Outcome;
    ///
    /// assert_eq!(Outcome::Success.tag(), "✓");
    /// assert_eq!(Outcome::Test.tag(), "T");
    /// ```
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Success => "✓",
            Outcome::Partial => "~",
            Outcome::Incomplete => "✗",
            Outcome::Test => "T",
        }
    }
}

impl FromStr for Outcome {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SUCCESS" => Ok(Outcome::Success),
            "PARTIAL" => Ok(Outcome::Partial),
            "INCOMPLETE" => Ok(Outcome::Incomplete),
            "TEST" => Ok(Outcome::Test),
            _ => Err(TrackerError::InvalidOutcome {
                value: s.to_string(),
            }),
        }
    }
}

//! Display implementations for domain models.
//!
//! Output is markdown meant for the CLI's terminal renderer.

use std::fmt;

use super::datetime::LogTimestamp;
use crate::models::{AttemptRecord, Outcome, PlanEntry, SessionKey};

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Week {}, Day {}, Column {}",
            self.week, self.day, self.column
        )
    }
}

impl fmt::Display for PlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.key())?;
        writeln!(f)?;
        writeln!(f, "- Sets: {}", self.sets.join(", "))?;
        writeln!(f, "- Rest: {}", self.rest)?;
        writeln!(f)
    }
}

impl AttemptRecord {
    /// Set counts joined the way the log stores them.
    pub fn sets_label(&self) -> String {
        self.sets_completed
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// One-line summary, without trailing newline.
impl fmt::Display for AttemptRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            LogTimestamp(&self.timestamp),
            self.outcome.tag(),
            self.outcome
        )?;
        if self.is_test() {
            write!(f, " single-set max: {}", self.total_reps())
        } else {
            write!(
                f,
                " {}: {} ({} reps)",
                self.key(),
                self.sets_label(),
                self.total_reps()
            )
        }
    }
}

//! Progress status report and short confirmation messages.

use std::fmt;

use super::datetime::LogTimestamp;
use crate::models::{Status, Upcoming};

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Last Attempt")?;
        writeln!(f)?;
        match &self.last_attempt {
            None => writeln!(f, "No attempts have been logged yet.")?,
            Some(last) if last.is_test() => {
                writeln!(f, "- Date/Time: {}", LogTimestamp(&last.timestamp))?;
                writeln!(
                    f,
                    "- Recent attempt was a TEST: single-set max = {}",
                    last.total_reps()
                )?;
            }
            Some(last) => {
                writeln!(f, "- Date/Time: {}", LogTimestamp(&last.timestamp))?;
                writeln!(f, "- Session: {}", last.key())?;
                writeln!(f, "- Outcome: {} {}", last.outcome.tag(), last.outcome)?;
                writeln!(f, "- Sets Completed: {}", last.sets_label())?;
                writeln!(f, "- Total Pushups: {}", last.total_reps())?;
            }
        }

        if self.suggest_test {
            if let Some(normal) = &self.last_normal {
                writeln!(f)?;
                writeln!(
                    f,
                    "**NOTE:** The 100 Pushups Challenge recommends a TEST attempt after \
                     completing Week {}, Day {} successfully.",
                    normal.week, normal.day
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "## Upcoming Session")?;
        writeln!(f)?;
        match &self.upcoming {
            Upcoming::Start(entry) | Upcoming::Scheduled(entry) => {
                if matches!(self.upcoming, Upcoming::Start(_)) {
                    writeln!(f, "Start the plan with:")?;
                    writeln!(f)?;
                }
                write!(f, "{entry}")
            }
            Upcoming::NotInPlan(key) => writeln!(f, "No plan entry found for {key}."),
            Upcoming::PlanComplete => writeln!(
                f,
                "You finished the final week of the plan. Take a TEST to measure your max."
            ),
            Upcoming::NoPlan => writeln!(f, "The plan is empty; no sessions available."),
        }
    }
}

/// Wrapper type for displaying a failed operation inside an interactive loop.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.message)
    }
}

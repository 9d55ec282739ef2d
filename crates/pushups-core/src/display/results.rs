//! Result wrapper types for displaying operation outcomes.

use std::{fmt, path::Path};

use crate::{
    attempt_log::{EditAction, MergeSummary},
    models::AttemptRecord,
};

/// Wrapper type for displaying a newly logged attempt.
///
/// # Examples
///
/// ```rust
/// use pushups_core::{display::LoggedResult, models::AttemptRecord};
/// use jiff::civil::date;
///
/// let record = AttemptRecord::test(date(2025, 1, 24).at(9, 0, 0, 0), 32);
/// let output = LoggedResult::new(&record).to_string();
/// assert!(output.contains("Logged TEST"));
/// ```
pub struct LoggedResult<'a> {
    pub record: &'a AttemptRecord,
}

impl<'a> LoggedResult<'a> {
    pub fn new(record: &'a AttemptRecord) -> Self {
        Self { record }
    }
}

impl fmt::Display for LoggedResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        if record.is_test() {
            return writeln!(
                f,
                "Logged TEST attempt: single-set max = {}",
                record.total_reps()
            );
        }

        writeln!(
            f,
            "Logged {} {} for {}",
            record.outcome.tag(),
            record.outcome,
            record.key()
        )?;
        writeln!(f)?;
        writeln!(f, "- Sets: {}", record.sets_label())?;
        writeln!(f, "- Total: {} reps", record.total_reps())
    }
}

/// Wrapper type for displaying the result of an attempt edit.
pub struct EditResult<'a> {
    pub index: usize,
    pub action: EditAction,
    pub record: &'a AttemptRecord,
}

impl<'a> EditResult<'a> {
    pub fn new(index: usize, action: EditAction, record: &'a AttemptRecord) -> Self {
        Self {
            index,
            action,
            record,
        }
    }
}

impl fmt::Display for EditResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            EditAction::Remove => {
                writeln!(f, "Removed attempt `[{}]`: {}", self.index, self.record)
            }
            EditAction::SetOutcome(outcome) => writeln!(
                f,
                "Updated attempt `[{}]` to {}: {}",
                self.index, outcome, self.record
            ),
        }
    }
}

/// Wrapper type for displaying the counts of an import.
pub struct ImportResult<'a> {
    pub source: &'a Path,
    pub summary: MergeSummary,
}

impl<'a> ImportResult<'a> {
    pub fn new(source: &'a Path, summary: MergeSummary) -> Self {
        Self { source, summary }
    }
}

impl fmt::Display for ImportResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} attempt(s) from '{}'",
            self.summary.imported,
            self.source.display()
        )?;
        if self.summary.duplicates > 0 {
            writeln!(
                f,
                "Skipped {} attempt(s) already in the log",
                self.summary.duplicates
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Outcome;

    fn record() -> AttemptRecord {
        AttemptRecord {
            timestamp: date(2025, 1, 24).at(9, 0, 0, 0),
            week: 3,
            day: 2,
            column: "1".to_string(),
            outcome: Outcome::Success,
            sets_completed: vec![14, 16, 12, 12, 20],
        }
    }

    #[test]
    fn test_logged_result_display() {
        let record = record();
        let output = LoggedResult::new(&record).to_string();

        assert!(output.starts_with("Logged ✓ SUCCESS for Week 3, Day 2, Column 1\n"));
        assert!(output.contains("- Sets: 14|16|12|12|20"));
        assert!(output.contains("- Total: 74 reps"));
    }

    #[test]
    fn test_edit_result_display() {
        let record = record();
        let removed = EditResult::new(4, EditAction::Remove, &record).to_string();
        assert!(removed.starts_with("Removed attempt `[4]`:"));

        let updated =
            EditResult::new(2, EditAction::SetOutcome(Outcome::Partial), &record).to_string();
        assert!(updated.starts_with("Updated attempt `[2]` to PARTIAL:"));
    }

    #[test]
    fn test_import_result_display() {
        let summary = MergeSummary {
            imported: 3,
            duplicates: 0,
        };
        let output = ImportResult::new(Path::new("old.csv"), summary).to_string();
        assert_eq!(output, "Imported 3 attempt(s) from 'old.csv'\n");

        let summary = MergeSummary {
            imported: 0,
            duplicates: 2,
        };
        let output = ImportResult::new(Path::new("old.csv"), summary).to_string();
        assert!(output.contains("Skipped 2 attempt(s)"));
    }
}

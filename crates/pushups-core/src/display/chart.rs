//! Text bar chart of logged attempts.

use std::fmt;

use super::datetime::LogDate;
use crate::models::AttemptRecord;

/// Widest bar drawn, in characters.
pub const DEFAULT_CHART_WIDTH: usize = 50;

const FILL: char = '█';
const SET_MARK: char = '│';

/// Bar chart of total repetitions per attempt, in chronological order.
///
/// Each line shows the attempt date, its outcome tag, a bar scaled to the
/// largest total and the total itself. A `│` marks where each set ends
/// within the bar.
///
/// ```text
/// 2025-01-24 ✓ ██│███│██│██│███ 12
/// 2025-01-27 T ██████████████ 31
/// ```
pub struct ProgressChart<'a> {
    records: &'a [AttemptRecord],
    suggest_test: bool,
    width: usize,
}

impl<'a> ProgressChart<'a> {
    pub fn new(records: &'a [AttemptRecord]) -> Self {
        Self {
            records,
            suggest_test: false,
            width: DEFAULT_CHART_WIDTH,
        }
    }

    /// Add the test recommendation note under the title.
    pub fn with_test_suggestion(mut self, suggest_test: bool) -> Self {
        self.suggest_test = suggest_test;
        self
    }

    /// Set the width of the longest bar.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Bar for one attempt, scaled so that `max_total` fills the width.
    fn bar(&self, record: &AttemptRecord, max_total: u32) -> String {
        let scale = |reps: u32| -> usize {
            if max_total == 0 {
                0
            } else {
                let scaled = u64::from(reps)
                    .saturating_mul(self.width as u64)
                    .saturating_add(u64::from(max_total) / 2);
                (scaled / u64::from(max_total)) as usize
            }
        };

        let mut bar = String::new();
        let mut cumulative = 0u32;
        let mut drawn = 0usize;
        for (i, &count) in record.sets_completed.iter().enumerate() {
            if i > 0 {
                bar.push(SET_MARK);
            }
            cumulative = cumulative.saturating_add(count);
            let end = scale(cumulative);
            bar.extend(std::iter::repeat(FILL).take(end.saturating_sub(drawn)));
            drawn = drawn.max(end);
        }
        bar
    }
}

impl fmt::Display for ProgressChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 100 Pushups Progress (by Date)")?;
        writeln!(f)?;
        if self.suggest_test {
            writeln!(f, "*A test is suggested based on recent progression.*")?;
            writeln!(f)?;
        }

        if self.records.is_empty() {
            return writeln!(f, "No attempts found in the log.");
        }

        let max_total = self
            .records
            .iter()
            .map(AttemptRecord::total_reps)
            .max()
            .unwrap_or(0);

        writeln!(f, "```")?;
        for record in self.records {
            let bar = self.bar(record, max_total);
            let separator = if bar.is_empty() { "" } else { " " };
            writeln!(
                f,
                "{} {} {bar}{separator}{}",
                LogDate(&record.timestamp),
                record.outcome.tag(),
                record.total_reps()
            )?;
        }
        writeln!(f, "```")
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Outcome;

    fn record(day: i8, outcome: Outcome, sets: &[u32]) -> AttemptRecord {
        AttemptRecord {
            timestamp: date(2025, 1, day).at(9, 0, 0, 0),
            week: 1,
            day: 1,
            column: "1".to_string(),
            outcome,
            sets_completed: sets.to_vec(),
        }
    }

    #[test]
    fn test_empty_chart() {
        let output = ProgressChart::new(&[]).to_string();
        assert!(output.contains("No attempts found in the log."));
    }

    #[test]
    fn test_bars_mark_set_boundaries() {
        let records = vec![record(24, Outcome::Success, &[2, 3, 5])];
        let output = ProgressChart::new(&records).with_width(10).to_string();

        assert!(output.contains("2025-01-24 ✓ ██│███│█████ 10\n"));
    }

    #[test]
    fn test_bars_scale_to_largest_total() {
        let records = vec![
            record(24, Outcome::Partial, &[5]),
            AttemptRecord::test(date(2025, 1, 25).at(9, 0, 0, 0), 10),
        ];
        let output = ProgressChart::new(&records).with_width(10).to_string();

        assert!(output.contains("2025-01-24 ~ █████ 5\n"));
        assert!(output.contains("2025-01-25 T ██████████ 10\n"));
    }

    #[test]
    fn test_zero_rep_attempt() {
        let records = vec![record(24, Outcome::Incomplete, &[])];
        let output = ProgressChart::new(&records).to_string();
        assert!(output.contains("2025-01-24 ✗ 0\n"));
    }

    #[test]
    fn test_huge_counts_fill_the_bar() {
        let records = vec![record(24, Outcome::Success, &[5, u32::MAX])];
        let output = ProgressChart::new(&records).with_width(10).to_string();
        assert!(output.contains("2025-01-24 ✓ │██████████ 4294967295\n"));
    }

    #[test]
    fn test_suggestion_note() {
        let records = vec![record(24, Outcome::Success, &[1])];
        let with_note = ProgressChart::new(&records)
            .with_test_suggestion(true)
            .to_string();
        let without = ProgressChart::new(&records).to_string();

        assert!(with_note.contains("A test is suggested"));
        assert!(!without.contains("A test is suggested"));
    }
}

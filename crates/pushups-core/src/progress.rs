//! Read-only progress facts derived from logged attempts.

use crate::{
    models::{AttemptRecord, Outcome, SessionKey, Upcoming},
    plan::{PlanCatalog, DEFAULT_FINAL_WEEK},
};

/// Days per plan week.
const DAYS_PER_WEEK: i32 = 3;

/// Sessions after which a max test is recommended, as (week, day).
const TEST_CHECKPOINTS: [(i32, i32); 2] = [(2, 3), (4, 3)];

/// Session following a logged attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextSession {
    /// Attempt this session next
    Scheduled(SessionKey),
    /// The attempt was on the final day of the final week
    PlanComplete,
}

/// Derives next-session and test recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReporter {
    final_week: i32,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(DEFAULT_FINAL_WEEK)
    }
}

impl ProgressReporter {
    pub fn new(final_week: i32) -> Self {
        Self { final_week }
    }

    /// Reporter whose plan ends at the last week of `catalog`.
    pub fn for_catalog(catalog: &PlanCatalog) -> Self {
        Self::new(catalog.final_week().unwrap_or(DEFAULT_FINAL_WEEK))
    }

    pub fn final_week(&self) -> i32 {
        self.final_week
    }

    /// The session after `last`: the next day of the same week, or day 1 of
    /// the following week. The column is carried over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pushups_core::{progress::{NextSession, ProgressReporter}, models::SessionKey};
    ///
    /// let reporter = ProgressReporter::new(6);
    /// assert_eq!(
    ///     reporter.next_key(&SessionKey::new(2, 3, "2")),
    ///     NextSession::Scheduled(SessionKey::new(3, 1, "2")),
    /// );
    /// assert_eq!(reporter.next_key(&SessionKey::new(6, 3, "1")), NextSession::PlanComplete);
    /// ```
    pub fn next_key(&self, last: &SessionKey) -> NextSession {
        let (week, day) = if last.day < DAYS_PER_WEEK {
            (last.week, last.day + 1)
        } else {
            (last.week.saturating_add(1), 1)
        };
        if week > self.final_week {
            NextSession::PlanComplete
        } else {
            NextSession::Scheduled(SessionKey::new(week, day, last.column.clone()))
        }
    }

    /// The session after a logged attempt.
    pub fn next_session(&self, last: &AttemptRecord) -> NextSession {
        self.next_key(&last.key())
    }

    /// Whether a max test is due after the last normal attempt.
    pub fn suggest_test(&self, last_normal: Option<&AttemptRecord>) -> bool {
        last_normal.is_some_and(|record| {
            record.outcome == Outcome::Success
                && TEST_CHECKPOINTS.contains(&(record.week, record.day))
        })
    }

    /// Total repetitions of an attempt.
    pub fn total_reps(&self, record: &AttemptRecord) -> u32 {
        record.total_reps()
    }

    /// The plan entry to attempt next.
    ///
    /// Without a prior normal attempt this is the first entry of the plan.
    pub fn upcoming(&self, last_normal: Option<&AttemptRecord>, catalog: &PlanCatalog) -> Upcoming {
        let Some(last) = last_normal else {
            return match catalog.first() {
                Some(entry) => Upcoming::Start(entry.clone()),
                None => Upcoming::NoPlan,
            };
        };

        match self.next_session(last) {
            NextSession::PlanComplete => Upcoming::PlanComplete,
            NextSession::Scheduled(key) => match catalog.find(&key) {
                Some(entry) => Upcoming::Scheduled(entry.clone()),
                None => Upcoming::NotInPlan(key),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn attempt(week: i32, day: i32, column: &str, outcome: Outcome) -> AttemptRecord {
        AttemptRecord {
            timestamp: date(2025, 1, 24).at(9, 0, 0, 0),
            week,
            day,
            column: column.to_string(),
            outcome,
            sets_completed: vec![10, 10, 8],
        }
    }

    fn scheduled(week: i32, day: i32, column: &str) -> NextSession {
        NextSession::Scheduled(SessionKey::new(week, day, column))
    }

    #[test]
    fn test_next_session_advances_day() {
        let reporter = ProgressReporter::default();
        assert_eq!(
            reporter.next_session(&attempt(2, 2, "1", Outcome::Success)),
            scheduled(2, 3, "1")
        );
        assert_eq!(
            reporter.next_session(&attempt(1, 1, "1", Outcome::Success)),
            scheduled(1, 2, "1")
        );
    }

    #[test]
    fn test_next_session_rolls_over_week() {
        let reporter = ProgressReporter::default();
        assert_eq!(
            reporter.next_session(&attempt(2, 3, "3", Outcome::Incomplete)),
            scheduled(3, 1, "3")
        );
    }

    #[test]
    fn test_next_session_past_final_week_is_complete() {
        let reporter = ProgressReporter::default();
        assert_eq!(
            reporter.next_session(&attempt(6, 3, "2", Outcome::Success)),
            NextSession::PlanComplete
        );
        assert_eq!(
            ProgressReporter::new(8).next_session(&attempt(6, 3, "2", Outcome::Success)),
            scheduled(7, 1, "2")
        );
    }

    #[test]
    fn test_next_session_at_largest_week() {
        let reporter = ProgressReporter::default();
        assert_eq!(
            reporter.next_key(&SessionKey::new(i32::MAX, 3, "1")),
            NextSession::PlanComplete
        );
    }

    #[test]
    fn test_suggest_test_checkpoints() {
        let reporter = ProgressReporter::default();
        assert!(reporter.suggest_test(Some(&attempt(2, 3, "1", Outcome::Success))));
        assert!(reporter.suggest_test(Some(&attempt(4, 3, "2", Outcome::Success))));

        assert!(!reporter.suggest_test(Some(&attempt(2, 3, "1", Outcome::Partial))));
        assert!(!reporter.suggest_test(Some(&attempt(3, 3, "1", Outcome::Success))));
        assert!(!reporter.suggest_test(None));
    }

    #[test]
    fn test_total_reps() {
        let reporter = ProgressReporter::default();
        assert_eq!(reporter.total_reps(&attempt(1, 1, "1", Outcome::Success)), 28);
    }

    #[test]
    fn test_upcoming_without_attempts_starts_plan() {
        let catalog = PlanCatalog::bundled();
        let reporter = ProgressReporter::for_catalog(&catalog);

        match reporter.upcoming(None, &catalog) {
            Upcoming::Start(entry) => assert_eq!(entry.key(), SessionKey::new(1, 1, "1")),
            other => panic!("unexpected upcoming: {other:?}"),
        }
        assert_eq!(
            reporter.upcoming(None, &PlanCatalog::default()),
            Upcoming::NoPlan
        );
    }

    #[test]
    fn test_upcoming_after_attempt() {
        let catalog = PlanCatalog::bundled();
        let reporter = ProgressReporter::for_catalog(&catalog);
        let last = attempt(1, 1, "1", Outcome::Success);

        let upcoming = reporter.upcoming(Some(&last), &catalog);
        assert_eq!(
            upcoming.entry().map(|e| e.key()),
            Some(SessionKey::new(1, 2, "1"))
        );
    }

    #[test]
    fn test_upcoming_missing_entry() {
        let catalog = PlanCatalog::bundled();
        let reporter = ProgressReporter::for_catalog(&catalog);
        let last = attempt(1, 1, "9", Outcome::Success);

        assert_eq!(
            reporter.upcoming(Some(&last), &catalog),
            Upcoming::NotInPlan(SessionKey::new(1, 2, "9"))
        );
    }

    #[test]
    fn test_upcoming_at_end_of_plan() {
        let catalog = PlanCatalog::bundled();
        let reporter = ProgressReporter::for_catalog(&catalog);
        assert_eq!(
            reporter.upcoming(Some(&attempt(6, 3, "1", Outcome::Success)), &catalog),
            Upcoming::PlanComplete
        );
    }
}

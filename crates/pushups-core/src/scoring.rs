//! Session outcome classification.

use crate::models::{Outcome, SessionRun, SetResult};

/// Classify the results of a session.
///
/// Rules, in order:
/// 1. a session that was not completed is [`Outcome::Incomplete`];
/// 2. so is a session without results;
/// 3. every set at or above target is [`Outcome::Success`];
/// 4. with partial success enabled, any set with `0 < actual < required`
///    makes it [`Outcome::Partial`];
/// 5. anything else is [`Outcome::Incomplete`].
///
/// # Examples
///
/// ```rust
/// use pushups_core::{classify, models::{Outcome, SetResult}};
///
/// let results = [SetResult::new(5, 10), SetResult::new(8, 8)];
/// assert_eq!(classify(&results, true, true), Outcome::Partial);
/// assert_eq!(classify(&results, true, false), Outcome::Incomplete);
/// ```
pub fn classify(results: &[SetResult], completed: bool, partial_enabled: bool) -> Outcome {
    if !completed || results.is_empty() {
        return Outcome::Incomplete;
    }
    if results.iter().all(SetResult::is_met) {
        return Outcome::Success;
    }
    if partial_enabled && results.iter().any(SetResult::is_short) {
        Outcome::Partial
    } else {
        Outcome::Incomplete
    }
}

/// Classifier bound to the partial-success setting of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeClassifier {
    partial_enabled: bool,
}

impl OutcomeClassifier {
    pub fn new(partial_enabled: bool) -> Self {
        Self { partial_enabled }
    }

    /// Classify a finished or aborted session run.
    pub fn classify(&self, run: &SessionRun) -> Outcome {
        classify(&run.results, run.completed, self.partial_enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(pairs: &[(u32, u32)]) -> Vec<SetResult> {
        pairs
            .iter()
            .map(|&(actual, required)| SetResult::new(actual, required))
            .collect()
    }

    #[test]
    fn test_not_completed_is_incomplete() {
        for partial in [true, false] {
            assert_eq!(classify(&[], false, partial), Outcome::Incomplete);
            assert_eq!(
                classify(&results(&[(10, 10)]), false, partial),
                Outcome::Incomplete
            );
        }
    }

    #[test]
    fn test_empty_results_are_incomplete() {
        assert_eq!(classify(&[], true, true), Outcome::Incomplete);
    }

    #[test]
    fn test_all_met_is_success() {
        for partial in [true, false] {
            assert_eq!(
                classify(&results(&[(10, 10), (8, 8)]), true, partial),
                Outcome::Success
            );
        }
        assert_eq!(
            classify(&results(&[(12, 10), (9, 8)]), true, true),
            Outcome::Success
        );
    }

    #[test]
    fn test_short_set_is_partial_when_enabled() {
        assert_eq!(
            classify(&results(&[(5, 10), (8, 8)]), true, true),
            Outcome::Partial
        );
    }

    #[test]
    fn test_zero_reps_excludes_partial() {
        assert_eq!(
            classify(&results(&[(0, 10), (8, 8)]), true, true),
            Outcome::Incomplete
        );
    }

    #[test]
    fn test_short_set_is_incomplete_when_disabled() {
        assert_eq!(
            classify(&results(&[(5, 10)]), true, false),
            Outcome::Incomplete
        );
    }

    #[test]
    fn test_zero_target_counts_as_met() {
        // Unparseable targets degrade to 0 and never fail a set
        assert_eq!(classify(&results(&[(0, 0)]), true, true), Outcome::Success);
    }

    #[test]
    fn test_classifier_uses_run() {
        let run = SessionRun {
            results: results(&[(4, 4), (3, 5)]),
            completed: true,
        };
        assert_eq!(OutcomeClassifier::new(true).classify(&run), Outcome::Partial);
        assert_eq!(
            OutcomeClassifier::new(false).classify(&run),
            Outcome::Incomplete
        );
    }
}

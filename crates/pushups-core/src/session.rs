//! Guided walk through the sets of a plan entry.
//!
//! The runner owns no I/O of its own. Operator interaction goes through
//! [`SetPrompt`] and rest periods through [`RestTimer`], both implemented by
//! the same value so a console front end can share one input stream.

use std::io;

use crate::{
    models::{PlanEntry, SessionRun, SetResult},
    plan::{is_max_spec, parse_minimum, RestSpec},
};

/// Operator answer for a fixed-target set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetAction {
    /// The set was done as planned
    Completed,
    /// Stop the session here
    Quit,
}

/// Operator interaction for the sets of a session.
pub trait SetPrompt {
    /// Ask the operator to confirm set `number` (1-based) or quit.
    fn confirm_set(&mut self, number: usize, spec: &str) -> io::Result<SetAction>;

    /// Ask how many repetitions were done in the final open-ended set.
    ///
    /// There is no quit path here: an answer is always a count.
    fn final_set_count(&mut self, number: usize, spec: &str) -> io::Result<u32>;
}

/// Rest between sets. Skipping or cutting the rest short never changes the
/// recorded results.
pub trait RestTimer {
    fn rest(&mut self, rest: &RestSpec, upcoming: &str) -> io::Result<()>;
}

/// Walks an operator through one plan entry.
pub struct SessionRunner<'a, I> {
    io: &'a mut I,
}

impl<'a, I> SessionRunner<'a, I>
where
    I: SetPrompt + RestTimer,
{
    pub fn new(io: &'a mut I) -> Self {
        Self { io }
    }

    /// Run every set of `entry` in order.
    ///
    /// Fixed sets record `actual = required` when confirmed. A final `MAX≥K`
    /// set records the count the operator enters. Quitting returns the
    /// results collected so far with `completed = false`.
    pub fn run(&mut self, entry: &PlanEntry) -> io::Result<SessionRun> {
        let total = entry.sets.len();
        let rest = entry.rest_spec();
        let mut results = Vec::with_capacity(total);

        for (index, spec) in entry.sets.iter().enumerate() {
            let number = index + 1;
            let required = parse_minimum(spec);

            if number == total && is_max_spec(spec) {
                let actual = self.io.final_set_count(number, spec)?;
                results.push(SetResult::new(actual, required));
            } else {
                match self.io.confirm_set(number, spec)? {
                    SetAction::Completed => results.push(SetResult::new(required, required)),
                    SetAction::Quit => {
                        return Ok(SessionRun {
                            results,
                            completed: false,
                        })
                    }
                }
            }

            if let Some(upcoming) = entry.sets.get(number) {
                self.io.rest(&rest, upcoming)?;
            }
        }

        Ok(SessionRun {
            results,
            completed: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Scripted operator: answers are consumed in order.
    #[derive(Default)]
    struct Script {
        confirmations: VecDeque<SetAction>,
        final_counts: VecDeque<u32>,
        rests: Vec<String>,
        asked: Vec<usize>,
    }

    impl Script {
        fn confirming(actions: &[SetAction], final_count: Option<u32>) -> Self {
            Self {
                confirmations: actions.iter().copied().collect(),
                final_counts: final_count.into_iter().collect(),
                ..Default::default()
            }
        }
    }

    impl SetPrompt for Script {
        fn confirm_set(&mut self, number: usize, _spec: &str) -> io::Result<SetAction> {
            self.asked.push(number);
            self.confirmations
                .pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        }

        fn final_set_count(&mut self, number: usize, _spec: &str) -> io::Result<u32> {
            self.asked.push(number);
            self.final_counts
                .pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        }
    }

    impl RestTimer for Script {
        fn rest(&mut self, _rest: &RestSpec, upcoming: &str) -> io::Result<()> {
            self.rests.push(upcoming.to_string());
            Ok(())
        }
    }

    fn entry(sets: &[&str]) -> PlanEntry {
        PlanEntry {
            week: 1,
            day: 1,
            column: "1".to_string(),
            sets: sets.iter().map(|s| s.to_string()).collect(),
            rest: "60s".to_string(),
        }
    }

    #[test]
    fn test_full_session_with_max_final_set() {
        use SetAction::Completed;
        let mut script = Script::confirming(&[Completed, Completed, Completed], Some(14));

        let run = SessionRunner::new(&mut script)
            .run(&entry(&["10", "12", "8", "MAX≥12"]))
            .expect("session should run");

        assert!(run.completed);
        assert_eq!(
            run.results,
            vec![
                SetResult::new(10, 10),
                SetResult::new(12, 12),
                SetResult::new(8, 8),
                SetResult::new(14, 12),
            ]
        );
        // Rest only between sets, announcing the next one
        assert_eq!(script.rests, vec!["12", "8", "MAX≥12"]);
        assert_eq!(script.asked, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_quit_returns_partial_results() {
        use SetAction::{Completed, Quit};
        let mut script = Script::confirming(&[Completed, Quit], None);

        let run = SessionRunner::new(&mut script)
            .run(&entry(&["10", "12", "8", "MAX≥12"]))
            .expect("session should run");

        assert!(!run.completed);
        assert_eq!(run.results, vec![SetResult::new(10, 10)]);
        assert_eq!(script.rests, vec!["12"]);
    }

    #[test]
    fn test_quit_on_first_set_yields_no_results() {
        let mut script = Script::confirming(&[SetAction::Quit], None);

        let run = SessionRunner::new(&mut script)
            .run(&entry(&["10", "MAX≥12"]))
            .expect("session should run");

        assert!(!run.completed);
        assert!(run.results.is_empty());
        assert!(script.rests.is_empty());
    }

    #[test]
    fn test_final_max_set_has_no_quit_path() {
        // Only one confirmation is scripted; the final set must ask for a count
        let mut script = Script::confirming(&[SetAction::Completed], Some(0));

        let run = SessionRunner::new(&mut script)
            .run(&entry(&["10", "MAX≥12"]))
            .expect("session should run");

        assert!(run.completed);
        assert_eq!(run.results[1], SetResult::new(0, 12));
    }

    #[test]
    fn test_max_spec_before_last_set_is_confirmed() {
        use SetAction::Completed;
        let mut script = Script::confirming(&[Completed, Completed], None);

        let run = SessionRunner::new(&mut script)
            .run(&entry(&["MAX≥5", "10"]))
            .expect("session should run");

        assert!(run.completed);
        assert_eq!(
            run.results,
            vec![SetResult::new(5, 5), SetResult::new(10, 10)]
        );
    }

    #[test]
    fn test_prompt_failure_propagates() {
        let mut script = Script::default();
        let err = SessionRunner::new(&mut script)
            .run(&entry(&["10"]))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}

//! End-to-end flows: run a session with a scripted operator, score it, log
//! it and read progress back.

use std::{collections::VecDeque, io};

use pushups_core::{
    models::{Outcome, SessionKey, Upcoming},
    NextSession, RestSpec, RestTimer, SessionRunner, SetAction, SetPrompt,
};

mod common;

/// Operator that confirms every fixed set and enters a fixed final count.
struct Operator {
    quit_at: Option<usize>,
    final_counts: VecDeque<u32>,
    rests: usize,
}

impl Operator {
    fn finishing_with(count: u32) -> Self {
        Self {
            quit_at: None,
            final_counts: VecDeque::from([count]),
            rests: 0,
        }
    }
}

impl SetPrompt for Operator {
    fn confirm_set(&mut self, number: usize, _spec: &str) -> io::Result<SetAction> {
        if self.quit_at == Some(number) {
            Ok(SetAction::Quit)
        } else {
            Ok(SetAction::Completed)
        }
    }

    fn final_set_count(&mut self, _number: usize, _spec: &str) -> io::Result<u32> {
        self.final_counts
            .pop_front()
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
    }
}

impl RestTimer for Operator {
    fn rest(&mut self, _rest: &RestSpec, _upcoming: &str) -> io::Result<()> {
        self.rests += 1;
        Ok(())
    }
}

#[tokio::test]
async fn test_first_session_then_next() {
    let (_temp_dir, tracker) = common::create_test_tracker().await;

    let status = tracker.status().await.expect("Failed to get status");
    let entry = match status.upcoming {
        Upcoming::Start(entry) => entry,
        other => panic!("unexpected upcoming: {other:?}"),
    };

    let mut operator = Operator::finishing_with(5);
    let run = SessionRunner::new(&mut operator)
        .run(&entry)
        .expect("Failed to run session");
    assert_eq!(operator.rests, entry.sets.len() - 1);

    let record = tracker
        .log_session(&entry.key(), &run)
        .await
        .expect("Failed to log session");
    assert_eq!(record.outcome, Outcome::Success);

    let last = tracker
        .last_normal_attempt()
        .await
        .expect("Failed to read last attempt")
        .expect("an attempt was logged");
    assert_eq!(
        tracker.reporter().next_session(&last),
        NextSession::Scheduled(SessionKey::new(1, 2, "1"))
    );
}

#[tokio::test]
async fn test_short_final_set_is_partial() {
    let (_temp_dir, tracker) = common::create_test_tracker().await;
    let entry = tracker
        .find_entry(&SessionKey::new(1, 1, "1"))
        .expect("bundled plan has week 1");

    // Final set target is MAX≥3
    let mut operator = Operator::finishing_with(1);
    let run = SessionRunner::new(&mut operator)
        .run(&entry)
        .expect("Failed to run session");
    let record = tracker
        .log_session(&entry.key(), &run)
        .await
        .expect("Failed to log session");

    assert_eq!(record.outcome, Outcome::Partial);
    assert_eq!(record.sets_completed.last(), Some(&1));
}

#[tokio::test]
async fn test_quit_session_is_logged_incomplete() {
    let (_temp_dir, tracker) = common::create_test_tracker().await;
    let entry = tracker
        .find_entry(&SessionKey::new(2, 1, "2"))
        .expect("bundled plan has week 2");

    let mut operator = Operator {
        quit_at: Some(3),
        final_counts: VecDeque::new(),
        rests: 0,
    };
    let run = SessionRunner::new(&mut operator)
        .run(&entry)
        .expect("Failed to run session");
    let record = tracker
        .log_session(&entry.key(), &run)
        .await
        .expect("Failed to log session");

    assert_eq!(record.outcome, Outcome::Incomplete);
    assert_eq!(record.sets_completed.len(), 2);
}

#[tokio::test]
async fn test_log_file_format_on_disk() {
    let (temp_dir, tracker) = common::create_test_tracker().await;
    tracker.log_test(27).await.expect("Failed to log test");

    let text = std::fs::read_to_string(common::log_path(&temp_dir)).expect("Failed to read log");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("timestamp,week,day,column,outcome,sets_completed")
    );
    let row = lines.next().expect("one attempt row");
    assert!(row.ends_with(",-1,-1,TEST,TEST,27"), "{row}");
    assert!(lines.next().is_none());
}

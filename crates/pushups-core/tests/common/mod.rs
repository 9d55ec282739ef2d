#![allow(dead_code)]

use std::path::PathBuf;

use pushups_core::{Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker with an isolated log file
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("attempt_log.csv");
    let tracker = TrackerBuilder::new()
        .with_log_path(Some(&log_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Path of the attempt log inside a test directory
pub fn log_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("attempt_log.csv")
}

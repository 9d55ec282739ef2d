//! Snapshot retention across many mutations.

use std::fs;

use pushups_core::{AttemptLog, AttemptRecord, BackupPolicy, EditAction, Outcome};
use tempfile::TempDir;

mod common;

#[test]
fn test_retention_keeps_at_most_configured_backups() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log = AttemptLog::new(
        common::log_path(&temp_dir),
        BackupPolicy {
            enabled: true,
            retain: 5,
        },
    );
    log.append(&AttemptRecord::test(
        jiff::civil::date(2025, 1, 1).at(9, 0, 0, 0),
        10,
    ))
    .expect("Failed to append");

    // Older snapshots with distinct names so same-second snapshots do not
    // hide the pruning
    for i in 0..8 {
        let path = temp_dir
            .path()
            .join(format!("attempt_log.csv.2020010{i}_000000.bak"));
        fs::write(&path, "").expect("Failed to write backup");
        let file = fs::File::options()
            .write(true)
            .open(&path)
            .expect("Failed to open backup");
        file.set_modified(
            std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000 + i),
        )
        .expect("Failed to set mtime");
    }

    log.edit(0, EditAction::SetOutcome(Outcome::Test))
        .expect("Failed to edit");

    let backups = log.backups().expect("Failed to list backups");
    assert_eq!(backups.len(), 5);
    let names: Vec<String> = backups
        .iter()
        .filter_map(|p| p.file_name()?.to_str().map(str::to_string))
        .collect();
    // The four newest fakes survive along with the fresh snapshot
    for i in 4..8 {
        assert!(
            names.contains(&format!("attempt_log.csv.2020010{i}_000000.bak")),
            "{names:?}"
        );
    }
    assert!(!names.iter().any(|n| n.starts_with("attempt_log.csv.20200100")));
}

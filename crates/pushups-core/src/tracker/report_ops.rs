//! Read-only queries for the Tracker.

use std::path::PathBuf;

use tokio::task;

use super::Tracker;
use crate::{
    error::{ConfigResultExt, Result, TrackerError},
    models::{AttemptRecord, PlanEntry, SessionKey, Status},
};

/// Number of attempts listed when no limit is given.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

impl Tracker {
    /// All logged attempts in chronological order. Indices into this list
    /// are the ones accepted by [`Tracker::edit_attempt`].
    pub async fn attempts(&self) -> Result<Vec<AttemptRecord>> {
        let log = self.attempt_log();

        task::spawn_blocking(move || log.load_all())
            .await
            .config_context("Task join error")?
    }

    /// The most recent attempt of any kind.
    pub async fn last_attempt(&self) -> Result<Option<AttemptRecord>> {
        let log = self.attempt_log();

        task::spawn_blocking(move || log.last())
            .await
            .config_context("Task join error")?
    }

    /// The most recent attempt that is not a TEST.
    pub async fn last_normal_attempt(&self) -> Result<Option<AttemptRecord>> {
        let log = self.attempt_log();

        task::spawn_blocking(move || log.last_non_test())
            .await
            .config_context("Task join error")?
    }

    /// The newest attempts, newest first.
    ///
    /// `None` uses [`DEFAULT_RECENT_LIMIT`].
    pub async fn recent_attempts(&self, limit: Option<usize>) -> Result<Vec<AttemptRecord>> {
        let log = self.attempt_log();
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);

        task::spawn_blocking(move || log.recent(limit))
            .await
            .config_context("Task join error")?
    }

    /// Where the user stands: last attempts, test suggestion and the next
    /// session.
    pub async fn status(&self) -> Result<Status> {
        let log = self.attempt_log();
        let catalog = self.catalog.clone();
        let reporter = self.reporter;

        task::spawn_blocking(move || {
            let records = log.load_all()?;
            let last_attempt = records.last().cloned();
            let last_normal = records.iter().rev().find(|r| !r.is_test()).cloned();

            Ok::<_, TrackerError>(Status {
                suggest_test: reporter.suggest_test(last_normal.as_ref()),
                upcoming: reporter.upcoming(last_normal.as_ref(), &catalog),
                last_attempt,
                last_normal,
            })
        })
        .await
        .config_context("Task join error")?
    }

    /// Snapshot files of the attempt log, oldest first.
    pub async fn backups(&self) -> Result<Vec<PathBuf>> {
        let log = self.attempt_log();

        task::spawn_blocking(move || log.backups())
            .await
            .config_context("Task join error")?
    }

    /// The plan entry for a session.
    pub fn find_entry(&self, key: &SessionKey) -> Result<PlanEntry> {
        self.catalog
            .find(key)
            .cloned()
            .ok_or_else(|| TrackerError::PlanEntryNotFound {
                week: key.week,
                day: key.day,
                column: key.column.clone(),
            })
    }
}

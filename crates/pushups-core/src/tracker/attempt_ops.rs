//! Attempt mutations for the Tracker.

use std::{fs::File, path::Path};

use jiff::civil::DateTime;
use log::info;
use tokio::task;

use super::{now, Tracker};
use crate::{
    attempt_log::{rows, EditAction, MergeSummary},
    error::{ConfigResultExt, IoResultExt, Result, TrackerError},
    models::{AttemptRecord, SessionKey, SessionRun},
};

impl Tracker {
    /// Classifies a session run and appends it to the log, stamped with the
    /// current local time.
    pub async fn log_session(&self, key: &SessionKey, run: &SessionRun) -> Result<AttemptRecord> {
        self.log_session_at(now(), key, run).await
    }

    /// Classifies a session run and appends it with an explicit timestamp.
    pub async fn log_session_at(
        &self,
        timestamp: DateTime,
        key: &SessionKey,
        run: &SessionRun,
    ) -> Result<AttemptRecord> {
        let outcome = self.classifier().classify(run);
        let record = AttemptRecord::session(timestamp, key, &run.results, outcome);
        self.append(record).await
    }

    /// Appends a single-set max test with the given repetition count.
    pub async fn log_test(&self, count: u32) -> Result<AttemptRecord> {
        self.append(AttemptRecord::test(now(), count)).await
    }

    /// Appends an already built record.
    pub async fn append(&self, record: AttemptRecord) -> Result<AttemptRecord> {
        let log = self.attempt_log();

        task::spawn_blocking(move || {
            log.append(&record)?;
            info!(
                "Logged W{}D{} C{} as {}",
                record.week,
                record.day,
                record.column,
                record.outcome.as_str()
            );
            Ok::<_, TrackerError>(record)
        })
        .await
        .config_context("Task join error")?
    }

    /// Removes or relabels the attempt at `index` of the chronological list.
    pub async fn edit_attempt(&self, index: usize, action: EditAction) -> Result<AttemptRecord> {
        let log = self.attempt_log();

        task::spawn_blocking(move || log.edit(index, action))
            .await
            .config_context("Task join error")?
    }

    /// Merges the attempts of another log file into this one.
    ///
    /// The source must exist. Attempts already present are counted as
    /// duplicates and not written again.
    pub async fn import(&self, source: impl AsRef<Path>) -> Result<MergeSummary> {
        let log = self.attempt_log();
        let source = source.as_ref().to_path_buf();

        task::spawn_blocking(move || {
            let file = File::open(&source).fs_context(&source)?;
            let incoming = rows::decode(file, &source)?;
            let summary = log.merge(incoming)?;
            info!(
                "Imported {} attempt(s) from '{}', skipped {} duplicate(s)",
                summary.imported,
                source.display(),
                summary.duplicates
            );
            Ok::<_, TrackerError>(summary)
        })
        .await
        .config_context("Task join error")?
    }
}

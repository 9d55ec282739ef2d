//! Durable, ordered, editable store of attempt records.
//!
//! The log is a single CSV file (see [`rows::HEADER`] for the columns) plus
//! rotating byte-for-byte snapshots next to it. Every mutation snapshots the
//! current file first when backups are enabled.
//!
//! # Write discipline
//!
//! - `append` writes the encoded row with one `write_all`, then `sync_all`.
//!   A file whose last row lacks a line terminator gets one first. On
//!   failure the file is truncated back to its previous length.
//! - `edit`, `rewrite` and `merge` write a temporary file in the same
//!   directory and rename it over the log, so the old content survives any
//!   failure before the rename. The replacement keeps the old file's
//!   permissions. A rewrite is refused while the log holds rows that do not
//!   decode, since they could not be written back.
//!
//! The log assumes a single writer process. Nothing guards against a second
//! process appending at the same time.

use std::{
    collections::BTreeSet,
    fs::{self, File, OpenOptions},
    io::{self, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::{
    error::{IoResultExt, Result, TrackerError},
    models::{AttemptRecord, Outcome},
};

mod backup;
pub mod rows;


/// Snapshot settings for an attempt log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupPolicy {
    /// Take a snapshot before every mutation
    pub enabled: bool,

    /// Number of snapshots to keep; 0 keeps all of them
    pub retain: usize,
}

impl Default for BackupPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            retain: 5,
        }
    }
}

/// Change applied to a single record by [`AttemptLog::edit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Delete the record
    Remove,
    /// Replace the record's outcome
    SetOutcome(Outcome),
}

/// Counts reported by [`AttemptLog::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Records added to the log
    pub imported: usize,
    /// Records skipped because an identical one was already logged
    pub duplicates: usize,
}

/// Attempt log backed by one CSV file.
#[derive(Debug, Clone)]
pub struct AttemptLog {
    path: PathBuf,
    backup: BackupPolicy,
}

impl AttemptLog {
    pub fn new(path: impl Into<PathBuf>, backup: BackupPolicy) -> Self {
        Self {
            path: path.into(),
            backup,
        }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_policy(&self) -> BackupPolicy {
        self.backup
    }

    /// Append one record, creating the file with a header if needed.
    pub fn append(&self, record: &AttemptRecord) -> Result<()> {
        self.snapshot()?;

        let previous_len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e).fs_context(&self.path),
        };
        let mut bytes = Vec::new();
        if previous_len > 0 && !ends_with_newline(&self.path).fs_context(&self.path)? {
            debug!("Terminating last row of '{}'", self.path.display());
            bytes.push(b'\n');
        }
        bytes.extend(rows::encode(
            std::slice::from_ref(record),
            previous_len == 0,
            &self.path,
        )?);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .fs_context(&self.path)?;

        if let Err(e) = file.write_all(&bytes).and_then(|()| file.sync_all()) {
            if let Err(rollback) = file.set_len(previous_len) {
                warn!(
                    "Failed to roll back partial append to '{}': {rollback}",
                    self.path.display()
                );
            }
            return Err(e).fs_context(&self.path);
        }

        debug!(
            "Appended {} attempt to '{}'",
            record.outcome.as_str(),
            self.path.display()
        );
        Ok(())
    }

    /// All records sorted by timestamp; ties keep storage order.
    pub fn load_all(&self) -> Result<Vec<AttemptRecord>> {
        let mut records = rows::read_file(&self.path)?;
        records.sort_by_key(|record| record.timestamp);
        Ok(records)
    }

    /// Most recent record of any outcome.
    pub fn last(&self) -> Result<Option<AttemptRecord>> {
        Ok(self.load_all()?.pop())
    }

    /// Most recent record that is not a TEST.
    pub fn last_non_test(&self) -> Result<Option<AttemptRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .rev()
            .find(|record| !record.is_test()))
    }

    /// The newest `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<AttemptRecord>> {
        Ok(self.load_all()?.into_iter().rev().take(limit).collect())
    }

    /// Apply one change to the record at `index` of the [`load_all`] order
    /// and rewrite the log. Returns the removed or updated record.
    ///
    /// [`load_all`]: AttemptLog::load_all
    pub fn edit(&self, index: usize, action: EditAction) -> Result<AttemptRecord> {
        let mut records = self.load_for_rewrite()?;
        if index >= records.len() {
            return Err(TrackerError::InvalidIndex {
                index,
                len: records.len(),
            });
        }

        self.snapshot()?;
        let changed = match action {
            EditAction::Remove => records.remove(index),
            EditAction::SetOutcome(outcome) => {
                records[index].outcome = outcome;
                records[index].clone()
            }
        };
        self.write_atomic(&records)?;
        info!("Edited attempt {index} in '{}': {action:?}", self.path.display());
        Ok(changed)
    }

    /// Replace the whole log with `records`, snapshotting first.
    pub fn rewrite(&self, records: &[AttemptRecord]) -> Result<()> {
        self.snapshot()?;
        self.write_atomic(records)
    }

    /// Add records logged elsewhere, skipping ones already present.
    ///
    /// Two records are the same attempt when timestamp, session and set
    /// counts match; the outcome is ignored. Nothing is written when every
    /// incoming record is a duplicate.
    pub fn merge(&self, incoming: Vec<AttemptRecord>) -> Result<MergeSummary> {
        let mut records = self.load_for_rewrite()?;
        let mut seen: BTreeSet<_> = records.iter().map(identity).collect();

        let mut summary = MergeSummary::default();
        for record in incoming {
            if seen.insert(identity(&record)) {
                records.push(record);
                summary.imported += 1;
            } else {
                summary.duplicates += 1;
            }
        }

        if summary.imported > 0 {
            records.sort_by_key(|record| record.timestamp);
            self.rewrite(&records)?;
        }
        Ok(summary)
    }

    /// Sorted records, or an error when some rows would be lost on rewrite.
    fn load_for_rewrite(&self) -> Result<Vec<AttemptRecord>> {
        let decoded = rows::read_file_rows(&self.path)?;
        if decoded.skipped > 0 {
            return Err(TrackerError::UnreadableRows {
                path: self.path.clone(),
                count: decoded.skipped,
            });
        }
        let mut records = decoded.records;
        records.sort_by_key(|record| record.timestamp);
        Ok(records)
    }

    fn write_atomic(&self, records: &[AttemptRecord]) -> Result<()> {
        let bytes = rows::encode(records, true, &self.path)?;
        let dir = self.directory();

        let mut temp = NamedTempFile::new_in(&dir).fs_context(&dir)?;
        temp.write_all(&bytes).fs_context(temp.path())?;
        temp.as_file().sync_all().fs_context(temp.path())?;
        match fs::metadata(&self.path) {
            Ok(meta) => temp
                .as_file()
                .set_permissions(meta.permissions())
                .fs_context(temp.path())?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).fs_context(&self.path),
        }
        temp.persist(&self.path)
            .map_err(|e| e.error)
            .fs_context(&self.path)?;

        debug!(
            "Rewrote '{}' with {} attempt(s)",
            self.path.display(),
            records.len()
        );
        Ok(())
    }

    /// Directory holding the log and its snapshots.
    pub(crate) fn directory(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Whether the last byte of a non-empty file is a line feed.
fn ends_with_newline(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

type Identity = (jiff::civil::DateTime, i32, i32, String, Vec<u32>);

fn identity(record: &AttemptRecord) -> Identity {
    (
        record.timestamp,
        record.week,
        record.day,
        record.column.clone(),
        record.sets_completed.clone(),
    )
}

//! Timestamped snapshots of the attempt log.
//!
//! A snapshot of `attempt_log.csv` is written next to it as
//! `attempt_log.csv.20250124_135606.bak`. Two snapshots taken within the
//! same second share a name and the later one replaces the earlier.

use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use jiff::Zoned;
use log::{debug, info, warn};

use super::AttemptLog;
use crate::error::{IoResultExt, Result};

const BACKUP_SUFFIX: &str = ".bak";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

impl AttemptLog {
    /// Copy the current log to a new snapshot and prune old ones.
    ///
    /// Returns `None` when backups are disabled or there is no log file yet.
    /// A failed copy is an error and callers must not go on to mutate the
    /// log.
    pub fn snapshot(&self) -> Result<Option<PathBuf>> {
        if !self.backup.enabled || !self.path.is_file() {
            return Ok(None);
        }

        let stamp = Zoned::now().strftime(STAMP_FORMAT).to_string();
        let target = self.directory().join(format!(
            "{}.{stamp}{BACKUP_SUFFIX}",
            self.file_name()
        ));
        fs::copy(&self.path, &target).fs_context(&target)?;
        debug!("Backed up '{}' to '{}'", self.path.display(), target.display());

        if let Err(e) = self.prune(self.backup.retain) {
            warn!("Failed to prune backups of '{}': {e}", self.path.display());
        }
        Ok(Some(target))
    }

    /// Delete the oldest snapshots so that at most `retain` remain.
    ///
    /// `retain == 0` keeps everything. A snapshot that cannot be deleted is
    /// logged and left in place. Returns the deleted paths.
    pub fn prune(&self, retain: usize) -> Result<Vec<PathBuf>> {
        if retain == 0 {
            return Ok(Vec::new());
        }
        let backups = self.backups()?;
        if backups.len() <= retain {
            return Ok(Vec::new());
        }

        let excess = backups.len() - retain;
        let mut removed = Vec::with_capacity(excess);
        for path in backups.into_iter().take(excess) {
            match fs::remove_file(&path) {
                Ok(()) => {
                    info!("Removed old backup '{}'", path.display());
                    removed.push(path);
                }
                Err(e) => warn!("Failed to remove backup '{}': {e}", path.display()),
            }
        }
        Ok(removed)
    }

    /// Existing snapshots of this log, oldest first.
    pub fn backups(&self) -> Result<Vec<PathBuf>> {
        let dir = self.directory();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).fs_context(&dir),
        };

        let prefix = format!("{}.", self.file_name());
        let mut found: Vec<(SystemTime, PathBuf)> = Vec::new();
        for entry in entries {
            let entry = entry.fs_context(&dir)?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with(&prefix) && name.ends_with(BACKUP_SUFFIX) {
                let path = entry.path();
                found.push((modified(&path), path));
            }
        }
        found.sort();
        Ok(found.into_iter().map(|(_, path)| path).collect())
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn modified(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

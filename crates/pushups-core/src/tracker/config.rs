//! Resolved tracker settings.

use std::path::{Path, PathBuf};

use crate::{
    attempt_log::{AttemptLog, BackupPolicy},
    error::Result,
    plan::PlanCatalog,
};

/// Where the plan table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSource {
    /// The table compiled into the library
    Bundled,
    /// A CSV file on disk
    File(PathBuf),
}

impl PlanSource {
    /// Load the catalog this source describes.
    pub fn load(&self) -> Result<PlanCatalog> {
        match self {
            PlanSource::Bundled => Ok(PlanCatalog::bundled()),
            PlanSource::File(path) => PlanCatalog::load(path),
        }
    }
}

/// Settings injected into every tracker component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Attempt log file
    pub log_path: PathBuf,

    /// Plan table to load
    pub plan: PlanSource,

    /// Snapshot settings for the attempt log
    pub backup: BackupPolicy,

    /// Whether short sets may classify a session as PARTIAL
    pub partial_success: bool,

    /// Default answer to "Start rest timer?"
    pub rest_timer_default: bool,
}

impl TrackerConfig {
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Attempt log handle for these settings.
    pub fn attempt_log(&self) -> AttemptLog {
        AttemptLog::new(self.log_path.clone(), self.backup)
    }
}

//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::{config::PlanSource, Tracker, TrackerConfig};
use crate::{
    attempt_log::BackupPolicy,
    error::{ConfigResultExt, IoResultExt, Result, TrackerError},
};

/// File name of the attempt log inside the data directory.
const DEFAULT_LOG_FILE: &str = "attempt_log.csv";

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    log_path: Option<PathBuf>,
    plan_path: Option<PathBuf>,
    backup: BackupPolicy,
    partial_success: bool,
    rest_timer_default: bool,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            log_path: None,
            plan_path: None,
            backup: BackupPolicy::default(),
            partial_success: true,
            rest_timer_default: true,
        }
    }

    /// Sets a custom attempt log path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pushups/attempt_log.csv` or
    /// `~/.local/share/pushups/attempt_log.csv`
    pub fn with_log_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.log_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a plan table file. The bundled plan is used otherwise.
    pub fn with_plan_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plan_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Enables or disables snapshots before each mutation.
    pub fn with_backups(mut self, enabled: bool) -> Self {
        self.backup.enabled = enabled;
        self
    }

    /// Number of snapshots to keep; 0 keeps all of them.
    pub fn with_max_backups(mut self, retain: usize) -> Self {
        self.backup.retain = retain;
        self
    }

    pub fn with_partial_success(mut self, enabled: bool) -> Self {
        self.partial_success = enabled;
        self
    }

    pub fn with_rest_timer_default(mut self, enabled: bool) -> Self {
        self.rest_timer_default = enabled;
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::XdgDirectory` if the default log path cannot be
    /// resolved
    /// Returns `TrackerError::FileSystem` if the log directory cannot be
    /// created or the plan file cannot be opened
    pub async fn build(self) -> Result<Tracker> {
        let log_path = if let Some(path) = self.log_path {
            path
        } else {
            Self::default_log_path()?
        };

        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).fs_context(parent)?;
            }
        }

        let plan = match self.plan_path {
            Some(path) => PlanSource::File(path),
            None => PlanSource::Bundled,
        };
        let source = plan.clone();
        let catalog = task::spawn_blocking(move || source.load())
            .await
            .config_context("Task join error")??;

        let config = TrackerConfig {
            log_path,
            plan,
            backup: self.backup,
            partial_success: self.partial_success,
            rest_timer_default: self.rest_timer_default,
        };
        Ok(Tracker::new(config, catalog))
    }

    /// Returns the default attempt log path following XDG Base Directory
    /// specification.
    fn default_log_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pushups")
            .place_data_file(DEFAULT_LOG_FILE)
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

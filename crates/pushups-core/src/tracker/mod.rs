//! High-level tracker API.
//!
//! [`Tracker`] ties the plan catalog, the attempt log, outcome
//! classification and progress reporting together. Every method that touches
//! the attempt log runs on tokio's blocking pool, one operation at a time.
//!
//! ```text
//! PlanCatalog ──▶ ProgressReporter ──▶ SessionRunner
//!                                           │
//! AttemptLog ◀──── OutcomeClassifier ◀──────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances with configuration
//! - [`config`]: Resolved settings shared by all components
//! - `attempt_ops`: Logging, editing and importing attempts
//! - `report_ops`: Read-only queries over the log and the plan
//!
//! # Usage
//!
//! ```rust
//! use pushups_core::{models::{SessionKey, SessionRun, SetResult}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_log_path(Some("/tmp/attempt_log.csv"))
//!     .build()
//!     .await?;
//!
//! let run = SessionRun {
//!     results: vec![SetResult::new(10, 10), SetResult::new(12, 12)],
//!     completed: true,
//! };
//! let record = tracker.log_session(&SessionKey::new(1, 1, "1"), &run).await?;
//! println!("Logged {}", record.outcome);
//!
//! let status = tracker.status().await?;
//! println!("{status}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::{civil::DateTime, Zoned};

use crate::{
    attempt_log::AttemptLog, plan::PlanCatalog, progress::ProgressReporter,
    scoring::OutcomeClassifier,
};

pub mod builder;
pub mod config;

mod attempt_ops;
mod report_ops;


pub use builder::TrackerBuilder;
pub use config::{PlanSource, TrackerConfig};

/// Main tracker interface for running and recording training sessions.
#[derive(Debug, Clone)]
pub struct Tracker {
    config: TrackerConfig,
    catalog: Arc<PlanCatalog>,
    reporter: ProgressReporter,
}

impl Tracker {
    /// Creates a tracker from resolved settings and a loaded plan.
    pub fn new(config: TrackerConfig, catalog: PlanCatalog) -> Self {
        let reporter = ProgressReporter::for_catalog(&catalog);
        Self {
            config,
            catalog: Arc::new(catalog),
            reporter,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// The loaded plan table.
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    pub fn reporter(&self) -> ProgressReporter {
        self.reporter
    }

    /// Classifier honouring the partial-success setting.
    pub fn classifier(&self) -> OutcomeClassifier {
        OutcomeClassifier::new(self.config.partial_success)
    }

    pub(crate) fn attempt_log(&self) -> AttemptLog {
        self.config.attempt_log()
    }
}

/// Local wall-clock time truncated to whole seconds.
pub(crate) fn now() -> DateTime {
    let now = Zoned::now().datetime();
    now.date()
        .at(now.hour(), now.minute(), now.second(), 0)
}

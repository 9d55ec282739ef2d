//! Core library for the 100 pushups training tracker.
//!
//! This crate holds the training plan, the guided session runner, outcome
//! scoring, the durable attempt log and progress reporting. The CLI crate
//! supplies the console prompts, the rest-timer countdown and terminal
//! rendering.
//!
//! # Components
//!
//! - [`plan`]: the progression table ([`PlanCatalog`]), set targets and rest
//!   specifications
//! - [`session`]: [`SessionRunner`], which walks an operator through the sets
//!   of one plan entry
//! - [`scoring`]: [`classify`] a session run as SUCCESS, PARTIAL or INCOMPLETE
//! - [`attempt_log`]: the CSV attempt log with backups, edits and imports
//! - [`progress`]: next-session and test recommendations
//! - [`tracker`]: the async [`Tracker`] facade tying everything together
//! - [`display`]: markdown formatting for the terminal
//!
//! # Quick Start
//!
//! ```rust
//! use pushups_core::{models::SessionKey, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_log_path(Some("attempt_log.csv"))
//!     .with_max_backups(3)
//!     .build()
//!     .await?;
//!
//! let entry = tracker.find_entry(&SessionKey::new(1, 1, "1"))?;
//! println!("{entry}");
//!
//! let status = tracker.status().await?;
//! println!("{status}");
//! # Ok(())
//! # }
//! ```

pub mod attempt_log;
pub mod display;
pub mod error;
pub mod models;
pub mod plan;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod tracker;

// Re-export commonly used types
pub use attempt_log::{AttemptLog, BackupPolicy, EditAction, MergeSummary};
pub use display::{
    Attempts, EditResult, ImportResult, LoggedResult, OperationStatus, PlanEntries,
    ProgressChart,
};
pub use error::{Result, TrackerError};
pub use models::{
    AttemptRecord, Outcome, PlanEntry, SessionKey, SessionRun, SetResult, Status, Upcoming,
};
pub use plan::{PlanCatalog, RestSpec};
pub use progress::{NextSession, ProgressReporter};
pub use scoring::{classify, OutcomeClassifier};
pub use session::{RestTimer, SessionRunner, SetAction, SetPrompt};
pub use tracker::{PlanSource, Tracker, TrackerBuilder, TrackerConfig};

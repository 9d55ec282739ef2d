//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here format collections, operation results and the progress
//! chart. All output is markdown for the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Attempt, Plan) │───▶│ & Result Types  │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Attempts, PlanEntries)
//! - [`chart`]: Text bar chart of attempts (ProgressChart)
//! - [`results`]: Operation results (LoggedResult, EditResult, ImportResult)
//! - [`status`]: Progress report and error messages (OperationStatus)
//! - [`datetime`]: Timestamp formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use pushups_core::{display::ProgressChart, models::AttemptRecord};
//! use jiff::civil::date;
//!
//! let records = vec![AttemptRecord::test(date(2025, 1, 24).at(9, 0, 0, 0), 40)];
//! let chart = ProgressChart::new(&records).with_test_suggestion(true);
//! let output = chart.to_string();
//! assert!(output.contains("2025-01-24 T"));
//! assert!(output.contains("A test is suggested"));
//! ```

pub mod chart;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use chart::ProgressChart;
pub use collections::{Attempts, PlanEntries};
pub use datetime::{LogDate, LogTimestamp};
pub use results::{EditResult, ImportResult, LoggedResult};
pub use status::OperationStatus;

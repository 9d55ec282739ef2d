//! Data models for plan entries and logged attempts.
//!
//! This module contains the core domain models of the tracker. Display
//! implementations for these models live in [`crate::display::models`] to keep
//! data structures separate from presentation.
//!
//! # Overview
//!
//! - [`PlanEntry`] / [`SessionKey`]: one session of the progression table and
//!   the (week, day, column) key that identifies it
//! - [`SetResult`] / [`SessionRun`]: what happened while a session was run
//! - [`Outcome`]: the verdict stored with each attempt
//! - [`AttemptRecord`]: one row of the attempt log
//! - [`Status`] / [`Upcoming`]: read-only progress facts derived from the log
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use pushups_core::models::{AttemptRecord, Outcome, SessionKey, SetResult};
//!
//! let key = SessionKey::new(1, 1, "1");
//! let results = [SetResult::new(10, 10), SetResult::new(8, 8)];
//! let record = AttemptRecord::session(
//!     date(2025, 1, 24).at(13, 56, 6, 0),
//!     &key,
//!     &results,
//!     Outcome::Success,
//! );
//! assert_eq!(record.sets_completed, vec![10, 8]);
//! assert_eq!(record.total_reps(), 18);
//! ```

pub mod attempt;
pub mod outcome;
pub mod plan;
pub mod session;
pub mod status;


pub use attempt::{AttemptRecord, TEST_COLUMN, TEST_MARKER};
pub use outcome::Outcome;
pub use plan::{PlanEntry, SessionKey};
pub use session::{SessionRun, SetResult};
pub use status::{Status, Upcoming};

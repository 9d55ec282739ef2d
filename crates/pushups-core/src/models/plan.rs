//! Plan entry model definition and related functionality.

use serde::{Deserialize, Serialize};

use crate::plan::{is_max_spec, RestSpec};

/// Identifies one training session of the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey {
    /// Plan week, starting at 1
    pub week: i32,

    /// Day within the week, 1 to 3
    pub day: i32,

    /// Difficulty column ("1", "2" or "3")
    pub column: String,
}

impl SessionKey {
    /// Create a key from its parts.
    pub fn new(week: i32, day: i32, column: impl Into<String>) -> Self {
        Self {
            week,
            day,
            column: column.into(),
        }
    }
}

/// One training session definition from the progression table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanEntry {
    /// Plan week, starting at 1
    pub week: i32,

    /// Day within the week, 1 to 3
    pub day: i32,

    /// Difficulty column
    pub column: String,

    /// Set specifications in order, e.g. `["10", "12", "MAX≥15"]`
    pub sets: Vec<String>,

    /// Recommended rest between sets, e.g. `"60-90s"`
    pub rest: String,
}

impl PlanEntry {
    /// The key identifying this entry in the catalog.
    pub fn key(&self) -> SessionKey {
        SessionKey::new(self.week, self.day, self.column.clone())
    }

    /// Whether this entry is the session identified by `key`.
    pub fn matches(&self, key: &SessionKey) -> bool {
        self.week == key.week && self.day == key.day && self.column == key.column
    }

    /// Whether the last set is an open-ended `MAX≥K` set.
    pub fn ends_with_max_set(&self) -> bool {
        self.sets.last().is_some_and(|spec| is_max_spec(spec))
    }

    /// Parsed rest specification.
    pub fn rest_spec(&self) -> RestSpec {
        RestSpec::parse(&self.rest)
    }
}

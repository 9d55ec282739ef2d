//! Attempt record definition and its on-disk field formats.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{Outcome, SessionKey, SetResult};

/// Week and day value stored for TEST attempts.
pub const TEST_MARKER: i32 = -1;

/// Column value stored for TEST attempts.
pub const TEST_COLUMN: &str = "TEST";

/// One logged attempt, as persisted in the attempt log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttemptRecord {
    /// Local wall-clock time at which the attempt was logged
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime,

    /// Plan week, or -1 for TEST attempts
    pub week: i32,

    /// Plan day, or -1 for TEST attempts
    pub day: i32,

    /// Plan column, or "TEST" for TEST attempts
    pub column: String,

    /// Verdict for the attempt
    pub outcome: Outcome,

    /// Actual repetitions per set, in order
    #[serde(with = "sets_format")]
    pub sets_completed: Vec<u32>,
}

impl AttemptRecord {
    /// Build the record for a plan session from its per-set results.
    pub fn session(
        timestamp: DateTime,
        key: &SessionKey,
        results: &[SetResult],
        outcome: Outcome,
    ) -> Self {
        Self {
            timestamp,
            week: key.week,
            day: key.day,
            column: key.column.clone(),
            outcome,
            sets_completed: results.iter().map(|r| r.actual).collect(),
        }
    }

    /// Build the record for a single-set max test.
    pub fn test(timestamp: DateTime, count: u32) -> Self {
        Self {
            timestamp,
            week: TEST_MARKER,
            day: TEST_MARKER,
            column: TEST_COLUMN.to_string(),
            outcome: Outcome::Test,
            sets_completed: vec![count],
        }
    }

    /// The plan session this attempt belongs to.
    pub fn key(&self) -> SessionKey {
        SessionKey::new(self.week, self.day, self.column.clone())
    }

    /// Whether this is a single-set max test.
    pub fn is_test(&self) -> bool {
        self.outcome == Outcome::Test
    }

    /// Total repetitions across all sets, saturating at `u32::MAX`.
    pub fn total_reps(&self) -> u32 {
        self.sets_completed
            .iter()
            .fold(0u32, |total, &count| total.saturating_add(count))
    }
}

/// Serde adapter for `YYYY-MM-DD HH:MM:SS` local timestamps.
pub mod timestamp_format {
    use jiff::civil::DateTime;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    /// strftime/strptime pattern of the timestamp column.
    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &DateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.strftime(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::strptime(FORMAT, raw.trim()).map_err(D::Error::custom)
    }
}

/// Serde adapter for the pipe-delimited `sets_completed` column.
pub mod sets_format {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    const DELIMITER: char = '|';

    pub fn serialize<S: Serializer>(value: &[u32], serializer: S) -> Result<S::Ok, S::Error> {
        let joined = value
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(&DELIMITER.to_string());
        serializer.serialize_str(&joined)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u32>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.split(DELIMITER)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                piece
                    .parse::<u32>()
                    .map_err(|_| D::Error::custom(format!("invalid set count '{piece}'")))
            })
            .collect()
    }
}

//! Collection wrapper types for displaying groups of domain objects.
//!
//! These wrappers format collections with consistent structure and empty
//! collection handling.

use std::{fmt, ops::Index};

use crate::models::{AttemptRecord, PlanEntry};

/// Chronological attempts, each shown with its index in the full log.
///
/// The indices are the ones accepted by `edit`, so a listing of only the
/// newest attempts keeps the offset of its first record.
///
/// # Examples
///
/// ```rust
/// use pushups_core::{display::Attempts, models::AttemptRecord};
/// use jiff::civil::date;
///
/// let records: Vec<_> = (1..=4)
///     .map(|day| AttemptRecord::test(date(2025, 1, day).at(9, 0, 0, 0), 20 + day as u32))
///     .collect();
///
/// let newest = Attempts::tail(records, 2);
/// let output = newest.to_string();
/// assert!(output.contains("`[2]`"));
/// assert!(output.contains("`[3]`"));
/// assert!(!output.contains("`[1]`"));
/// ```
pub struct Attempts {
    records: Vec<AttemptRecord>,
    first_index: usize,
}

impl Attempts {
    /// Wrap the complete chronological list.
    pub fn new(records: Vec<AttemptRecord>) -> Self {
        Self {
            records,
            first_index: 0,
        }
    }

    /// Keep only the newest `limit` records of a chronological list.
    pub fn tail(mut records: Vec<AttemptRecord>, limit: usize) -> Self {
        let first_index = records.len().saturating_sub(limit);
        records.drain(..first_index);
        Self {
            records,
            first_index,
        }
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the number of attempts in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Log index of the first attempt shown.
    pub fn first_index(&self) -> usize {
        self.first_index
    }

    /// Iterate over `(log index, record)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &AttemptRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(move |(i, record)| (self.first_index + i, record))
    }
}

impl Index<usize> for Attempts {
    type Output = AttemptRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl fmt::Display for Attempts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "No attempts logged yet.");
        }
        for (index, record) in self.iter() {
            writeln!(f, "- `[{index}]` {record}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying plan entries.
pub struct PlanEntries(pub Vec<PlanEntry>);

impl PlanEntries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanEntry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a PlanEntries {
    type Item = &'a PlanEntry;
    type IntoIter = std::slice::Iter<'a, PlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plan entries found.");
        }
        let mut week = None;
        for entry in &self.0 {
            if week != Some(entry.week) {
                writeln!(f, "## Week {}", entry.week)?;
                writeln!(f)?;
                week = Some(entry.week);
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

//! Progression table loading and lookup.
//!
//! The plan is a CSV table with the columns `Week`, `Day`, `Column`,
//! `Set1`..`Set8`, `SetFinal` and `RecommendedRest`. Empty set cells are
//! dropped, so an entry carries between one and nine set specifications.
//! Weeks start at 1, days run 1 to 3 and the difficulty column is one of
//! [`COLUMN_LABELS`].
//! Rows that cannot be interpreted are skipped and counted in a warning; a
//! broken plan never stops the tracker from starting.

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use crate::{
    error::{IoResultExt, Result},
    models::{PlanEntry, SessionKey},
};

pub mod rest;
pub mod target;

pub use rest::RestSpec;
pub use target::{is_max_spec, parse_minimum};

/// The bundled "100 pushups" progression table.
pub const BUNDLED_PLAN: &str = include_str!("../../assets/plan.csv");

/// Final week of the bundled plan, used when a catalog is empty.
pub const DEFAULT_FINAL_WEEK: i32 = 6;

/// Difficulty column labels a plan row may carry.
pub const COLUMN_LABELS: [&str; 3] = ["1", "2", "3"];

const SET_COLUMNS: [&str; 9] = [
    "Set1", "Set2", "Set3", "Set4", "Set5", "Set6", "Set7", "Set8", "SetFinal",
];

/// Read-only collection of plan entries keyed by (week, day, column).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanCatalog {
    entries: Vec<PlanEntry>,
}

impl PlanCatalog {
    /// Build a catalog from already parsed entries.
    pub fn new(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    /// The catalog of the bundled plan table.
    pub fn bundled() -> Self {
        Self::from_reader(BUNDLED_PLAN.as_bytes())
    }

    /// Load a plan file.
    ///
    /// A missing file yields an empty catalog and a warning. Other I/O
    /// failures while opening the file are returned.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Plan file '{}' not found; no sessions available", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e).fs_context(path),
        };
        let catalog = Self::from_reader(file);
        debug!(
            "Loaded {} plan entries from '{}'",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a plan table from any reader, skipping malformed rows.
    pub fn from_reader<R: Read>(reader: R) -> Self {
        let mut csv = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = match csv.headers() {
            Ok(headers) => headers.clone(),
            Err(e) => {
                warn!("Plan table has no readable header row: {e}");
                return Self::default();
            }
        };
        let layout = ColumnLayout::from_headers(&headers);

        let mut entries = Vec::new();
        let mut skipped = 0usize;
        for row in csv.records() {
            match row.ok().and_then(|record| layout.entry(&record)) {
                Some(entry) => entries.push(entry),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!("Skipped {skipped} malformed plan row(s)");
        }
        Self { entries }
    }

    /// Look up the entry for a session.
    pub fn find(&self, key: &SessionKey) -> Option<&PlanEntry> {
        self.entries.iter().find(|entry| entry.matches(key))
    }

    /// The earliest session of the plan (lowest week, day, then column).
    pub fn first(&self) -> Option<&PlanEntry> {
        self.entries
            .iter()
            .min_by(|a, b| (a.week, a.day, &a.column).cmp(&(b.week, b.day, &b.column)))
    }

    /// The last week covered by the plan.
    pub fn final_week(&self) -> Option<i32> {
        self.entries.iter().map(|entry| entry.week).max()
    }

    /// All entries of one week, in table order.
    pub fn week(&self, week: i32) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(move |entry| entry.week == week)
    }

    /// Distinct column labels, sorted.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = self.entries.iter().map(|e| e.column.as_str()).collect();
        columns.sort_unstable();
        columns.dedup();
        columns
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Positions of the known columns within the header row.
struct ColumnLayout {
    week: Option<usize>,
    day: Option<usize>,
    column: Option<usize>,
    sets: Vec<usize>,
    rest: Option<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h == name);
        Self {
            week: position("Week"),
            day: position("Day"),
            column: position("Column"),
            sets: SET_COLUMNS.iter().filter_map(|name| position(*name)).collect(),
            rest: position("RecommendedRest"),
        }
    }

    fn entry(&self, record: &StringRecord) -> Option<PlanEntry> {
        let field = move |index: Option<usize>| index.and_then(|i| record.get(i));

        let week: i32 = field(self.week)?.parse().ok()?;
        let day: i32 = field(self.day)?.parse().ok()?;
        let column = field(self.column)?;
        let rest = field(self.rest)?;
        if week < 1 || !(1..=3).contains(&day) || !COLUMN_LABELS.contains(&column) {
            return None;
        }

        let sets: Vec<String> = self
            .sets
            .iter()
            .filter_map(|&i| record.get(i))
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();
        if sets.is_empty() {
            return None;
        }

        Some(PlanEntry {
            week,
            day,
            column: column.to_string(),
            sets,
            rest: rest.to_string(),
        })
    }
}

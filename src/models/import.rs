//! Options and report for bulk CSV import.

use serde::Serialize;
use std::collections::BTreeMap;

/// Controls how [`crate::agenda::Agenda::import_csv`] treats rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Synthesize an id for rows whose `id` cell is absent or blank.
    pub generate_ids: bool,
    /// Collect failing rows in the report instead of aborting the import.
    pub skip_invalid: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            generate_ids: true,
            skip_invalid: true,
        }
    }
}

/// A row that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportError {
    /// The raw row, keyed by lowercased header name.
    pub record: BTreeMap<String, String>,
    pub error: String,
}

/// Outcome of a completed import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<ImportError>,
}

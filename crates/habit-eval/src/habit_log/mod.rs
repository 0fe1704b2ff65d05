//! Loading habit entries from exports and request payloads.
//!
//! Rows or records whose date cannot be read are dropped here, before the
//! entries reach the evaluation engine.

mod parser;

use crate::evaluation::{DailyHabits, HabitEntry, StudentId};
use crate::normalize::parse_date;
use crate::periods::StudentDirectory;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug)]
pub enum HabitLogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for HabitLogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HabitLogImportError::Io(err) => write!(f, "failed to read habit log export: {}", err),
            HabitLogImportError::Csv(err) => write!(f, "invalid habit log CSV data: {}", err),
        }
    }
}

impl std::error::Error for HabitLogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HabitLogImportError::Io(err) => Some(err),
            HabitLogImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for HabitLogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for HabitLogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Entries read from one export, with the student names found alongside them.
#[derive(Debug, Default)]
pub struct HabitLog {
    pub entries: Vec<HabitEntry>,
    pub directory: StudentDirectory,
    pub skipped_rows: usize,
}

pub struct HabitLogImporter;

impl HabitLogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<HabitLog, HabitLogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<HabitLog, HabitLogImportError> {
        let mut log = HabitLog::default();

        for (index, row) in parser::parse_rows(reader)?.into_iter().enumerate() {
            let Some(entry) = row.to_entry() else {
                warn!(
                    row = index + 1,
                    date = row.date.as_deref().unwrap_or(""),
                    "skipping habit log row without a student or a readable date"
                );
                log.skipped_rows += 1;
                continue;
            };

            if let Some(name) = row.student_name {
                log.directory.extend([(entry.student_id.clone(), name)]);
            }
            log.entries.push(entry);
        }

        Ok(log)
    }
}

/// Wire form of an entry whose date has not been validated yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitEntryRecord {
    pub date: String,
    pub student_id: StudentId,
    #[serde(flatten)]
    pub habits: DailyHabits,
}

impl HabitEntryRecord {
    pub fn into_entry(self) -> Option<HabitEntry> {
        let date = parse_date(&self.date)?;
        Some(HabitEntry {
            date,
            student_id: self.student_id,
            habits: self.habits,
        })
    }
}

/// Converts records into entries, returning how many were dropped for an
/// unreadable date.
pub fn collect_entries<I>(records: I) -> (Vec<HabitEntry>, usize)
where
    I: IntoIterator<Item = HabitEntryRecord>,
{
    let mut skipped = 0;
    let entries = records
        .into_iter()
        .filter_map(|record| {
            let entry = record.into_entry();
            if entry.is_none() {
                skipped += 1;
            }
            entry
        })
        .collect();
    (entries, skipped)
}

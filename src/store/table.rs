//! Flat CSV persistence for the entry table.
//!
//! The table has a fixed header (`Date,Mood,Activities,Notes,Sentiment`) and one
//! row per date. Writes go to a temporary file in the same directory which is
//! then renamed over the target, so readers never observe a partial table.

use crate::constants::{DATE_FORMAT_ISO, LOCK_FILE_SUFFIX, TABLE_COLUMNS};
use crate::errors::{AppError, AppResult, LockError, StoreError};
use crate::mood_core::{parse_activities, MoodEntry, Sentiment};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
#[cfg(unix)]
use std::fs::Permissions;
use std::io;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// One serialized row of the entry table.
#[derive(Debug, Serialize, Deserialize)]
struct EntryRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Mood")]
    mood: String,
    #[serde(rename = "Activities")]
    activities: String,
    #[serde(rename = "Notes", default)]
    notes: String,
    #[serde(rename = "Sentiment")]
    sentiment: String,
}

impl From<&MoodEntry> for EntryRow {
    fn from(entry: &MoodEntry) -> Self {
        EntryRow {
            date: entry.date.format(DATE_FORMAT_ISO).to_string(),
            mood: entry.mood.to_string(),
            activities: entry.activities_field(),
            notes: entry.notes.clone(),
            sentiment: entry.sentiment.to_string(),
        }
    }
}

impl TryFrom<EntryRow> for MoodEntry {
    type Error = String;

    fn try_from(row: EntryRow) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(row.date.trim(), DATE_FORMAT_ISO)
            .map_err(|e| format!("invalid date '{}': {}", row.date, e))?;
        let mood = row
            .mood
            .parse()
            .map_err(|_| format!("unknown mood '{}'", row.mood))?;
        let activities = parse_activities(&row.activities)
            .map_err(|_| format!("no activities recorded for {}", row.date))?;
        let sentiment: Sentiment = row.sentiment.parse()?;

        Ok(MoodEntry {
            date,
            mood,
            activities,
            notes: row.notes,
            sentiment,
        })
    }
}

/// Creates the data directory if needed, with owner-only permissions.
pub fn ensure_data_dir(dir: &Path) -> AppResult<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| {
        AppError::Io(io::Error::new(
            e.kind(),
            format!("Failed to create data directory {}: {}", dir.display(), e),
        ))
    })?;

    #[cfg(unix)]
    {
        fs::set_permissions(
            dir,
            Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS),
        )?;
        debug!("Set 0o700 permissions on data directory");
    }
    Ok(())
}

/// Reads every entry from the table at `path`.
///
/// Rows sharing a date collapse to the last one, which keeps the
/// one-entry-per-date invariant even for hand-edited files.
///
/// # Errors
///
/// - `StoreError::Unreadable` if the file cannot be opened or is not valid CSV
/// - `StoreError::MalformedRow` if a row does not describe a valid entry
pub fn read_table(path: &Path) -> Result<Vec<MoodEntry>, StoreError> {
    let unreadable = |source| StoreError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(unreadable)?;
    let headers = reader.headers().map_err(unreadable)?.clone();

    let mut entries: Vec<MoodEntry> = Vec::new();
    let mut by_date: HashMap<NaiveDate, usize> = HashMap::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record).map_err(unreadable)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: EntryRow = record.deserialize(Some(&headers)).map_err(unreadable)?;
        let entry = MoodEntry::try_from(row).map_err(|reason| StoreError::MalformedRow {
            path: path.to_path_buf(),
            line,
            reason,
        })?;

        match by_date.get(&entry.date) {
            Some(&index) => {
                warn!(
                    "Duplicate row for {} at line {}; keeping the later row",
                    entry.date, line
                );
                entries[index] = entry;
            }
            None => {
                by_date.insert(entry.date, entries.len());
                entries.push(entry);
            }
        }
    }

    debug!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Writes `entries` as a complete table at `path`, replacing it atomically.
pub fn write_table(path: &Path, entries: &[MoodEntry]) -> Result<(), StoreError> {
    let write_failed = |source: io::Error| StoreError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(temp.as_file_mut());
        writer
            .write_record(TABLE_COLUMNS)
            .map_err(|e| write_failed(e.into()))?;
        for entry in entries {
            writer
                .serialize(EntryRow::from(entry))
                .map_err(|e| write_failed(e.into()))?;
        }
        writer.flush().map_err(write_failed)?;
    }
    temp.as_file().sync_all().map_err(write_failed)?;
    temp.persist(path).map_err(|e| write_failed(e.error))?;

    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Exclusive advisory lock held for the duration of a table mutation.
///
/// The lock lives in a sibling `<table>.lock` file so the table itself can be
/// replaced by rename while the lock is held. Released on drop.
#[derive(Debug)]
pub struct TableLock {
    file: File,
    path: PathBuf,
}

impl TableLock {
    /// Attempts to take the lock without blocking.
    ///
    /// # Errors
    ///
    /// - `LockError::FileBusy` if another process holds the lock
    /// - `LockError::AcquisitionFailed` for any other failure
    pub fn acquire(table_path: &Path) -> Result<Self, LockError> {
        let mut lock_name = table_path.as_os_str().to_owned();
        lock_name.push(LOCK_FILE_SUFFIX);
        let path = PathBuf::from(lock_name);

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: path.clone(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!("Acquired lock {}", path.display());
                Ok(TableLock { file, path })
            }
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(LockError::FileBusy { path })
            }
            Err(source) => Err(LockError::AcquisitionFailed { path, source }),
        }
    }
}

impl Drop for TableLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!("Failed to release lock {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood_core::Mood;
    use tempfile::tempdir;

    fn entry(date: &str, mood: Mood, activities: &[&str], notes: &str) -> MoodEntry {
        MoodEntry {
            date: NaiveDate::parse_from_str(date, DATE_FORMAT_ISO).unwrap(),
            mood,
            activities: activities.iter().map(|a| a.to_string()).collect(),
            notes: notes.to_string(),
            sentiment: Sentiment::Neutral,
        }
    }

    #[test]
    fn test_write_table_uses_fixed_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mood_data.csv");

        write_table(
            &path,
            &[entry("2024-01-15", Mood::Happy, &["jogging", "reading"], "Felt great, honestly")],
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Date,Mood,Activities,Notes,Sentiment"));
        assert_eq!(
            lines.next(),
            Some("2024-01-15,Happy,\"jogging, reading\",\"Felt great, honestly\",Neutral")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mood_data.csv");

        write_table(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "Date,Mood,Activities,Notes,Sentiment");
        assert!(read_table(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_table_accepts_empty_notes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mood_data.csv");
        fs::write(
            &path,
            "Date,Mood,Activities,Notes,Sentiment\n2024-01-15,Calm,yoga,,Neutral\n",
        )
        .unwrap();

        let entries = read_table(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, Mood::Calm);
        assert_eq!(entries[0].activities, vec!["yoga"]);
        assert_eq!(entries[0].notes, "");
    }

    #[test]
    fn test_read_table_collapses_duplicate_dates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mood_data.csv");
        fs::write(
            &path,
            "Date,Mood,Activities,Notes,Sentiment\n\
             2024-01-15,Calm,yoga,,Neutral\n\
             2024-01-16,Sad,coding,,Negative\n\
             2024-01-15,Happy,jogging,,Positive\n",
        )
        .unwrap();

        let entries = read_table(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].mood, Mood::Happy);
        assert_eq!(entries[1].mood, Mood::Sad);
    }

    #[test]
    fn test_read_table_reports_malformed_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mood_data.csv");
        fs::write(
            &path,
            "Date,Mood,Activities,Notes,Sentiment\n2024-01-15,Grumpy,yoga,,Neutral\n",
        )
        .unwrap();

        match read_table(&path) {
            Err(StoreError::MalformedRow { line, reason, .. }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("Grumpy"));
            }
            other => panic!("Expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_read_table_missing_file_is_unreadable() {
        let dir = tempdir().unwrap();
        let result = read_table(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(StoreError::Unreadable { .. })));
    }

    #[test]
    fn test_lock_is_exclusive_until_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mood_data.csv");

        let first = TableLock::acquire(&path).unwrap();
        assert!(matches!(
            TableLock::acquire(&path),
            Err(LockError::FileBusy { .. })
        ));
        drop(first);
        assert!(TableLock::acquire(&path).is_ok());
    }
}

//! The mood-entry store.
//!
//! `EntryStore` is the single source of truth for entries. It validates and
//! normalizes new entries, enforces at most one entry per date, and persists
//! the whole table after every successful mutation. Every operation reads the
//! table from disk, so there is no in-memory copy that can drift from it.

pub mod sample;
pub mod table;

use crate::config::Config;
use crate::errors::{AppResult, ValidationError};
use crate::mood_core::{self, EntryDraft, Mood, MoodEntry};
use crate::sentiment::SentimentClassifier;
use chrono::NaiveDate;
use rand::Rng;
use std::path::{Path, PathBuf};
use table::TableLock;
use tracing::{debug, info, warn};

/// Decides whether an existing same-day entry may be replaced.
///
/// Closures of the form `FnMut(&MoodEntry) -> bool` implement this trait, so
/// callers can pass an interactive prompt or a fixed answer.
pub trait OverwriteDecision {
    fn confirm_overwrite(&mut self, existing: &MoodEntry) -> bool;
}

impl<F> OverwriteDecision for F
where
    F: FnMut(&MoodEntry) -> bool,
{
    fn confirm_overwrite(&mut self, existing: &MoodEntry) -> bool {
        self(existing)
    }
}

/// A fixed answer to the overwrite question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    Never,
}

impl OverwriteDecision for Overwrite {
    fn confirm_overwrite(&mut self, _existing: &MoodEntry) -> bool {
        matches!(self, Overwrite::Always)
    }
}

/// Result of [`EntryStore::add`].
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The entry was written; `replaced` is set when it overwrote the day's entry.
    Saved { entry: MoodEntry, replaced: bool },
    /// A same-day entry exists and the caller declined to overwrite it.
    NotSaved { existing: MoodEntry },
}

/// Result of [`EntryStore::seed_sample_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table did not exist and was created with this many entries.
    Created(usize),
    /// The table existed but was empty and now holds this many entries.
    Populated(usize),
    /// The table already held this many entries; nothing was written.
    AlreadyPopulated(usize),
}

/// File-backed store of mood entries.
pub struct EntryStore {
    path: PathBuf,
    classifier: SentimentClassifier,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>, classifier: SentimentClassifier) -> Self {
        Self {
            path: path.into(),
            classifier,
        }
    }

    /// Store at the configured data directory with the default classifier.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_file(), SentimentClassifier::default())
    }

    /// Path of the persisted table.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validates raw mood input. See [`mood_core::validate_mood`].
    pub fn validate_mood(raw: &str) -> Result<Mood, ValidationError> {
        mood_core::validate_mood(raw)
    }

    /// Returns every stored entry in table order.
    ///
    /// A missing table is created (header only) and yields no entries. Read
    /// failures are logged and degrade to an empty result.
    pub fn load_all(&self) -> Vec<MoodEntry> {
        if !self.path.exists() {
            if let Err(e) = self.create_empty_table() {
                warn!("Could not create {}: {}", self.path.display(), e);
            }
            return Vec::new();
        }

        match table::read_table(&self.path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Error reading data file: {}", e);
                Vec::new()
            }
        }
    }

    /// Reads the table, propagating failures. A missing table is empty.
    pub fn read_entries(&self) -> AppResult<Vec<MoodEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        Ok(table::read_table(&self.path)?)
    }

    /// Adds an entry for `today`.
    ///
    /// The draft is validated and normalized first: the mood must be in the
    /// vocabulary, at least one activity is required, notes are trimmed, and
    /// the sentiment is classified from the notes. If `today` already has an
    /// entry, `decision` chooses between replacing it and leaving the store
    /// untouched.
    ///
    /// # Errors
    ///
    /// - `AppError::Validation` for bad input (nothing is read or written)
    /// - `AppError::Lock` if another process is writing the table
    /// - `AppError::Store` if the existing table cannot be read or the new one
    ///   cannot be written; in both cases nothing is committed
    pub fn add(
        &self,
        draft: &EntryDraft,
        today: NaiveDate,
        decision: &mut dyn OverwriteDecision,
    ) -> AppResult<AddOutcome> {
        let mood = mood_core::validate_mood(&draft.mood)?;
        let activities = mood_core::parse_activities(&draft.activities)?;
        let notes = draft.notes.trim().to_string();
        let sentiment = self.classifier.classify(&notes);

        let entry = MoodEntry {
            date: today,
            mood,
            activities,
            notes,
            sentiment,
        };
        debug!(
            "Prepared entry for {}: {} ({})",
            entry.date, entry.mood, entry.sentiment
        );

        if let Some(parent) = self.path.parent() {
            table::ensure_data_dir(parent)?;
        }
        let _lock = TableLock::acquire(&self.path)?;

        let mut entries = self.read_entries()?;
        let mut replaced = false;

        if let Some(pos) = entries.iter().position(|e| e.date == today) {
            if !decision.confirm_overwrite(&entries[pos]) {
                info!("Entry for {} already exists; not saved", today);
                return Ok(AddOutcome::NotSaved {
                    existing: entries.swap_remove(pos),
                });
            }
            entries.retain(|e| e.date != today);
            replaced = true;
        }

        entries.push(entry.clone());
        table::write_table(&self.path, &entries)?;

        info!(
            "Saved entry for {} ({} entries total{})",
            today,
            entries.len(),
            if replaced { ", replaced existing" } else { "" }
        );
        Ok(AddOutcome::Saved { entry, replaced })
    }

    /// Writes a copy of the full table to `target`.
    ///
    /// The source table is read strictly; if it cannot be read the export is
    /// aborted and `target` is left untouched. Returns the number of rows
    /// exported.
    pub fn export_to(&self, target: &Path) -> AppResult<usize> {
        let entries = table::read_table(&self.path)?;
        if let Some(parent) = target.parent() {
            table::ensure_data_dir(parent)?;
        }
        table::write_table(target, &entries)?;

        info!(
            "Exported {} entries to {}",
            entries.len(),
            target.display()
        );
        Ok(entries.len())
    }

    /// Fills an absent or empty table with `count` synthetic entries.
    ///
    /// Entries are dated `today - count` through `today - 1`. Nothing is
    /// written if the table already holds any entry.
    pub fn seed_sample_data<R: Rng + ?Sized>(
        &self,
        count: usize,
        today: NaiveDate,
        rng: &mut R,
    ) -> AppResult<SeedOutcome> {
        if let Some(parent) = self.path.parent() {
            table::ensure_data_dir(parent)?;
        }
        let _lock = TableLock::acquire(&self.path)?;

        let existed = self.path.exists();
        let existing = self.read_entries()?;
        if !existing.is_empty() {
            info!(
                "{} already contains data. Sample data not added.",
                self.path.display()
            );
            return Ok(SeedOutcome::AlreadyPopulated(existing.len()));
        }

        let entries = sample::sample_entries(count, today, rng)?;
        table::write_table(&self.path, &entries)?;
        info!("Added {} sample entries to {}", count, self.path.display());

        Ok(if existed {
            SeedOutcome::Populated(count)
        } else {
            SeedOutcome::Created(count)
        })
    }

    fn create_empty_table(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            table::ensure_data_dir(parent)?;
        }
        Ok(table::write_table(&self.path, &[])?)
    }
}

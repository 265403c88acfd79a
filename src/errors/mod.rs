//! Error handling utilities for the moodtrack application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use crate::mood_core::Mood;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents rejected user input.
///
/// Validation always happens before the entry table is touched, so any of these
/// errors guarantees the store is unchanged.
///
/// # Examples
///
/// ```
/// use moodtrack::errors::ValidationError;
/// use moodtrack::mood_core::Mood;
///
/// let error = ValidationError::UnknownMood {
///     input: "hapy".to_string(),
///     suggestion: Mood::Happy,
/// };
///
/// let message = format!("{}", error);
/// assert!(message.contains("Did you mean 'happy'?"));
/// assert!(message.contains("frustrated"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The mood input was blank.
    #[error("Mood cannot be empty.")]
    EmptyMood,

    /// The mood input is not part of the recognized vocabulary.
    #[error("Did you mean '{}'? Please use one of: {}", .suggestion.as_key(), Mood::vocabulary_list())]
    UnknownMood {
        /// The normalized input that was rejected
        input: String,
        /// The closest vocabulary mood
        suggestion: Mood,
    },

    /// No non-blank activity was given.
    #[error("Please enter at least one activity.")]
    EmptyActivities,

    /// A date argument could not be parsed.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD or YYYYMMDD.")]
    InvalidDate(String),

    /// Seeding this many days back would run past the earliest supported date.
    #[error("Cannot generate {0} sample entries: the earliest date would be out of range.")]
    SampleCountTooLarge(usize),
}

/// Represents failures reading or writing the persisted entry table.
///
/// # Examples
///
/// ```
/// use moodtrack::errors::StoreError;
/// use std::path::PathBuf;
///
/// let error = StoreError::MalformedRow {
///     path: PathBuf::from("/data/mood_data.csv"),
///     line: 3,
///     reason: "unknown mood 'Grumpy'".to_string(),
/// };
/// assert!(format!("{}", error).contains("line 3"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// The table exists but could not be read or parsed as CSV.
    #[error("Failed to read mood table {path}: {source}")]
    Unreadable {
        /// Path of the table
        path: PathBuf,
        /// The underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// A row parsed as CSV but does not describe a valid entry.
    #[error("Malformed row in {path} at line {line}: {reason}")]
    MalformedRow {
        /// Path of the table
        path: PathBuf,
        /// One-based line number of the row
        line: u64,
        /// Why the row was rejected
        reason: String,
    },

    /// Writing the table failed; nothing was committed.
    #[error("Failed to write mood table {path}: {source}. The entry was not saved.")]
    WriteFailed {
        /// Path that was being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents errors that can occur when attempting to lock the entry table.
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the table is already locked by another process.
    #[error("Mood table is currently being written by another process: {path}. Please wait for the other moodtrack process to finish.")]
    FileBusy {
        /// The path to the lock file
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents specific error cases that can occur during AI operations.
///
/// # Examples
///
/// ```
/// use moodtrack::errors::AIError;
///
/// let error = AIError::ModelNotFound("llama3.2:3b".to_string());
/// assert!(format!("{}", error).contains("llama3.2:3b"));
/// ```
#[derive(Debug, Error)]
pub enum AIError {
    /// Ollama API is not reachable.
    #[error("Ollama API error: {0}. Is Ollama running? Try: ollama serve")]
    OllamaOffline(#[source] reqwest::Error),

    /// Requested model not found in Ollama.
    #[error("Model not found: {0}. Try: ollama pull {0}")]
    ModelNotFound(String),

    /// Invalid or unexpected response from Ollama API.
    #[error("Invalid response from Ollama: {0}")]
    InvalidResponse(String),
}

/// Represents all possible errors that can occur in the moodtrack application.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodtrack::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected user input.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Errors reading or writing the entry table.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors related to locking the entry table.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),

    /// Errors related to AI operations.
    #[error("AI error: {0}")]
    AI(#[from] AIError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

/*!
# Moodtrack

Moodtrack is a personal mood journal. Each calendar day gets at most one entry
holding a mood from a closed vocabulary, the day's activities, free-text notes,
and a sentiment label derived from the notes. Entries live in a CSV table and
feed several reports.

## Core Features

- Log a day's mood with validation and "did you mean" suggestions
- Sentiment classification of notes
- Mood trends, activity/mood correlations, statistics, and positive streaks
- Export and sample-data seeding
- Optional AI suggestions through a local Ollama server

## Architecture

- `mood_core`: Mood vocabulary, entry types, and input validation
- `sentiment`: Polarity scoring and sentiment classification
- `store`: The persisted entry table
- `analytics`: Statistics, streak, and correlation engines
- `ai`: Suggestion provider backed by Ollama
- `ops`: The log workflow and report rendering
- `cli`, `config`, `setup`: Command-line surface, configuration, and prompts
- `errors`, `constants`: Error handling infrastructure and shared constants

## Usage Example

```rust,no_run
use moodtrack::{Config, EntryStore};
use moodtrack::mood_core::EntryDraft;
use moodtrack::store::Overwrite;
use chrono::Local;

fn main() -> moodtrack::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let store = EntryStore::from_config(&config);
    let draft = EntryDraft::new("happy", "jogging, reading", "Great run this morning");
    store.add(&draft, Local::now().date_naive(), &mut Overwrite::Never)?;

    println!("{}", moodtrack::ops::statistics_report(&store.load_all()));
    Ok(())
}
```
*/

/// AI suggestions for logged moods
pub mod ai;
/// Statistics, streak, and correlation engines
pub mod analytics;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Mood vocabulary, entries, and input validation
pub mod mood_core;
/// User-facing operations
pub mod ops;
/// Sentiment classification of notes
pub mod sentiment;
/// Interactive prompts
pub mod setup;
/// Persisted entry table
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use mood_core::{Mood, MoodEntry, Sentiment};
pub use store::EntryStore;

//! Command-line interface for moodtrack.
//!
//! Uses clap's derive API. Global logging options apply to every subcommand.

use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::errors::ValidationError;
use crate::mood_core;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A personal mood journal with trend, streak, and correlation reports
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Commands,

    /// Log output format
    #[clap(long, global = true, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Log level filter (overrides RUST_LOG)
    #[clap(long, global = true)]
    pub log_level: Option<String>,

    /// Print verbose output (debug logging)
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a mood entry (prompts for anything not given)
    Log(LogArgs),
    /// Show how often each mood was logged
    Trends,
    /// Show which activities occur with which moods
    Correlate,
    /// Show mood statistics
    Stats,
    /// Show positive-mood streaks
    Streaks,
    /// Export the mood table
    Export(ExportArgs),
    /// Fill an empty mood table with sample entries
    Seed(SeedArgs),
}

#[derive(Args, Debug, Default)]
pub struct LogArgs {
    /// Mood for the day (e.g. happy, sad, anxious)
    #[clap(short = 'm', long)]
    pub mood: Option<String>,

    /// Comma-separated activities
    #[clap(short = 'a', long)]
    pub activities: Option<String>,

    /// Free-text notes; sentiment is derived from them
    #[clap(short = 'n', long)]
    pub notes: Option<String>,

    /// Day to log instead of today (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(short = 'd', long)]
    pub date: Option<String>,

    /// Overwrite an existing entry for the day without asking
    #[clap(short = 'y', long, conflicts_with = "no")]
    pub yes: bool,

    /// Keep an existing entry for the day without asking
    #[clap(long)]
    pub no: bool,

    /// Skip the AI suggestions request
    #[clap(long)]
    pub no_suggest: bool,
}

impl LogArgs {
    /// Parses `--date`, returning `None` when it was not given.
    pub fn parse_date(&self) -> Option<Result<NaiveDate, ValidationError>> {
        self.date.as_deref().map(mood_core::parse_date)
    }
}

#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Export destination (defaults to mood_data_export.csv in the data directory)
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct SeedArgs {
    /// Number of sample entries (defaults to MOODTRACK_SAMPLE_ENTRIES)
    #[clap(short = 'c', long)]
    pub count: Option<usize>,
}

//! High-level operations behind the command-line interface.
//!
//! This module orchestrates the store, the analytics engines, and the
//! suggestion provider into the user-facing workflows: logging a day's mood
//! and rendering reports.

pub mod log;
pub mod report;

pub use log::{log_mood, mood_tip, LogReport};
pub use report::{correlation_report, statistics_report, streaks_report, trends_report};

//! Analytics over a snapshot of mood entries.
//!
//! Each engine takes a slice of entries and returns a report value, or `None`
//! when there is no data. Individual statistics that cannot be computed from
//! the data at hand (no positive entries for the best day, no negative entries
//! for days-since-negative) are `Option` fields inside the reports.
//!
//! - `statistics`: most frequent and most productive mood, best weekday,
//!   sentiment and mood distributions
//! - `streaks`: positive streaks and days since the last negative entry
//! - `correlation`: activity x mood co-occurrence matrix

pub mod correlation;
pub mod statistics;
pub mod streaks;

pub use correlation::{correlate, ActivityMoodMatrix};
pub use statistics::{compute_statistics, mood_distribution, MoodStatistics, SentimentDistribution};
pub use streaks::{compute_streaks, StreakReport};

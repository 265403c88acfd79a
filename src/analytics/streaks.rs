//! Positive-mood streaks and days since the last negative entry.

use crate::mood_core::{MoodEntry, Sentiment};
use chrono::NaiveDate;
use tracing::debug;

/// Streak statistics over a non-empty set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakReport {
    /// Consecutive positive entries ending at the latest date.
    pub current_positive: usize,
    /// Longest run of consecutive positive entries.
    pub longest_positive: usize,
    /// Whole days from the latest negative entry to `today`; `None` if there
    /// has never been one.
    pub days_since_negative: Option<i64>,
}

/// Computes a [`StreakReport`], or `None` when there are no entries.
///
/// Entries are ordered by date and scanned forward with a counter that resets
/// on every non-positive entry. Streaks count consecutive entries, not
/// calendar days, so a skipped day does not break a streak.
///
/// # Examples
///
/// ```
/// use moodtrack::analytics::streaks::compute_streaks;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert!(compute_streaks(&[], today).is_none());
/// ```
pub fn compute_streaks(entries: &[MoodEntry], today: NaiveDate) -> Option<StreakReport> {
    if entries.is_empty() {
        return None;
    }

    let mut ordered: Vec<&MoodEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.date);

    let mut current = 0;
    let mut longest = 0;
    for entry in &ordered {
        if entry.sentiment == Sentiment::Positive {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    let days_since_negative = ordered
        .iter()
        .filter(|e| e.sentiment == Sentiment::Negative)
        .map(|e| e.date)
        .max()
        .map(|last| today.signed_duration_since(last).num_days());

    debug!(
        "Streaks: current {}, longest {}, days since negative {:?}",
        current, longest, days_since_negative
    );

    Some(StreakReport {
        current_positive: current,
        longest_positive: longest,
        days_since_negative,
    })
}

//! Frequency, productivity, and day-of-week statistics over mood entries.

use crate::mood_core::{Mood, MoodEntry, Sentiment};
use chrono::{Datelike, Weekday};
use std::collections::BTreeMap;
use tracing::debug;

/// Count of entries per sentiment label. All three labels are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// Summary statistics over a non-empty set of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodStatistics {
    pub total_entries: usize,
    /// Most common mood and how many times it was logged.
    pub most_frequent: (Mood, usize),
    /// Mood with the highest mean number of activities, with that mean.
    pub most_productive: (Mood, f64),
    /// Most common weekday among positive entries; `None` when there are none.
    pub best_day: Option<Weekday>,
    pub sentiment_distribution: SentimentDistribution,
}

/// Computes [`MoodStatistics`], or `None` when there are no entries.
///
/// Ties are resolved deterministically: moods by vocabulary order, weekdays
/// Monday first.
///
/// # Examples
///
/// ```
/// use moodtrack::analytics::statistics::compute_statistics;
///
/// assert!(compute_statistics(&[]).is_none());
/// ```
pub fn compute_statistics(entries: &[MoodEntry]) -> Option<MoodStatistics> {
    if entries.is_empty() {
        return None;
    }

    let mut mood_counts: BTreeMap<Mood, usize> = BTreeMap::new();
    let mut activity_totals: BTreeMap<Mood, usize> = BTreeMap::new();
    let mut positive_days: BTreeMap<u32, (Weekday, usize)> = BTreeMap::new();

    for entry in entries {
        *mood_counts.entry(entry.mood).or_insert(0) += 1;
        *activity_totals.entry(entry.mood).or_insert(0) += entry.activity_count();

        if entry.sentiment == Sentiment::Positive {
            let weekday = entry.date.weekday();
            positive_days
                .entry(weekday.num_days_from_monday())
                .or_insert((weekday, 0))
                .1 += 1;
        }
    }

    let most_frequent = first_max(mood_counts.iter().map(|(m, c)| (*m, *c)))?;

    let means = mood_counts.iter().map(|(mood, count)| {
        let total = activity_totals.get(mood).copied().unwrap_or(0);
        (*mood, total as f64 / *count as f64)
    });
    let most_productive = first_max_by(means, |a, b| a > b)?;

    let best_day = first_max(positive_days.into_values()).map(|(day, _)| day);

    debug!(
        "Statistics over {} entries: most frequent {:?}, most productive {:?}, best day {:?}",
        entries.len(),
        most_frequent,
        most_productive,
        best_day
    );

    Some(MoodStatistics {
        total_entries: entries.len(),
        most_frequent,
        most_productive,
        best_day,
        sentiment_distribution: sentiment_distribution(entries),
    })
}

/// Mood counts, most common first; ties in vocabulary order.
pub fn mood_distribution(entries: &[MoodEntry]) -> Vec<(Mood, usize)> {
    let mut counts: BTreeMap<Mood, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.mood).or_insert(0) += 1;
    }

    let mut distribution: Vec<(Mood, usize)> = counts.into_iter().collect();
    // Stable sort keeps vocabulary order within equal counts
    distribution.sort_by(|a, b| b.1.cmp(&a.1));
    distribution
}

/// Per-sentiment counts over `entries`.
pub fn sentiment_distribution(entries: &[MoodEntry]) -> SentimentDistribution {
    let mut distribution = SentimentDistribution::default();
    for entry in entries {
        distribution.record(entry.sentiment);
    }
    distribution
}

fn first_max<K, I>(items: I) -> Option<(K, usize)>
where
    I: IntoIterator<Item = (K, usize)>,
{
    first_max_by(items, |a, b| a > b)
}

/// Keeps the first item whose value beats every earlier one under `greater`.
fn first_max_by<K, V, I, F>(items: I, greater: F) -> Option<(K, V)>
where
    I: IntoIterator<Item = (K, V)>,
    F: Fn(&V, &V) -> bool,
{
    let mut best: Option<(K, V)> = None;
    for (key, value) in items {
        let replace = match &best {
            Some((_, best_value)) => greater(&value, best_value),
            None => true,
        };
        if replace {
            best = Some((key, value));
        }
    }
    best
}

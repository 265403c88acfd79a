//! Activity x mood co-occurrence counts.

use crate::mood_core::{Mood, MoodEntry};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Counts of how often each activity was logged alongside each mood.
///
/// Rows are the distinct activities in alphabetical order; columns are the
/// moods that appear in the data, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityMoodMatrix {
    activities: Vec<String>,
    moods: Vec<Mood>,
    counts: BTreeMap<(String, Mood), usize>,
}

impl ActivityMoodMatrix {
    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    pub fn moods(&self) -> &[Mood] {
        &self.moods
    }

    /// Co-occurrence count; zero for combinations never logged.
    pub fn count(&self, activity: &str, mood: Mood) -> usize {
        self.counts
            .get(&(activity.to_string(), mood))
            .copied()
            .unwrap_or(0)
    }

    /// One row of counts per activity, aligned with [`Self::moods`].
    pub fn rows(&self) -> impl Iterator<Item = (&str, Vec<usize>)> + '_ {
        self.activities.iter().map(move |activity| {
            let row = self
                .moods
                .iter()
                .map(|mood| self.count(activity, *mood))
                .collect();
            (activity.as_str(), row)
        })
    }
}

impl fmt::Display for ActivityMoodMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .activities
            .iter()
            .map(|a| a.len())
            .chain(std::iter::once("Activities".len()))
            .max()
            .unwrap_or(0);

        write!(f, "{:<width$}", "Activities", width = label_width)?;
        for mood in &self.moods {
            write!(f, "  {:>w$}", mood.display_name(), w = mood.display_name().len())?;
        }
        writeln!(f)?;

        for (activity, row) in self.rows() {
            write!(f, "{:<width$}", activity, width = label_width)?;
            for (mood, count) in self.moods.iter().zip(row) {
                write!(f, "  {:>w$}", count, w = mood.display_name().len())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds the activity x mood matrix, or `None` when there are no entries.
///
/// Each activity of each entry contributes one count to its (activity, mood)
/// cell, so an activity listed twice on the same day counts twice.
pub fn correlate(entries: &[MoodEntry]) -> Option<ActivityMoodMatrix> {
    if entries.is_empty() {
        return None;
    }

    let mut activities: BTreeSet<String> = BTreeSet::new();
    let mut moods: BTreeSet<Mood> = BTreeSet::new();
    let mut counts: BTreeMap<(String, Mood), usize> = BTreeMap::new();

    for entry in entries {
        moods.insert(entry.mood);
        for activity in &entry.activities {
            activities.insert(activity.clone());
            *counts.entry((activity.clone(), entry.mood)).or_insert(0) += 1;
        }
    }

    Some(ActivityMoodMatrix {
        activities: activities.into_iter().collect(),
        moods: moods.into_iter().collect(),
        counts,
    })
}

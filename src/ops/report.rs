//! Plain-text rendering of the analytics reports.
//!
//! Every renderer takes an entry snapshot and returns the text to print.
//! No-data results print an explicit "No data available" line and statistics
//! that cannot be computed print "unavailable".

use crate::analytics::{compute_statistics, compute_streaks, correlate, mood_distribution};
use crate::mood_core::{MoodEntry, Sentiment};
use chrono::{NaiveDate, Weekday};
use std::fmt::Write;

const UNAVAILABLE: &str = "unavailable";

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Mood distribution with each mood's share of all entries, most common first.
pub fn trends_report(entries: &[MoodEntry]) -> String {
    let mut out = String::from("--- Mood Trends ---\n");
    let distribution = mood_distribution(entries);
    if distribution.is_empty() {
        out.push_str("No data available to analyze.\n");
        return out;
    }

    let total: usize = distribution.iter().map(|(_, count)| count).sum();
    for (mood, count) in &distribution {
        let share = *count as f64 * 100.0 / total as f64;
        let _ = writeln!(
            out,
            "{:<12}{:>4} entries ({:.1}%)",
            mood.display_name(),
            count,
            share
        );
    }
    out
}

/// Activity x mood co-occurrence table.
pub fn correlation_report(entries: &[MoodEntry]) -> String {
    let mut out = String::from("--- Activity Correlations ---\n");
    match correlate(entries) {
        Some(matrix) => {
            out.push_str("Activity-Mood Correlation Matrix:\n");
            let _ = write!(out, "{}", matrix);
        }
        None => out.push_str("No data available to analyze.\n"),
    }
    out
}

/// Frequency, productivity, best day, and sentiment distribution.
pub fn statistics_report(entries: &[MoodEntry]) -> String {
    let mut out = String::from("=== Mood Statistics ===\n");
    let Some(stats) = compute_statistics(entries) else {
        out.push_str("No data available for analysis.\n");
        return out;
    };

    let (frequent, frequent_count) = stats.most_frequent;
    let (productive, productive_avg) = stats.most_productive;
    let best_day = stats.best_day.map_or(UNAVAILABLE, weekday_name);

    let _ = writeln!(out, "Total entries: {}", stats.total_entries);
    let _ = writeln!(out, "Most frequent mood: {} ({} times)", frequent, frequent_count);
    let _ = writeln!(
        out,
        "Most productive mood: {} (avg {:.1} activities)",
        productive, productive_avg
    );
    let _ = writeln!(out, "Best day of the week: {}", best_day);
    out.push_str("\nSentiment Distribution:\n");
    for sentiment in Sentiment::ALL {
        let _ = writeln!(
            out,
            "{}: {} entries",
            sentiment,
            stats.sentiment_distribution.count(sentiment)
        );
    }
    out
}

/// Positive streaks and days since the last negative entry.
pub fn streaks_report(entries: &[MoodEntry], today: NaiveDate) -> String {
    let mut out = String::from("=== Mood Streaks ===\n");
    let Some(streaks) = compute_streaks(entries, today) else {
        out.push_str("No data available for streak analysis.\n");
        return out;
    };

    match streaks.days_since_negative {
        Some(days) => {
            let _ = writeln!(out, "Days since last negative mood: {}", days);
        }
        None => {
            let _ = writeln!(out, "Days since last negative mood: {}", UNAVAILABLE);
        }
    }
    let _ = writeln!(
        out,
        "Longest positive mood streak: {} days",
        streaks.longest_positive
    );
    let _ = writeln!(
        out,
        "Current positive mood streak: {} days",
        streaks.current_positive
    );
    out
}

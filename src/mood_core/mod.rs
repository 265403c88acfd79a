//! Core mood-entry types and input validation without I/O operations.
//!
//! This module contains the closed mood vocabulary, the sentiment label, the
//! `MoodEntry` record, and the pure functions that normalize raw user input
//! into those types. Nothing here touches the filesystem.

use crate::constants::{ACTIVITY_SEPARATOR, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use crate::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A recognized mood.
///
/// The declaration order is the vocabulary order. Analytics use it to break
/// ties deterministically, and the derived `Ord` follows it.
///
/// # Examples
///
/// ```
/// use moodtrack::mood_core::Mood;
///
/// let mood: Mood = "  EXCITED ".parse().unwrap();
/// assert_eq!(mood, Mood::Excited);
/// assert_eq!(mood.to_string(), "Excited");
/// assert_eq!(mood.as_key(), "excited");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Excited,
    Tired,
    Energetic,
    Calm,
    Stressed,
    Content,
    Frustrated,
}

impl Mood {
    /// Every mood, in vocabulary order.
    pub const ALL: [Mood; 10] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Excited,
        Mood::Tired,
        Mood::Energetic,
        Mood::Calm,
        Mood::Stressed,
        Mood::Content,
        Mood::Frustrated,
    ];

    /// Lower-case form used for input matching and suggestions.
    pub fn as_key(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Excited => "excited",
            Mood::Tired => "tired",
            Mood::Energetic => "energetic",
            Mood::Calm => "calm",
            Mood::Stressed => "stressed",
            Mood::Content => "content",
            Mood::Frustrated => "frustrated",
        }
    }

    /// Title-case display form, as stored in the entry table.
    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Excited => "Excited",
            Mood::Tired => "Tired",
            Mood::Energetic => "Energetic",
            Mood::Calm => "Calm",
            Mood::Stressed => "Stressed",
            Mood::Content => "Content",
            Mood::Frustrated => "Frustrated",
        }
    }

    /// The vocabulary as a comma-separated list, for help and error text.
    pub fn vocabulary_list() -> String {
        Mood::ALL
            .iter()
            .map(Mood::as_key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_mood(s)
    }
}

/// Three-way sentiment label cached on each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Every label, in reporting order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Positive" => Ok(Sentiment::Positive),
            "Negative" => Ok(Sentiment::Negative),
            "Neutral" => Ok(Sentiment::Neutral),
            other => Err(format!("unknown sentiment '{}'", other)),
        }
    }
}

/// One calendar day's mood record.
///
/// Entries are never edited in place; a same-day add replaces the whole entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    pub activities: Vec<String>,
    pub notes: String,
    pub sentiment: Sentiment,
}

impl MoodEntry {
    /// Activities joined the way they are persisted (`"reading, yoga"`).
    pub fn activities_field(&self) -> String {
        self.activities.join(ACTIVITY_SEPARATOR)
    }

    /// Number of activities logged for the day.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

/// Raw, unvalidated input for a new entry.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub mood: String,
    pub activities: String,
    pub notes: String,
}

impl EntryDraft {
    pub fn new(
        mood: impl Into<String>,
        activities: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            mood: mood.into(),
            activities: activities.into(),
            notes: notes.into(),
        }
    }
}

/// Validates a mood against the closed vocabulary.
///
/// Input is trimmed and lower-cased before matching. Unknown input is never
/// auto-corrected; instead the error carries the closest vocabulary mood,
/// chosen by the fewest distinct characters that appear in the candidate but
/// not in the input. Ties go to the earlier mood in vocabulary order.
///
/// # Errors
///
/// - `ValidationError::EmptyMood` for blank input
/// - `ValidationError::UnknownMood` for anything outside the vocabulary
///
/// # Examples
///
/// ```
/// use moodtrack::mood_core::{validate_mood, Mood};
/// use moodtrack::errors::ValidationError;
///
/// assert_eq!(validate_mood(" Calm "), Ok(Mood::Calm));
///
/// match validate_mood("tird") {
///     Err(ValidationError::UnknownMood { suggestion, .. }) => assert_eq!(suggestion, Mood::Tired),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn validate_mood(raw: &str) -> Result<Mood, ValidationError> {
    let input = raw.trim().to_lowercase();
    if input.is_empty() {
        return Err(ValidationError::EmptyMood);
    }

    if let Some(mood) = Mood::ALL.iter().find(|m| m.as_key() == input) {
        return Ok(*mood);
    }

    Err(ValidationError::UnknownMood {
        suggestion: nearest_mood(&input),
        input,
    })
}

/// Returns the vocabulary mood closest to `input`.
pub fn nearest_mood(input: &str) -> Mood {
    let input_chars: HashSet<char> = input.chars().collect();
    let mut best = Mood::ALL[0];
    let mut best_score = usize::MAX;

    for mood in Mood::ALL {
        let missing = mood
            .as_key()
            .chars()
            .collect::<HashSet<_>>()
            .difference(&input_chars)
            .count();
        if missing < best_score {
            best = mood;
            best_score = missing;
        }
    }

    best
}

/// Splits a comma-separated activity list into normalized labels.
///
/// Each label is trimmed and lower-cased; blank labels are dropped. Order and
/// duplicates are preserved.
///
/// # Errors
///
/// Returns `ValidationError::EmptyActivities` if no label remains.
pub fn parse_activities(raw: &str) -> Result<Vec<String>, ValidationError> {
    let activities: Vec<String> = raw
        .split(',')
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    if activities.is_empty() {
        return Err(ValidationError::EmptyActivities);
    }
    Ok(activities)
}

/// Parses a date in `YYYY-MM-DD` or `YYYYMMDD` form.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(raw, DATE_FORMAT_COMPACT))
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_mood_normalizes_case_and_whitespace() {
        assert_eq!(validate_mood("happy"), Ok(Mood::Happy));
        assert_eq!(validate_mood("  HaPpY\t"), Ok(Mood::Happy));
        assert_eq!(validate_mood("Frustrated"), Ok(Mood::Frustrated));
    }

    #[test]
    fn test_validate_mood_rejects_empty() {
        assert_eq!(validate_mood(""), Err(ValidationError::EmptyMood));
        assert_eq!(validate_mood("   "), Err(ValidationError::EmptyMood));
    }

    #[test]
    fn test_validate_mood_suggests_nearest() {
        match validate_mood("stresed") {
            Err(ValidationError::UnknownMood { input, suggestion }) => {
                assert_eq!(input, "stresed");
                assert_eq!(suggestion, Mood::Stressed);
            }
            other => panic!("Expected UnknownMood, got {:?}", other),
        }
    }

    #[test]
    fn test_nearest_mood_ties_resolve_in_vocabulary_order() {
        // "sad" and "calm" both miss 3 distinct characters of "l"
        assert_eq!(nearest_mood("l"), Mood::Sad);
        // "happy" and "sad" both miss 3 distinct characters of "h"
        assert_eq!(nearest_mood("h"), Mood::Happy);
        // "dsa" covers every character of "sad"
        assert_eq!(nearest_mood("dsa"), Mood::Sad);
    }

    #[test]
    fn test_mood_display_is_title_case() {
        for mood in Mood::ALL {
            let display = mood.to_string();
            let mut chars = display.chars();
            let first = chars.next().unwrap();
            assert!(first.is_uppercase());
            assert!(chars.all(|c| c.is_lowercase()));
            assert_eq!(display.to_lowercase(), mood.as_key());
        }
    }

    #[test]
    fn test_parse_activities_normalizes() {
        let activities = parse_activities(" Jogging ,READING,  , jogging").unwrap();
        assert_eq!(activities, vec!["jogging", "reading", "jogging"]);
    }

    #[test]
    fn test_parse_activities_rejects_blank() {
        assert_eq!(parse_activities(""), Err(ValidationError::EmptyActivities));
        assert_eq!(parse_activities(" , ,"), Err(ValidationError::EmptyActivities));
    }

    #[test]
    fn test_activities_field_joins_with_comma_space() {
        let entry = MoodEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            mood: Mood::Calm,
            activities: vec!["yoga".to_string(), "reading".to_string()],
            notes: String::new(),
            sentiment: Sentiment::Neutral,
        };
        assert_eq!(entry.activities_field(), "yoga, reading");
        assert_eq!(entry.activity_count(), 2);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(parse_date("2023-01-15"), Ok(expected));
        assert_eq!(parse_date("20230115"), Ok(expected));
        assert!(matches!(
            parse_date("not-a-date"),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_sentiment_round_trips_through_str() {
        for sentiment in Sentiment::ALL {
            assert_eq!(sentiment.as_str().parse::<Sentiment>(), Ok(sentiment));
        }
        assert!("Happy".parse::<Sentiment>().is_err());
    }
}

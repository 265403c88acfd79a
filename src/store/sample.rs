//! Synthetic entries for trying out the analytics on an empty journal.

use crate::constants::SAMPLE_ACTIVITIES;
use crate::errors::ValidationError;
use crate::mood_core::{Mood, MoodEntry, Sentiment};
use chrono::{Days, NaiveDate};
use rand::Rng;

/// Sentiment assigned to a sample entry, derived from its mood.
pub fn sample_sentiment(mood: Mood) -> Sentiment {
    match mood {
        Mood::Happy | Mood::Excited | Mood::Content => Sentiment::Positive,
        Mood::Sad | Mood::Anxious | Mood::Frustrated => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

/// Builds `count` entries dated `today - count` through `today - 1`.
///
/// Each entry gets a random mood and a single random activity; the sentiment
/// follows from the mood rather than from the classifier. Fails without
/// generating anything when `today - count` is before the earliest
/// representable date.
pub fn sample_entries<R: Rng + ?Sized>(
    count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<MoodEntry>, ValidationError> {
    let first = u64::try_from(count)
        .ok()
        .and_then(|days| today.checked_sub_days(Days::new(days)))
        .ok_or(ValidationError::SampleCountTooLarge(count))?;

    let entries = first
        .iter_days()
        .take(count)
        .map(|date| {
            let mood = Mood::ALL[rng.gen_range(0..Mood::ALL.len())];
            let activity = SAMPLE_ACTIVITIES[rng.gen_range(0..SAMPLE_ACTIVITIES.len())];

            MoodEntry {
                date,
                mood,
                activities: vec![activity.to_string()],
                notes: format!("Sample entry for {} - feeling {}", date, mood.as_key()),
                sentiment: sample_sentiment(mood),
            }
        })
        .collect();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_entries_cover_the_days_before_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let entries = sample_entries(5, today, &mut rng).unwrap();

        let dates: Vec<String> = entries.iter().map(|e| e.date.to_string()).collect();
        assert_eq!(
            dates,
            vec!["2024-02-25", "2024-02-26", "2024-02-27", "2024-02-28", "2024-02-29"]
        );
    }

    #[test]
    fn test_sample_entries_are_consistent() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for entry in sample_entries(50, today, &mut rng).unwrap() {
            assert_eq!(entry.activities.len(), 1);
            assert!(SAMPLE_ACTIVITIES.contains(&entry.activities[0].as_str()));
            assert_eq!(entry.sentiment, sample_sentiment(entry.mood));
            assert!(entry.notes.ends_with(entry.mood.as_key()));
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_entries(0, today, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_count_reaching_past_earliest_date_is_rejected() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            sample_entries(100_000_000, today, &mut rng),
            Err(ValidationError::SampleCountTooLarge(100_000_000))
        );
        assert_eq!(
            sample_entries(usize::MAX, today, &mut rng),
            Err(ValidationError::SampleCountTooLarge(usize::MAX))
        );
    }

    #[test]
    fn test_count_ending_at_earliest_date_is_accepted() {
        let mut rng = StdRng::seed_from_u64(1);
        let today = NaiveDate::MIN.checked_add_days(Days::new(3)).unwrap();

        let entries = sample_entries(3, today, &mut rng).unwrap();
        assert_eq!(entries.first().unwrap().date, NaiveDate::MIN);
        assert_eq!(entries.last().unwrap().date, today.pred_opt().unwrap());
    }
}

//! Sentiment classification of journal notes.
//!
//! A [`PolarityScorer`] turns text into a polarity in `[-1, 1]`; the
//! [`SentimentClassifier`] buckets that polarity into a [`Sentiment`] label.
//! The scorer is a collaborator handed in by the caller, so alternative
//! scoring back ends can be swapped in without touching the store.

mod lexicon;

pub use lexicon::LexiconScorer;

use crate::constants::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use crate::mood_core::Sentiment;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure reported by a polarity scorer.
#[derive(Debug, Error)]
#[error("Sentiment scoring failed: {0}")]
pub struct SentimentError(pub String);

/// Computes a polarity score for a piece of text.
pub trait PolarityScorer {
    /// Returns a polarity in `[-1, 1]`, where 0 is neutral.
    fn polarity(&self, text: &str) -> Result<f32, SentimentError>;
}

/// Maps free-text notes to a three-way sentiment label.
///
/// # Example
///
/// ```
/// use moodtrack::sentiment::SentimentClassifier;
/// use moodtrack::mood_core::Sentiment;
///
/// let classifier = SentimentClassifier::default();
/// assert_eq!(classifier.classify(""), Sentiment::Neutral);
/// assert_eq!(classifier.classify("Had a great run"), Sentiment::Positive);
/// assert_eq!(classifier.classify("Awful commute"), Sentiment::Negative);
/// ```
pub struct SentimentClassifier {
    scorer: Box<dyn PolarityScorer>,
}

impl SentimentClassifier {
    pub fn new(scorer: impl PolarityScorer + 'static) -> Self {
        Self {
            scorer: Box::new(scorer),
        }
    }

    /// Classifies `text`.
    ///
    /// Polarity above 0.1 is positive, below -0.1 negative, anything else
    /// neutral. A scorer failure is logged and treated as neutral so callers
    /// never abort on it.
    pub fn classify(&self, text: &str) -> Sentiment {
        let text = text.trim();
        if text.is_empty() {
            return Sentiment::Neutral;
        }

        match self.scorer.polarity(text) {
            Ok(polarity) => {
                debug!("Scored notes with polarity {:.3}", polarity);
                label_for_polarity(polarity)
            }
            Err(e) => {
                warn!("{}; falling back to Neutral", e);
                Sentiment::Neutral
            }
        }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(LexiconScorer::default())
    }
}

/// Buckets a polarity value into a sentiment label.
pub fn label_for_polarity(polarity: f32) -> Sentiment {
    if polarity > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(f32);

    impl PolarityScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> Result<f32, SentimentError> {
            Ok(self.0)
        }
    }

    struct FailingScorer;

    impl PolarityScorer for FailingScorer {
        fn polarity(&self, _text: &str) -> Result<f32, SentimentError> {
            Err(SentimentError("model unavailable".to_string()))
        }
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(label_for_polarity(0.1), Sentiment::Neutral);
        assert_eq!(label_for_polarity(0.11), Sentiment::Positive);
        assert_eq!(label_for_polarity(-0.1), Sentiment::Neutral);
        assert_eq!(label_for_polarity(-0.11), Sentiment::Negative);
        assert_eq!(label_for_polarity(0.0), Sentiment::Neutral);
    }

    #[test]
    fn test_classify_uses_scorer() {
        assert_eq!(
            SentimentClassifier::new(FixedScorer(0.8)).classify("anything"),
            Sentiment::Positive
        );
        assert_eq!(
            SentimentClassifier::new(FixedScorer(-0.8)).classify("anything"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_empty_text_is_neutral_without_scoring() {
        let classifier = SentimentClassifier::new(FixedScorer(0.9));
        assert_eq!(classifier.classify(""), Sentiment::Neutral);
        assert_eq!(classifier.classify("   "), Sentiment::Neutral);
    }

    #[test]
    fn test_scorer_failure_falls_back_to_neutral() {
        let classifier = SentimentClassifier::new(FailingScorer);
        assert_eq!(classifier.classify("a wonderful day"), Sentiment::Neutral);
    }
}

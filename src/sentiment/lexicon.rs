//! Word-level polarity lexicon used by the default scorer.
//!
//! Maps words to polarity values in `[-1, 1]` and scores free text by averaging
//! the polarity of the words it recognizes, adjusting for a preceding
//! intensifier or negator.

use super::{PolarityScorer, SentimentError};
use std::collections::HashMap;

/// Multiplier applied to a word preceded by an intensifier ("very good").
const INTENSIFIER_FACTOR: f32 = 1.3;
/// Multiplier applied to a word preceded by a negator ("not good").
const NEGATION_FACTOR: f32 = -0.5;

const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "so",
    "extremely",
    "incredibly",
    "super",
    "quite",
    "totally",
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "didn't", "isn't", "wasn't", "can't", "couldn't", "won't",
    "hardly",
];

/// A polarity lexicon for scoring journal notes.
///
/// Words are matched case-insensitively.
///
/// # Example
///
/// ```
/// use moodtrack::sentiment::{LexiconScorer, PolarityScorer};
///
/// let lexicon = LexiconScorer::default();
/// let polarity = lexicon.polarity("What a wonderful, relaxing day").unwrap();
/// assert!(polarity > 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f32>,
}

impl LexiconScorer {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add a positive word with intensity in `[0, 1]`.
    pub fn add_positive(&mut self, word: &str, intensity: f32) {
        self.words
            .insert(word.to_lowercase(), intensity.clamp(0.0, 1.0));
    }

    /// Add a negative word with intensity in `[0, 1]` (stored as negative).
    pub fn add_negative(&mut self, word: &str, intensity: f32) {
        self.words
            .insert(word.to_lowercase(), -intensity.clamp(0.0, 1.0));
    }

    /// Polarity of a single word, if known.
    pub fn get(&self, word: &str) -> Option<f32> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphabetic() || c == '\''))
            .map(|w| w.trim_matches('\'').to_lowercase())
            .filter(|w| !w.is_empty())
            .collect()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        let mut lexicon = Self::new();

        // Strongly positive
        for word in &[
            "excellent",
            "wonderful",
            "amazing",
            "fantastic",
            "brilliant",
            "perfect",
            "awesome",
            "love",
            "loved",
            "best",
            "thrilled",
            "delighted",
        ] {
            lexicon.add_positive(word, 0.9);
        }

        // Moderately positive
        for word in &[
            "good",
            "great",
            "nice",
            "happy",
            "glad",
            "pleased",
            "enjoyed",
            "enjoy",
            "fun",
            "lovely",
            "excited",
            "exciting",
            "productive",
            "proud",
            "grateful",
            "relaxed",
            "relaxing",
            "energized",
            "energetic",
            "peaceful",
            "calm",
            "content",
            "beautiful",
        ] {
            lexicon.add_positive(word, 0.6);
        }

        // Mildly positive
        for word in &["okay", "ok", "fine", "decent", "better", "hopeful", "rested"] {
            lexicon.add_positive(word, 0.3);
        }

        // Strongly negative
        for word in &[
            "terrible",
            "awful",
            "horrible",
            "miserable",
            "hate",
            "hated",
            "worst",
            "devastated",
            "depressed",
        ] {
            lexicon.add_negative(word, 0.9);
        }

        // Moderately negative
        for word in &[
            "bad",
            "sad",
            "angry",
            "upset",
            "anxious",
            "worried",
            "stressed",
            "stressful",
            "frustrated",
            "frustrating",
            "lonely",
            "exhausted",
            "annoying",
            "annoyed",
            "difficult",
            "hard",
            "sick",
            "painful",
        ] {
            lexicon.add_negative(word, 0.6);
        }

        // Mildly negative
        for word in &["tired", "boring", "bored", "dull", "meh", "slow", "worse"] {
            lexicon.add_negative(word, 0.3);
        }

        lexicon
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f32, SentimentError> {
        let tokens = Self::tokenize(text);
        let mut sum = 0.0;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut value) = self.words.get(token).copied() else {
                continue;
            };

            if i > 0 {
                let prev = tokens[i - 1].as_str();
                if INTENSIFIERS.contains(&prev) {
                    value = (value * INTENSIFIER_FACTOR).clamp(-1.0, 1.0);
                    if i > 1 && NEGATORS.contains(&tokens[i - 2].as_str()) {
                        value *= NEGATION_FACTOR;
                    }
                } else if NEGATORS.contains(&prev) {
                    value *= NEGATION_FACTOR;
                }
            }

            sum += value;
            matched += 1;
        }

        if matched == 0 {
            return Ok(0.0);
        }
        Ok((sum / matched as f32).clamp(-1.0, 1.0))
    }
}

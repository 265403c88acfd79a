//! The "log today's mood" workflow.

use crate::ai::SuggestionProvider;
use crate::errors::AppResult;
use crate::mood_core::{EntryDraft, Sentiment};
use crate::store::{AddOutcome, EntryStore, OverwriteDecision};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Result of [`log_mood`].
#[derive(Debug)]
pub struct LogReport {
    pub outcome: AddOutcome,
    /// `None` when no provider was given or nothing was saved; `Err` carries
    /// the message of a failed suggestion request.
    pub suggestion: Option<Result<String, String>>,
    /// Tip for the saved entry's sentiment; `None` when nothing was saved.
    pub tip: Option<&'static str>,
}

impl LogReport {
    pub fn saved(&self) -> bool {
        matches!(self.outcome, AddOutcome::Saved { .. })
    }
}

/// Fixed advice for a sentiment label.
pub fn mood_tip(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => {
            "Keep up the great work! Consider maintaining your routine to sustain your positive mood."
        }
        Sentiment::Neutral => {
            "It's a balanced day. To enhance your mood, try engaging in activities you enjoy."
        }
        Sentiment::Negative => {
            "I'm sorry you're feeling this way. Consider reaching out to a friend or trying a relaxation technique."
        }
    }
}

/// Adds an entry for `date` and, once it is saved, gathers follow-up advice.
///
/// # Flow
///
/// 1. Add the entry through the store (validation, overwrite decision, write)
/// 2. If saved and a provider is given, request suggestions
/// 3. Attach the tip for the entry's sentiment
///
/// # Errors
///
/// Returns validation, store, and lock errors from [`EntryStore::add`].
/// Suggestion failures are logged and reported inside the [`LogReport`].
pub fn log_mood(
    store: &EntryStore,
    suggester: Option<&dyn SuggestionProvider>,
    draft: &EntryDraft,
    date: NaiveDate,
    decision: &mut dyn OverwriteDecision,
) -> AppResult<LogReport> {
    let outcome = store.add(draft, date, decision)?;

    let entry = match &outcome {
        AddOutcome::Saved { entry, .. } => entry.clone(),
        AddOutcome::NotSaved { .. } => {
            info!("Entry for {} not saved", date);
            return Ok(LogReport {
                outcome,
                suggestion: None,
                tip: None,
            });
        }
    };

    let suggestion = suggester.map(|provider| {
        provider
            .suggest(entry.mood, &entry.activities_field())
            .map_err(|e| {
                warn!("Failed to fetch suggestions: {}", e);
                e.to_string()
            })
    });

    Ok(LogReport {
        outcome,
        suggestion,
        tip: Some(mood_tip(entry.sentiment)),
    })
}

//! Intents for the shorten form.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Replace the input text. Touches nothing else.
    SetInputUrl { value: String },

    /// A cycle started: mark in flight, clear the previous outcome.
    BeginSubmission,

    /// The service returned a short URL.
    CompleteSuccess { short_url: String },

    /// The cycle failed; `message` is already user-safe.
    CompleteFailure { message: String },
}

impl FormIntent {
    /// True for the two intents that settle a cycle.
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            FormIntent::CompleteSuccess { .. } | FormIntent::CompleteFailure { .. }
        )
    }
}

impl Intent for FormIntent {}

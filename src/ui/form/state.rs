//! State of the shorten form.

use crate::ui::mvi::UiState;

/// Everything the form screen shows.
///
/// `result` and `error` are never both set. `in_flight` is true only
/// between `BeginSubmission` and the matching completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub(super) input_url: String,
    pub(super) result: Option<String>,
    pub(super) error: Option<String>,
    pub(super) in_flight: bool,
}

/// Where the form is in the request lifecycle. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl UiState for FormState {}

impl FormState {
    pub fn input_url(&self) -> &str {
        &self.input_url
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn phase(&self) -> FormPhase {
        if self.in_flight {
            FormPhase::InFlight
        } else if self.result.is_some() {
            FormPhase::Succeeded
        } else if self.error.is_some() {
            FormPhase::Failed
        } else {
            FormPhase::Idle
        }
    }
}

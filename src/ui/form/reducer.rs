//! Reducer for the shorten form.

use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormState;

/// Pure transitions of [`FormState`]. Every intent is accepted in every
/// state; single-flight is enforced by the caller.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetInputUrl { value } => FormState {
                input_url: value,
                ..state
            },

            FormIntent::BeginSubmission => FormState {
                result: None,
                error: None,
                in_flight: true,
                ..state
            },

            FormIntent::CompleteSuccess { short_url } => FormState {
                result: Some(short_url),
                error: None,
                in_flight: false,
                ..state
            },

            FormIntent::CompleteFailure { message } => FormState {
                result: None,
                error: Some(message),
                in_flight: false,
                ..state
            },
        }
    }
}

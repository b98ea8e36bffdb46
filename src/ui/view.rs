//! Projection of [`FormState`] into what the screen shows.
//!
//! Kept separate from drawing so the visible rules (trigger disabled while
//! in flight, panels shown only when populated) can be checked without a
//! terminal.

use crate::ui::form::FormState;

pub const PLACEHOLDER: &str = "https://example.com/very/long/url...";
pub const SUBMIT_LABEL: &str = "Shorten URL";
pub const IN_FLIGHT_LABEL: &str = "Shortening...";
pub const RESULT_LABEL: &str = "Shortened URL:";
pub const ERROR_PREFIX: &str = "Error:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerView {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a> {
    pub input: &'a str,
    pub trigger: TriggerView,
    /// Transient notice under the trigger (blocked submit, copy result).
    pub hint: Option<&'a str>,
    pub error: Option<&'a str>,
    pub result: Option<&'a str>,
}

impl<'a> FormView<'a> {
    pub fn project(state: &'a FormState, hint: Option<&'a str>) -> Self {
        let in_flight = state.is_in_flight();
        Self {
            input: state.input_url(),
            trigger: TriggerView {
                label: if in_flight { IN_FLIGHT_LABEL } else { SUBMIT_LABEL },
                enabled: !in_flight,
            },
            hint,
            error: state.error().filter(|e| !e.is_empty()),
            result: state.result().filter(|r| !r.is_empty()),
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        self.input.is_empty()
    }
}

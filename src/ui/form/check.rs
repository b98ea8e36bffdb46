//! Checks the input control performs on its own before a submit.
//!
//! Mirrors an `<input type="url" required>`: the value must be present and
//! parse as an absolute URL. A failed check blocks the submit without
//! starting a cycle.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIssue {
    Empty,
    NotAbsoluteUrl,
}

impl InputIssue {
    pub fn hint(&self) -> &'static str {
        match self {
            InputIssue::Empty => "Please fill out this field.",
            InputIssue::NotAbsoluteUrl => "Please enter a URL.",
        }
    }
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hint())
    }
}

pub fn check_input(value: &str) -> Result<(), InputIssue> {
    // Browsers strip surrounding whitespace from url inputs before checking.
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputIssue::Empty);
    }
    reqwest::Url::parse(trimmed)
        .map(|_| ())
        .map_err(|_| InputIssue::NotAbsoluteUrl)
}

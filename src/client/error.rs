//! Failure kinds of a single shorten call.
//!
//! The three kinds stay distinct for logging; the form only ever shows
//! [`ShortenError::user_message`].

use thiserror::Error;

/// Fallback shown when a cycle ends without a more specific message.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum ShortenError {
    /// No response was obtained (connect refused, DNS, timeout).
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response obtained with a non-success status. The body is not kept.
    #[error("Shortening service returned status {status}")]
    Status { status: u16 },

    /// Success status, but the body did not match `{"shortUrl": string}`.
    #[error("Unexpected response body: {reason}")]
    Decode { reason: String },
}

impl ShortenError {
    /// Short, user-safe message for the error panel.
    pub fn user_message(&self) -> &'static str {
        match self {
            ShortenError::Transport { .. } => "Could not reach the shortening service",
            ShortenError::Status { .. } => "Failed to shorten URL",
            ShortenError::Decode { .. } => "Unexpected response from the shortening service",
        }
    }

    /// Stable identifier used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ShortenError::Transport { .. } => "transport",
            ShortenError::Status { .. } => "status",
            ShortenError::Decode { .. } => "decode",
        }
    }

    /// Technical details for diagnostics.
    pub fn details(&self) -> String {
        match self {
            ShortenError::Transport { endpoint, source } => {
                let cause = if source.is_timeout() {
                    "timed out"
                } else if source.is_connect() {
                    "connection failed"
                } else {
                    "request error"
                };
                format!("POST {} {}: {}", endpoint, cause, source)
            }
            ShortenError::Status { status } => format!("HTTP {}", status),
            ShortenError::Decode { reason } => reason.clone(),
        }
    }
}

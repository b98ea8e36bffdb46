use serde::{Deserialize, Serialize};

/// Outbound payload for `POST /api/v1/shorten`.
///
/// `url` is sent exactly as typed; no trimming or normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    pub url: String,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Parsed success body. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

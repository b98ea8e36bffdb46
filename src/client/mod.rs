//! HTTP client for the remote shortening service.

mod error;
mod types;

pub use error::{ShortenError, GENERIC_FAILURE};
pub use types::{ShortenRequest, ShortenResponse};

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::config::ServiceConfig;

pub const SHORTEN_PATH: &str = "/api/v1/shorten";

/// Performs the single `POST /api/v1/shorten` call of a submission cycle.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ShortenClient {
    client: Client,
    endpoint: String,
}

impl ShortenClient {
    pub fn new(service: &ServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(service.connect_timeout())
            .timeout(service.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint_for(&service.base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one request. No retries.
    pub async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ShortenError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ShortenError::Transport {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| ShortenError::Transport {
            endpoint: self.endpoint.clone(),
            source: e,
        })?;

        let parsed: ShortenResponse =
            serde_json::from_slice(&body).map_err(|e| ShortenError::Decode {
                reason: e.to_string(),
            })?;

        if parsed.short_url.is_empty() {
            return Err(ShortenError::Decode {
                reason: "shortUrl is empty".to_string(),
            });
        }

        Ok(parsed)
    }
}

/// Joins the configured origin with the shorten path, ignoring trailing slashes.
pub fn endpoint_for(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SHORTEN_PATH)
}

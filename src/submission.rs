//! Submission controller: runs one request/response cycle of the form.
//!
//! A cycle is `BeginSubmission`, one `POST`, then exactly one of
//! `CompleteSuccess` / `CompleteFailure`. Every failure, including a panic
//! inside the request task, is turned into `CompleteFailure` here and never
//! propagates further.

use std::future::Future;
use tokio::runtime::Handle;

use crate::client::{ShortenClient, ShortenRequest, GENERIC_FAILURE};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;

#[derive(Clone)]
pub struct SubmissionController {
    client: ShortenClient,
}

impl SubmissionController {
    pub fn new(client: ShortenClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ShortenClient {
        &self.client
    }

    /// Starts a cycle: marks the state in flight and builds the payload from
    /// the input exactly as typed.
    ///
    /// Does not check whether a cycle is already running.
    pub fn begin(state: FormState, input_url: &str) -> (FormState, ShortenRequest) {
        let state = FormReducer::reduce(state, FormIntent::BeginSubmission);
        (state, ShortenRequest::new(input_url))
    }

    /// Performs the network call and maps its outcome to a completion intent.
    pub async fn resolve(&self, request: ShortenRequest) -> FormIntent {
        match self.client.shorten(&request).await {
            Ok(response) => {
                tracing::info!(
                    target: "shortener::submission",
                    short_url = %response.short_url,
                    "URL shortened"
                );
                FormIntent::CompleteSuccess {
                    short_url: response.short_url,
                }
            }
            Err(err) => {
                tracing::warn!(
                    target: "shortener::submission",
                    kind = err.kind(),
                    details = %err.details(),
                    "Shorten request failed"
                );
                FormIntent::CompleteFailure {
                    message: err.user_message().to_string(),
                }
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but a panic in the request task still
    /// settles the cycle with the generic failure message.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn settle(&self, request: ShortenRequest) -> FormIntent {
        let controller = self.clone();
        settle_task(async move { controller.resolve(request).await }).await
    }

    /// Runs the cycle in the background and hands the completion intent to
    /// `on_settled` exactly once. There is no way to cancel it.
    pub fn spawn<F>(&self, runtime: &Handle, request: ShortenRequest, on_settled: F)
    where
        F: FnOnce(FormIntent) + Send + 'static,
    {
        let controller = self.clone();
        runtime.spawn(async move {
            let intent = controller.settle(request).await;
            on_settled(intent);
        });
    }

    /// Runs a whole cycle and returns the settled state.
    pub async fn submit(&self, state: FormState, current_input_url: &str) -> FormState {
        let (state, request) = Self::begin(state, current_input_url);
        let intent = self.settle(request).await;
        FormReducer::reduce(state, intent)
    }
}

/// Runs `task` on its own tokio task so a panic inside it becomes a
/// `CompleteFailure` with the generic message.
async fn settle_task<F>(task: F) -> FormIntent
where
    F: Future<Output = FormIntent> + Send + 'static,
{
    match tokio::spawn(task).await {
        Ok(intent) => intent,
        Err(err) => {
            tracing::error!(
                target: "shortener::submission",
                error = %err,
                "Shorten task aborted"
            );
            FormIntent::CompleteFailure {
                message: GENERIC_FAILURE.to_string(),
            }
        }
    }
}

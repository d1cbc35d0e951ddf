//! crates/issue_analysis_core/src/client.rs
//!
//! The request/render cycle: read the issue number, call the backend once,
//! and replace the result container with a success or error view.

use crate::domain::{AnalysisOutcome, IssueNumber, EMPTY_INPUT_MESSAGE};
use crate::ports::{AnalysisBackend, InputField, LoadingIndicator, ResultView};
use crate::render::{render_analysis, render_error, render_port_failure, RenderError};
use std::sync::Arc;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

/// A user interaction the client is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Pointer activation of the submit control.
    Click,
    /// A key press on the input field, carrying the key name (e.g. `"Enter"`).
    KeyPress(String),
}

impl TriggerEvent {
    pub fn triggers_submit(&self) -> bool {
        match self {
            Self::Click => true,
            Self::KeyPress(key) => key == "Enter",
        }
    }
}

/// Translates one issue number into one rendered result block.
///
/// The client holds no per-request state. Overlapping submissions are not
/// coordinated: whichever response resolves last owns the result container.
#[derive(Clone)]
pub struct IssueAnalysisClient {
    input: Arc<dyn InputField>,
    view: Arc<dyn ResultView>,
    loading: Arc<dyn LoadingIndicator>,
    backend: Arc<dyn AnalysisBackend>,
}

impl IssueAnalysisClient {
    pub fn new(
        input: Arc<dyn InputField>,
        view: Arc<dyn ResultView>,
        loading: Arc<dyn LoadingIndicator>,
        backend: Arc<dyn AnalysisBackend>,
    ) -> Self {
        Self {
            input,
            view,
            loading,
            backend,
        }
    }

    /// Runs a submission if `event` is one of the bound triggers.
    pub async fn handle_event(&self, event: TriggerEvent) {
        if event.triggers_submit() {
            self.submit_analysis().await;
        } else {
            debug!(?event, "Ignoring event that is not bound to submission");
        }
    }

    /// Reads the input field and renders the analysis for it.
    ///
    /// Never fails: every error ends up as an error block in the result view.
    pub async fn submit_analysis(&self) {
        let raw = self.input.value();
        let Some(issue) = IssueNumber::parse(&raw) else {
            debug!("Rejected empty issue number");
            self.show(render_error(EMPTY_INPUT_MESSAGE));
            return;
        };

        let span = info_span!("analyze", request_id = %Uuid::new_v4(), issue = %issue);
        self.request_and_render(issue).instrument(span).await;
    }

    async fn request_and_render(&self, issue: IssueNumber) {
        // Hidden again on drop, whichever way this future ends.
        let _loading = LoadingGuard::show(self.loading.clone());
        self.view.set_html(String::new());

        info!("Requesting analysis");
        let html = match self.backend.analyze(&issue).await {
            Ok(reply) => {
                debug!(status = reply.status, "Received analysis reply");
                match reply.into_outcome() {
                    AnalysisOutcome::Success(result) => render_analysis(&result).or_else(|e| {
                        error!(error = %e, "Failed to render analysis");
                        render_error(&format!("Error: {e}"))
                    }),
                    AnalysisOutcome::Failure(message) => {
                        warn!(%message, "Backend reported a failure");
                        render_error(&message)
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Analysis request failed");
                render_port_failure(&e)
            }
        };
        self.show(html);
    }

    fn show(&self, html: Result<String, RenderError>) {
        match html {
            Ok(html) => self.view.set_html(html),
            Err(e) => error!(error = %e, "Failed to render error block"),
        }
    }
}

/// Shows the loading indicator on creation and hides it on drop.
struct LoadingGuard(Arc<dyn LoadingIndicator>);

impl LoadingGuard {
    fn show(indicator: Arc<dyn LoadingIndicator>) -> Self {
        indicator.set_visible(true);
        Self(indicator)
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.set_visible(false);
    }
}

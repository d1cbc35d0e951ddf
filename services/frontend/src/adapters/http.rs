//! services/frontend/src/adapters/http.rs
//!
//! This module contains the adapter for the analysis backend's HTTP API.
//! It implements the `AnalysisBackend` port from the `core` crate.

use crate::config::PathEncoding;
use async_trait::async_trait;
use issue_analysis_core::domain::{AnalysisResult, BackendReply, IssueNumber};
use issue_analysis_core::ports::{AnalysisBackend, PortError, PortResult};
use reqwest::Url;
use std::error::Error as StdError;
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `AnalysisBackend` port over `GET /analyze/{issue}`.
///
/// No timeout or retry is configured; a hung request stays pending until the
/// transport gives up.
#[derive(Clone)]
pub struct HttpAnalysisBackend {
    client: reqwest::Client,
    base_url: Url,
    encoding: PathEncoding,
}

impl HttpAnalysisBackend {
    /// Creates a new `HttpAnalysisBackend` with a default `reqwest` client.
    pub fn new(base_url: Url, encoding: PathEncoding) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, encoding)
    }

    pub fn with_client(client: reqwest::Client, base_url: Url, encoding: PathEncoding) -> Self {
        Self {
            client,
            base_url,
            encoding,
        }
    }

    /// Builds the request URL for `issue` under the configured base URL.
    pub fn request_url(&self, issue: &IssueNumber) -> PortResult<Url> {
        match self.encoding {
            PathEncoding::Percent => {
                let mut url = self.base_url.clone();
                {
                    let mut segments = url.path_segments_mut().map_err(|()| {
                        PortError::InvalidRequest(format!(
                            "'{}' cannot be used as a base URL",
                            self.base_url
                        ))
                    })?;
                    segments.pop_if_empty().push("analyze").push(issue.as_str());
                }
                Ok(url)
            }
            PathEncoding::Verbatim => {
                let base = self.base_url.as_str().trim_end_matches('/');
                Url::parse(&format!("{base}/analyze/{issue}"))
                    .map_err(|e| PortError::InvalidRequest(e.to_string()))
            }
        }
    }
}

//=========================================================================================
// `AnalysisBackend` Trait Implementation
//=========================================================================================

#[async_trait]
impl AnalysisBackend for HttpAnalysisBackend {
    async fn analyze(&self, issue: &IssueNumber) -> PortResult<BackendReply> {
        let url = self.request_url(issue)?;
        debug!(%url, "Sending analysis request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PortError::Transport(error_chain(&e)))?;

        // The body is decoded before the status is looked at, so a non-JSON
        // error page is a decode failure rather than a server-reported one.
        let status = response.status().as_u16();
        let body = response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| PortError::Decode(error_chain(&e)))?;

        debug!(status, "Decoded analysis response");
        Ok(BackendReply { status, body })
    }
}

/// Joins an error and its sources into one line.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

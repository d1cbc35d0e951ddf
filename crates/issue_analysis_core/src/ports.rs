//! crates/issue_analysis_core/src/ports.rs
//!
//! Defines the contracts (traits) between the client and the outside world.
//! The analysis backend and every page element the client touches are ports,
//! so the client can be driven without a live page or network.

use crate::domain::{BackendReply, IssueNumber};
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The request could not be sent or no response arrived.
    #[error("Request failed: {0}")]
    Transport(String),
    /// A response arrived but its body was not valid JSON of the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),
    /// The request URL could not be built from the identifier.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Network Port
//=========================================================================================

#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Performs one `GET /analyze/{issue}` and decodes the JSON body.
    ///
    /// A non-success HTTP status is not an error here; it is reported through
    /// `BackendReply::status`.
    async fn analyze(&self, issue: &IssueNumber) -> PortResult<BackendReply>;
}

//=========================================================================================
// Page Ports
//=========================================================================================

/// The issue-number text input.
pub trait InputField: Send + Sync {
    fn value(&self) -> String;
}

/// The container whose contents each render replaces.
pub trait ResultView: Send + Sync {
    fn set_html(&self, html: String);
}

pub trait LoadingIndicator: Send + Sync {
    fn set_visible(&self, visible: bool);
}

/// The page itself, used only by the cosmetic actions.
pub trait PageSurface: Send + Sync {
    fn alert(&self, message: &str);
    fn set_background(&self, color: &str);
}

//! services/frontend/src/error.rs
//!
//! Defines the primary error type for the frontend service.

use crate::config::ConfigError;

/// The primary error type for the `frontend` service.
///
/// Analysis failures never reach this type; the client renders them.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents a standard Input/Output error (e.g., reading the console).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub mod client;
pub mod decor;
pub mod domain;
pub mod ports;
pub mod render;

pub use client::{IssueAnalysisClient, TriggerEvent};
pub use domain::{AnalysisOutcome, AnalysisResult, BackendReply, IssueNumber, SentimentTier};
pub use ports::{
    AnalysisBackend, InputField, LoadingIndicator, PageSurface, PortError, PortResult, ResultView,
};

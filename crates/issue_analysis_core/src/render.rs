//! crates/issue_analysis_core/src/render.rs
//!
//! Turns analysis outcomes into the HTML fragments written into the result
//! container. All interpolated text goes through askama's HTML escaping.

use crate::domain::{non_empty, priority_class, sentiment_class, AnalysisResult};
use crate::ports::PortError;
use askama::Template;
use chrono::DateTime;

const NO_SUMMARY: &str = "No summary available";
const DEFAULT_SENTIMENT: &str = "Neutral";
const DEFAULT_PRIORITY: &str = "Medium";

/// Raised when a template fails to render.
#[derive(Debug, thiserror::Error)]
#[error("Template rendering failed: {0}")]
pub struct RenderError(#[from] askama::Error);

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "analysis.html")]
struct AnalysisTemplate {
    has_header: bool,
    heading: String,
    details: Vec<DetailRow>,
    summary: String,
    sentiment: String,
    sentiment_class: &'static str,
    priority: String,
    priority_class: String,
    lists: Vec<ListSection>,
}

#[derive(Template)]
#[template(source = r#"<div class="error">{{ message }}</div>"#, ext = "html")]
struct ErrorTemplate<'a> {
    message: &'a str,
}

/// One "label: value" line in the issue header.
struct DetailRow {
    label: &'static str,
    value: String,
}

/// A titled bullet list with the text shown when it has no items.
struct ListSection {
    heading: &'static str,
    items: Vec<String>,
    fallback: &'static str,
}

impl ListSection {
    fn new(heading: &'static str, items: Option<&Vec<String>>, fallback: &'static str) -> Self {
        Self {
            heading,
            items: items.cloned().unwrap_or_default(),
            fallback,
        }
    }
}

// ============================================================
// RENDERING
// ============================================================

/// Renders the success view for a response without an `error` field.
pub fn render_analysis(result: &AnalysisResult) -> Result<String, RenderError> {
    let template = AnalysisTemplate {
        has_header: result.has_issue_metadata(),
        heading: issue_heading(result),
        details: issue_details(result),
        summary: non_empty(result.summary.as_deref())
            .unwrap_or(NO_SUMMARY)
            .to_string(),
        sentiment: non_empty(result.sentiment.as_deref())
            .unwrap_or(DEFAULT_SENTIMENT)
            .to_string(),
        sentiment_class: sentiment_class(result.sentiment.as_deref()),
        priority: non_empty(result.priority.as_deref())
            .unwrap_or(DEFAULT_PRIORITY)
            .to_string(),
        priority_class: priority_class(result.priority.as_deref()),
        lists: vec![
            ListSection::new(
                "Suggested Actions",
                result.suggested_actions.as_ref(),
                "No suggested actions available",
            ),
            ListSection::new(
                "Improvement Suggestions",
                result.improvement_suggestions.as_ref(),
                "No improvement suggestions available",
            ),
            ListSection::new(
                "Key Points",
                result.key_points.as_ref(),
                "No key points available",
            ),
        ],
    };
    Ok(template.render()?)
}

/// Renders a single error block containing `message` verbatim.
pub fn render_error(message: &str) -> Result<String, RenderError> {
    Ok(ErrorTemplate { message }.render()?)
}

/// Renders the error block for a request that never produced a usable reply.
pub fn render_port_failure(error: &PortError) -> Result<String, RenderError> {
    render_error(&format!("Error: {error}"))
}

fn issue_heading(result: &AnalysisResult) -> String {
    match (result.issue_number, result.title.as_deref()) {
        (Some(number), Some(title)) => format!("Issue #{number}: {title}"),
        (Some(number), None) => format!("Issue #{number}"),
        (None, Some(title)) => title.to_string(),
        (None, None) => String::new(),
    }
}

fn issue_details(result: &AnalysisResult) -> Vec<DetailRow> {
    let mut rows = Vec::new();
    if let Some(creator) = &result.creator {
        rows.push(DetailRow {
            label: "Creator",
            value: creator.clone(),
        });
    }
    if let Some(created) = &result.creation_date {
        rows.push(DetailRow {
            label: "Created",
            value: format_creation_date(created),
        });
    }
    if let Some(state) = &result.state {
        rows.push(DetailRow {
            label: "State",
            value: state.clone(),
        });
    }
    if let Some(total) = result.total_comments {
        let value = match result.unique_users {
            Some(unique) => format!("{total} ({unique} unique users)"),
            None => total.to_string(),
        };
        rows.push(DetailRow {
            label: "Comments",
            value,
        });
    }
    rows
}

/// `YYYY-MM-DD` for RFC 3339 timestamps, the raw text otherwise.
fn format_creation_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

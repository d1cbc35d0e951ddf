//! crates/issue_analysis_core/src/domain.rs
//!
//! Defines the pure, core data structures for the client.
//! `AnalysisResult` mirrors the JSON body returned by the analysis backend;
//! everything else here is derived from it for display.

use serde::{Deserialize, Deserializer};

/// Shown when a server-reported failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze issue";

/// Shown when the input field is empty or whitespace only.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter an issue number";

//=========================================================================================
// Issue Identifier
//=========================================================================================

/// A non-empty issue identifier, trimmed of surrounding whitespace.
///
/// No other validation is applied: the backend decides what a valid
/// identifier looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueNumber(String);

impl IssueNumber {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

//=========================================================================================
// Analysis Result (response body)
//=========================================================================================

/// The decoded body of one `/analyze/{issue}` response.
///
/// Every field is optional. A non-empty `error` turns the whole response into
/// a failure regardless of the other fields. Empty strings in the text fields
/// are displayed as if the field were missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub suggested_actions: Option<Vec<String>>,
    #[serde(
        default,
        alias = "improvement_suggestion",
        deserialize_with = "string_or_list"
    )]
    pub improvement_suggestions: Option<Vec<String>>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub key_points: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,

    // Issue metadata, rendered as a header when present.
    #[serde(default)]
    pub issue_number: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub total_comments: Option<u64>,
    #[serde(default)]
    pub unique_users: Option<u64>,
}

impl AnalysisResult {
    pub fn has_issue_metadata(&self) -> bool {
        self.issue_number.is_some() || self.title.is_some()
    }
}

/// Accepts either a JSON array of strings or a single newline-separated string.
fn string_or_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        Many(Vec<String>),
        One(String),
    }

    Ok(match Option::<StringOrList>::deserialize(deserializer)? {
        None => None,
        Some(StringOrList::Many(items)) => Some(items),
        Some(StringOrList::One(text)) => Some(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        ),
    })
}

//=========================================================================================
// Backend Reply and Outcome
//=========================================================================================

/// What the backend port hands back: the HTTP status and the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: u16,
    pub body: AnalysisResult,
}

/// How a decoded reply should be displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Success(AnalysisResult),
    /// A server-reported failure, already resolved to the message to show.
    Failure(String),
}

impl BackendReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// An empty `error` string counts as no error.
    pub fn into_outcome(self) -> AnalysisOutcome {
        let error = non_empty(self.body.error.as_deref()).map(str::to_string);
        match error {
            None if self.is_success() => AnalysisOutcome::Success(self.body),
            error => AnalysisOutcome::Failure(
                error.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            ),
        }
    }
}

//=========================================================================================
// Display Classes
//=========================================================================================

/// Visual emphasis tier derived from a sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentTier {
    High,
    Medium,
    Low,
    Default,
}

impl SentimentTier {
    pub fn from_sentiment(sentiment: &str) -> Self {
        match sentiment {
            "very_frustrated" | "frustrated" => Self::High,
            "mildly_frustrated" | "neutral" => Self::Medium,
            "happy" | "very_happy" => Self::Low,
            _ => Self::Default,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "sentiment-high",
            Self::Medium => "sentiment-medium",
            Self::Low => "sentiment-low",
            Self::Default => "",
        }
    }
}

/// CSS class for an optional sentiment; absent sentiment gets the default tier.
pub fn sentiment_class(sentiment: Option<&str>) -> &'static str {
    sentiment
        .map_or(SentimentTier::Default, SentimentTier::from_sentiment)
        .css_class()
}

/// CSS class for an optional priority, `priority-medium` when absent.
pub fn priority_class(priority: Option<&str>) -> String {
    format!(
        "priority-{}",
        non_empty(priority).unwrap_or("medium").to_lowercase()
    )
}

/// Treats an empty string the same as a missing one.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_number_rejects_blank_input() {
        assert_eq!(IssueNumber::parse(""), None);
        assert_eq!(IssueNumber::parse("   \t\n"), None);
        assert_eq!(IssueNumber::parse(" 42 ").unwrap().as_str(), "42");
    }

    #[test]
    fn test_sentiment_tiers() {
        assert_eq!(sentiment_class(Some("very_frustrated")), "sentiment-high");
        assert_eq!(sentiment_class(Some("frustrated")), "sentiment-high");
        assert_eq!(sentiment_class(Some("mildly_frustrated")), "sentiment-medium");
        assert_eq!(sentiment_class(Some("neutral")), "sentiment-medium");
        assert_eq!(sentiment_class(Some("happy")), "sentiment-low");
        assert_eq!(sentiment_class(Some("very_happy")), "sentiment-low");
        assert_eq!(sentiment_class(Some("ecstatic")), "");
        assert_eq!(sentiment_class(Some("Frustrated")), "");
        assert_eq!(sentiment_class(None), "");
    }

    #[test]
    fn test_priority_class() {
        assert_eq!(priority_class(Some("HIGH")), "priority-high");
        assert_eq!(priority_class(None), "priority-medium");
    }

    #[test]
    fn test_decodes_full_body() {
        let body = r#"{
            "summary": "Crash on boot",
            "sentiment": "frustrated",
            "priority": "high",
            "suggested_actions": ["Reproduce", "Bisect"],
            "improvement_suggestions": ["Attach logs"],
            "key_points": ["a", "b"]
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.summary.as_deref(), Some("Crash on boot"));
        assert_eq!(
            result.suggested_actions,
            Some(vec!["Reproduce".to_string(), "Bisect".to_string()])
        );
        assert_eq!(result.key_points, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(result.error.is_none());
        assert!(!result.has_issue_metadata());
    }

    #[test]
    fn test_decodes_singular_alias_and_string_lists() {
        let body = r#"{
            "suggested_actions": "Update docs\n\n  Add a test  \n",
            "improvement_suggestion": "Use a clearer title",
            "key_points": null,
            "issue_number": 123,
            "unknown_field": true
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(
            result.suggested_actions,
            Some(vec!["Update docs".to_string(), "Add a test".to_string()])
        );
        assert_eq!(
            result.improvement_suggestions,
            Some(vec!["Use a clearer title".to_string()])
        );
        assert_eq!(result.key_points, None);
        assert!(result.has_issue_metadata());
    }

    #[test]
    fn test_error_field_wins_over_success_status() {
        let reply = BackendReply {
            status: 200,
            body: AnalysisResult {
                summary: Some("ignored".to_string()),
                error: Some("not found".to_string()),
                ..Default::default()
            },
        };
        assert_eq!(
            reply.into_outcome(),
            AnalysisOutcome::Failure("not found".to_string())
        );
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        assert_eq!(priority_class(Some("")), "priority-medium");
        assert_eq!(sentiment_class(Some("")), "");
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("x")), Some("x"));
    }

    #[test]
    fn test_empty_error_message_uses_fallback() {
        let reply = BackendReply {
            status: 404,
            body: AnalysisResult {
                error: Some(String::new()),
                ..Default::default()
            },
        };
        assert_eq!(
            reply.into_outcome(),
            AnalysisOutcome::Failure(GENERIC_FAILURE_MESSAGE.to_string())
        );

        let body = AnalysisResult {
            summary: Some("fine".to_string()),
            error: Some(String::new()),
            ..Default::default()
        };
        let reply = BackendReply {
            status: 200,
            body: body.clone(),
        };
        assert_eq!(reply.into_outcome(), AnalysisOutcome::Success(body));
    }

    #[test]
    fn test_failure_status_without_message_uses_fallback() {
        let reply = BackendReply {
            status: 500,
            body: AnalysisResult::default(),
        };
        assert_eq!(
            reply.into_outcome(),
            AnalysisOutcome::Failure(GENERIC_FAILURE_MESSAGE.to_string())
        );
    }
}

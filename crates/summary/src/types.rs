use serde::{Deserialize, Serialize};
use std::fmt;

/// One (model name, API version) pair attempted during fallback.
///
/// Candidates are configured as an ordered list; the first entry is the
/// most preferred and iteration order is preserved exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelCandidate {
    /// Model identifier as it appears in the endpoint path, e.g. `gemini-1.5-flash`.
    pub model: String,
    /// API version path segment, e.g. `v1beta` or `v1`.
    pub api_version: String,
}

impl ModelCandidate {
    pub fn new(model: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_version: api_version.into(),
        }
    }
}

impl fmt::Display for ModelCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.model, self.api_version)
    }
}

/// Summary text produced by a successful candidate, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSummary {
    pub text: String,
    pub model: String,
    pub api_version: String,
}

/// Sanitized record of one failed candidate attempt.
///
/// Operator-facing only: the detail is pre-truncated and contains no
/// credential, but it is still not meant for end users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    pub model: String,
    pub api_version: String,
    pub detail: String,
}

impl AttemptFailure {
    pub(crate) fn new(candidate: &ModelCandidate, error: &crate::error::SummaryError) -> Self {
        Self {
            model: candidate.model.clone(),
            api_version: candidate.api_version.clone(),
            detail: crate::error::truncate_diagnostic(&error.to_string()),
        }
    }
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.model, self.api_version, self.detail)
    }
}

/// Why the whole fallback chain came up empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhaustedCandidates {
    /// Number of candidates actually attempted.
    pub attempts: usize,
    /// Most recent failure, kept for diagnostic surfacing.
    pub last_failure: Option<AttemptFailure>,
}

impl fmt::Display for ExhaustedCandidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all {} model candidates failed", self.attempts)?;
        if let Some(last) = &self.last_failure {
            write!(f, "; last failure: {last}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ExhaustedCandidates {}

/// Where a summary string came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarySource {
    /// A model candidate produced the text.
    Generated { model: String, api_version: String },
    /// There was nothing to summarize.
    NoReviews,
    /// Every candidate failed; the deterministic fallback text was used.
    Fallback,
}

/// Result of one summarization request.
///
/// Always carries a string that is safe to render to end users. The
/// diagnostic, when present, is for operator logs and internal fields
/// only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub summary: String,
    pub source: SummarySource,
    pub diagnostic: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SummaryError;

    #[test]
    fn model_candidate_display() {
        let candidate = ModelCandidate::new("gemini-1.5-flash", "v1beta");
        assert_eq!(candidate.to_string(), "gemini-1.5-flash (v1beta)");
    }

    #[test]
    fn attempt_failure_carries_candidate_and_detail() {
        let candidate = ModelCandidate::new("gemini-pro", "v1");
        let failure = AttemptFailure::new(
            &candidate,
            &SummaryError::Upstream {
                status: 404,
                body: "model not found".into(),
            },
        );

        assert_eq!(failure.model, "gemini-pro");
        assert_eq!(failure.api_version, "v1");
        assert!(failure.detail.contains("404"));
        assert!(failure.detail.contains("model not found"));
    }

    #[test]
    fn attempt_failure_detail_is_bounded() {
        let candidate = ModelCandidate::new("gemini-pro", "v1");
        let failure = AttemptFailure::new(
            &candidate,
            &SummaryError::Upstream {
                status: 500,
                body: "x".repeat(5000),
            },
        );

        assert!(failure.detail.chars().count() <= 200);
    }

    #[test]
    fn exhausted_display_with_and_without_last_failure() {
        let bare = ExhaustedCandidates {
            attempts: 4,
            last_failure: None,
        };
        assert_eq!(bare.to_string(), "all 4 model candidates failed");

        let with_last = ExhaustedCandidates {
            attempts: 2,
            last_failure: Some(AttemptFailure {
                model: "gemini-pro".into(),
                api_version: "v1beta".into(),
                detail: "transport error: request timed out".into(),
            }),
        };
        let rendered = with_last.to_string();
        assert!(rendered.starts_with("all 2 model candidates failed; last failure:"));
        assert!(rendered.contains("gemini-pro (v1beta)"));
    }

    #[test]
    fn model_candidate_serde_roundtrip() {
        let candidate = ModelCandidate::new("gemini-1.5-flash", "v1");
        let serialized = serde_json::to_string(&candidate).unwrap();
        let deserialized: ModelCandidate = serde_json::from_str(&serialized).unwrap();
        assert_eq!(candidate, deserialized);
    }
}

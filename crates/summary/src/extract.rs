//! Decoding of vendor response bodies.
//!
//! The generation API's envelope has changed shape across versions and
//! SDKs, so decode attempts run against each known variant in a fixed
//! priority order and the first one yielding non-empty text wins. A body
//! matching no variant is a miss, never a crash.

use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct FlatShape {
    text: String,
}

#[derive(Deserialize)]
struct CandidatesShape {
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: Option<String>,
}

/// Extracts generated summary text from a response body, trying the known
/// envelope variants in priority order:
///
/// 1. top-level `text`
/// 2. `candidates[0].text`
/// 3. `candidates[0].content.parts[0].text`
///
/// Returns the first non-empty trimmed string, or `None` when no variant
/// yields usable text.
pub fn extract_summary_text(body: &Value) -> Option<String> {
    if let Ok(flat) = FlatShape::deserialize(body) {
        if let Some(text) = non_empty(&flat.text) {
            return Some(text);
        }
    }

    let shape = CandidatesShape::deserialize(body).ok()?;
    let candidate = shape.candidates.into_iter().next()?;

    if let Some(text) = candidate.text.as_deref().and_then(non_empty) {
        return Some(text);
    }

    candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .as_deref()
        .and_then(non_empty)
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_top_level_text() {
        let body = json!({"text": "A warm and attentive clinician."});
        assert_eq!(
            extract_summary_text(&body).as_deref(),
            Some("A warm and attentive clinician.")
        );
    }

    #[test]
    fn extracts_candidate_text() {
        let body = json!({"candidates": [{"text": "Clients describe a strong fit."}]});
        assert_eq!(
            extract_summary_text(&body).as_deref(),
            Some("Clients describe a strong fit.")
        );
    }

    #[test]
    fn extracts_nested_content_parts() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "Feedback highlights patience and clarity."}]
                }
            }]
        });
        assert_eq!(
            extract_summary_text(&body).as_deref(),
            Some("Feedback highlights patience and clarity.")
        );
    }

    #[test]
    fn result_is_trimmed() {
        let body = json!({"text": "  padded summary  \n"});
        assert_eq!(extract_summary_text(&body).as_deref(), Some("padded summary"));
    }

    #[test]
    fn top_level_text_takes_priority_over_candidates() {
        let body = json!({
            "text": "flat wins",
            "candidates": [{"text": "candidate loses"}]
        });
        assert_eq!(extract_summary_text(&body).as_deref(), Some("flat wins"));
    }

    #[test]
    fn candidate_text_takes_priority_over_nested_parts() {
        let body = json!({
            "candidates": [{
                "text": "direct text wins",
                "content": {"parts": [{"text": "nested loses"}]}
            }]
        });
        assert_eq!(extract_summary_text(&body).as_deref(), Some("direct text wins"));
    }

    #[test]
    fn empty_variants_fall_through_to_the_next() {
        let body = json!({
            "text": "   ",
            "candidates": [{"content": {"parts": [{"text": "nested survives"}]}}]
        });
        assert_eq!(extract_summary_text(&body).as_deref(), Some("nested survives"));
    }

    #[test]
    fn unknown_shape_yields_none() {
        assert_eq!(extract_summary_text(&json!({"unexpected": true})), None);
        assert_eq!(extract_summary_text(&json!({"candidates": []})), None);
        assert_eq!(extract_summary_text(&json!(null)), None);
        assert_eq!(extract_summary_text(&json!("bare string")), None);
    }

    #[test]
    fn whitespace_only_everywhere_yields_none() {
        let body = json!({
            "candidates": [{
                "text": " ",
                "content": {"parts": [{"text": "\n\t"}]}
            }]
        });
        assert_eq!(extract_summary_text(&body), None);
    }

    #[test]
    fn extra_vendor_fields_are_ignored() {
        let body = json!({
            "candidates": [{
                "content": {"parts": [{"text": "still works"}], "role": "model"},
                "finishReason": "STOP",
                "safetyRatings": []
            }],
            "usageMetadata": {"totalTokenCount": 42}
        });
        assert_eq!(extract_summary_text(&body).as_deref(), Some("still works"));
    }
}

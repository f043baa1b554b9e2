use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use summary::SummarySource;

/// Request to summarize one clinician's reviews. The field name matches
/// the browser client's payload.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    #[serde(rename = "reviewTexts")]
    pub review_texts: Vec<String>,
}

/// Response carrying the summary line.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Always present and always safe to render to end users.
    pub summary: String,

    /// Model that produced the text; absent for fallback summaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Operator-facing diagnostic set when generation fell back. Never
    /// rendered to end users and never contains the vendor credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Generate the review summary for one clinician.
///
/// Every reachable input resolves to 200 with a displayable summary:
/// an empty (or all-whitespace) review list gets the "no reviews" line,
/// and vendor exhaustion gets the deterministic fallback line. The only
/// non-200 answers are 400 for malformed bodies and 500 when no vendor
/// credential was configured at startup.
///
/// # Example
/// ```json
/// // Request
/// { "reviewTexts": ["Great listener, very helpful."] }
///
/// // Response
/// { "summary": "Clients consistently describe a supportive style.",
///   "model": "gemini-1.5-flash" }
/// ```
pub async fn generate_summary(
    State(state): State<Arc<ServerState>>,
    request: Result<Json<SummaryRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(request) = request.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

    let summarizer = state
        .summarizer
        .as_ref()
        .ok_or(ServerError::SummaryUnavailable)?;

    let outcome = summarizer.summarize(&request.review_texts).await;

    let model = match &outcome.source {
        SummarySource::Generated { model, .. } => Some(model.clone()),
        SummarySource::NoReviews | SummarySource::Fallback => None,
    };

    Ok(Json(SummaryResponse {
        summary: outcome.summary,
        model,
        error: outcome.diagnostic,
    }))
}

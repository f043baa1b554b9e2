//! Therapy Compass review summarization.
//!
//! This crate turns a pile of free-text clinician reviews into one short,
//! displayable summary line via the Gemini `generateContent` API. The
//! interesting part is what happens when the vendor misbehaves: model
//! names and API versions come and go, so we keep an ordered candidate
//! list and walk it until one answers with usable text.
//!
//! The flow per request:
//!
//! 1. Drop empty/whitespace-only reviews (order preserved).
//! 2. Render one instruction prompt embedding every remaining review.
//! 3. Try each configured (model, API version) candidate in order, one
//!    attempt apiece, stopping at the first response with usable text.
//! 4. Decode the response against the known envelope variants.
//! 5. If everything fails, fall back to a deterministic placeholder line.
//!
//! Failure never escapes: [`Summarizer::summarize`] always resolves to a
//! string the UI can render. Upstream status codes and truncated error
//! bodies are kept for operator diagnostics only.
//!
//! ## Quick example
//!
//! ```no_run
//! use summary::{Summarizer, SummaryConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let summarizer =
//!         Summarizer::new("your-api-key".into(), SummaryConfig::default()).unwrap();
//!
//!     let reviews = vec!["Great listener, very helpful.".to_string()];
//!     let outcome = summarizer.summarize(&reviews).await;
//!     println!("{}", outcome.summary);
//! }
//! ```
//!
//! The HTTP client lives behind the [`GenerateBackend`] trait, so tests
//! inject scripted fakes instead of a network.

pub mod backend;
pub mod config;
pub mod error;
pub mod types;

mod extract;
mod fallback;
mod normalize;
mod prompt;

pub use crate::backend::{GeminiBackend, GenerateBackend, GenerateContentRequest};
pub use crate::config::{GenerationConfig, SummaryConfig};
pub use crate::error::SummaryError;
pub use crate::extract::extract_summary_text;
pub use crate::fallback::{compose_unavailable_summary, NO_REVIEWS_SUMMARY};
pub use crate::normalize::filter_review_texts;
pub use crate::prompt::{build_prompt, REVIEW_DELIMITER};
pub use crate::types::{
    AttemptFailure, ExhaustedCandidates, GeneratedSummary, ModelCandidate, SummaryOutcome,
    SummarySource,
};

use std::sync::Arc;

/// The review-summary pipeline: normalize, prompt, invoke with fallback,
/// extract, compose.
///
/// Holds no mutable state; a single instance is shared across concurrent
/// requests.
pub struct Summarizer {
    backend: Arc<dyn GenerateBackend>,
    cfg: SummaryConfig,
}

impl Summarizer {
    /// Builds a summarizer backed by the real vendor API.
    pub fn new(api_key: String, cfg: SummaryConfig) -> Result<Self, SummaryError> {
        let backend = GeminiBackend::new(api_key, &cfg)?;
        Ok(Self::with_backend(Arc::new(backend), cfg))
    }

    /// Builds a summarizer over an arbitrary backend. This is the seam
    /// for scripted fakes.
    pub fn with_backend(backend: Arc<dyn GenerateBackend>, cfg: SummaryConfig) -> Self {
        Self { backend, cfg }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.cfg
    }

    /// Summarizes a set of raw review texts.
    ///
    /// Infallible by design: an empty review list yields the "no reviews"
    /// line, exhaustion of every model candidate yields the deterministic
    /// fallback line, and a working candidate yields its generated text.
    pub async fn summarize(&self, review_texts: &[String]) -> SummaryOutcome {
        let valid = filter_review_texts(review_texts);
        if valid.is_empty() {
            return SummaryOutcome {
                summary: NO_REVIEWS_SUMMARY.to_owned(),
                source: SummarySource::NoReviews,
                diagnostic: None,
            };
        }

        let prompt = build_prompt(&valid);
        match self.generate(&prompt).await {
            Ok(generated) => SummaryOutcome {
                summary: generated.text,
                source: SummarySource::Generated {
                    model: generated.model,
                    api_version: generated.api_version,
                },
                diagnostic: None,
            },
            Err(exhausted) => {
                tracing::warn!(
                    review_count = valid.len(),
                    attempts = exhausted.attempts,
                    error = %exhausted,
                    "summary generation fell back to placeholder text"
                );
                SummaryOutcome {
                    summary: compose_unavailable_summary(valid.len()),
                    source: SummarySource::Fallback,
                    diagnostic: Some(exhausted.to_string()),
                }
            }
        }
    }

    /// Tries each configured candidate in order, one attempt apiece,
    /// short-circuiting on the first response with usable text.
    ///
    /// A 401/403 aborts the remaining candidates: they all share the same
    /// credential, so later attempts would fail identically. Every other
    /// failure (transport, timeout, non-2xx, unusable body) eliminates
    /// only the current candidate.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedSummary, ExhaustedCandidates> {
        let request = GenerateContentRequest::from_prompt(prompt, self.cfg.generation);
        let mut attempts = 0;
        let mut last_failure = None;

        for candidate in &self.cfg.model_candidates {
            attempts += 1;
            tracing::debug!(
                model = %candidate.model,
                api_version = %candidate.api_version,
                "attempting summary candidate"
            );

            match self.backend.generate(candidate, &request).await {
                Ok(body) => match extract_summary_text(&body) {
                    Some(text) => {
                        tracing::info!(
                            model = %candidate.model,
                            api_version = %candidate.api_version,
                            attempts,
                            "summary generated"
                        );
                        return Ok(GeneratedSummary {
                            text,
                            model: candidate.model.clone(),
                            api_version: candidate.api_version.clone(),
                        });
                    }
                    None => {
                        tracing::warn!(
                            model = %candidate.model,
                            api_version = %candidate.api_version,
                            "candidate returned no usable text"
                        );
                        last_failure =
                            Some(AttemptFailure::new(candidate, &SummaryError::EmptyResponse));
                    }
                },
                Err(err) => {
                    let credential_rejected = matches!(
                        err,
                        SummaryError::Upstream {
                            status: 401 | 403,
                            ..
                        }
                    );
                    tracing::warn!(
                        model = %candidate.model,
                        api_version = %candidate.api_version,
                        error = %err,
                        "candidate failed"
                    );
                    last_failure = Some(AttemptFailure::new(candidate, &err));
                    if credential_rejected {
                        break;
                    }
                }
            }
        }

        Err(ExhaustedCandidates {
            attempts,
            last_failure,
        })
    }
}

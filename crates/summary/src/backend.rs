use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::config::{GenerationConfig, SummaryConfig};
use crate::error::{truncate_diagnostic, SummaryError};
use crate::types::ModelCandidate;

/// Wire body for the vendor's `models/<model>:generateContent` call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str, generation: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_owned(),
                }],
            }],
            generation_config: generation,
        }
    }

    /// The prompt text this request carries.
    pub fn prompt(&self) -> &str {
        self.contents
            .first()
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
            .unwrap_or_default()
    }
}

/// One attempt against one upstream generation endpoint.
///
/// Implementations return the parsed response body on a success status
/// and a [`SummaryError`] for everything else. The pipeline owns candidate
/// ordering and fallback; a backend only knows how to issue one call.
#[async_trait]
pub trait GenerateBackend: Send + Sync {
    async fn generate(
        &self,
        candidate: &ModelCandidate,
        request: &GenerateContentRequest,
    ) -> Result<Value, SummaryError>;
}

/// reqwest-backed Gemini `generateContent` client.
///
/// Built once by the caller and injected into the pipeline; there is no
/// module-level lazily-initialized client. This struct holds the only
/// copy of the vendor credential. The key travels as a query parameter
/// and is kept out of `Debug` output, logs, and error strings.
pub struct GeminiBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GeminiBackend {
    pub fn new(api_key: String, cfg: &SummaryConfig) -> Result<Self, SummaryError> {
        if api_key.trim().is_empty() {
            return Err(SummaryError::MissingCredential);
        }
        if cfg.api_base_url.trim().is_empty() {
            return Err(SummaryError::InvalidConfig("api_base_url is empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .build()
            .map_err(|e| SummaryError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: cfg.api_base_url.trim_end_matches('/').to_owned(),
            api_key,
        })
    }

    fn endpoint(&self, candidate: &ModelCandidate) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, candidate.api_version, candidate.model
        )
    }
}

#[async_trait]
impl GenerateBackend for GeminiBackend {
    async fn generate(
        &self,
        candidate: &ModelCandidate,
        request: &GenerateContentRequest,
    ) -> Result<Value, SummaryError> {
        let url = self.endpoint(candidate);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummaryError::Upstream {
                status: status.as_u16(),
                body: truncate_diagnostic(&body),
            });
        }

        response.json::<Value>().await.map_err(transport_error)
    }
}

/// reqwest errors render with the full request URL, key query parameter
/// included; strip the URL before the text can reach a log line.
fn transport_error(err: reqwest::Error) -> SummaryError {
    let err = err.without_url();
    if err.is_timeout() {
        SummaryError::Transport("request timed out".into())
    } else if err.is_decode() {
        SummaryError::Transport(format!("invalid JSON response: {err}"))
    } else {
        SummaryError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> GeminiBackend {
        GeminiBackend::new("test-key".into(), &SummaryConfig::default()).unwrap()
    }

    #[test]
    fn rejects_empty_api_key() {
        let result = GeminiBackend::new("   ".into(), &SummaryConfig::default());
        assert_eq!(result.unwrap_err(), SummaryError::MissingCredential);
    }

    #[test]
    fn rejects_empty_base_url() {
        let cfg = SummaryConfig {
            api_base_url: "".into(),
            ..Default::default()
        };
        assert!(matches!(
            GeminiBackend::new("key".into(), &cfg),
            Err(SummaryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn endpoint_interpolates_version_and_model() {
        let url = backend().endpoint(&ModelCandidate::new("gemini-1.5-flash", "v1beta"));
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash_in_base_url() {
        let cfg = SummaryConfig {
            api_base_url: "https://example.test/".into(),
            ..Default::default()
        };
        let backend = GeminiBackend::new("key".into(), &cfg).unwrap();
        let url = backend.endpoint(&ModelCandidate::new("gemini-pro", "v1"));
        assert_eq!(url, "https://example.test/v1/models/gemini-pro:generateContent");
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let rendered = format!("{:?}", backend());
        assert!(!rendered.contains("test-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn request_body_matches_wire_format() {
        let request = GenerateContentRequest::from_prompt("summarize this", GenerationConfig::default());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "summarize this");
        assert_eq!(value["generationConfig"]["temperature"], 0.7);
        assert_eq!(value["generationConfig"]["topK"], 40);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 200);
    }

    #[test]
    fn request_prompt_accessor_round_trips() {
        let request = GenerateContentRequest::from_prompt("hello", GenerationConfig::default());
        assert_eq!(request.prompt(), "hello");
    }
}

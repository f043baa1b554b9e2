use serde::{Deserialize, Serialize};

use crate::types::ModelCandidate;

/// Runtime configuration for the summarization pipeline.
///
/// # Example
/// ```
/// use summary::SummaryConfig;
///
/// let cfg = SummaryConfig {
///     request_timeout_secs: 10,
///     ..Default::default()
/// };
/// assert_eq!(cfg.model_candidates.len(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryConfig {
    /// Ordered candidate list; the first entry is tried first and the
    /// order never changes between requests.
    #[serde(default = "default_model_candidates")]
    pub model_candidates: Vec<ModelCandidate>,
    /// Generation tuning forwarded to the vendor on every attempt.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Vendor API host, without a trailing path.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-attempt request timeout in seconds. Bounds how long one
    /// unresponsive candidate can stall the fallback chain.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            model_candidates: default_model_candidates(),
            generation: GenerationConfig::default(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Generation parameters sent as `generationConfig` on the wire.
///
/// Values are product tuning, not invariants; `max_output_tokens` caps
/// worst-case response size and latency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 200,
        }
    }
}

fn default_model_candidates() -> Vec<ModelCandidate> {
    vec![
        ModelCandidate::new("gemini-1.5-flash", "v1beta"),
        ModelCandidate::new("gemini-1.5-flash", "v1"),
        ModelCandidate::new("gemini-pro", "v1beta"),
        ModelCandidate::new("gemini-pro", "v1"),
    ]
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

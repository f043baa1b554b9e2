use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use std::sync::Arc;
use summary::Summarizer;

/// Environment variables probed for the vendor credential, in order.
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "TTC_GEMINI_API_KEY"];

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Summarization pipeline. `None` when no vendor credential was
    /// present at startup; the summary route then answers 500.
    pub summarizer: Option<Arc<Summarizer>>,
}

impl ServerState {
    /// Create new server state, reading the vendor credential from the
    /// environment.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let summarizer = match read_api_key() {
            Some(key) => {
                let summarizer = Summarizer::new(key, config.summary.clone())
                    .map_err(|e| ServerError::Config(e.to_string()))?;
                Some(Arc::new(summarizer))
            }
            None => {
                tracing::warn!(
                    "no GEMINI_API_KEY or TTC_GEMINI_API_KEY in environment; \
                     summary requests will be rejected"
                );
                None
            }
        };

        Ok(Self {
            config: Arc::new(config),
            summarizer,
        })
    }

    /// State with an explicitly supplied summarizer. This is the seam
    /// integration tests use to inject stub-backed pipelines.
    pub fn with_summarizer(config: ServerConfig, summarizer: Option<Arc<Summarizer>>) -> Self {
        Self {
            config: Arc::new(config),
            summarizer,
        }
    }

    /// Whether the summarization pipeline is available.
    pub fn summarizer_ready(&self) -> bool {
        self.summarizer.is_some()
    }
}

fn read_api_key() -> Option<String> {
    API_KEY_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|value| !value.trim().is_empty()))
}

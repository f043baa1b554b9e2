//! Therapy Compass Server - HTTP API for clinician review summaries
//!
//! This crate fronts the summarization pipeline with a small REST
//! surface:
//!
//! - **Summary generation**: `POST /api/v1/summary` takes a clinician's
//!   review texts and returns one displayable summary line, backed by the
//!   model-fallback pipeline in the `summary` crate.
//! - **Health**: liveness and readiness probes.
//!
//! # Behavior guarantees
//!
//! The summary route never surfaces upstream failures to the browser:
//! vendor outages and model churn resolve to a deterministic fallback
//! line inside a normal 200 response. The only error statuses are 400
//! for malformed bodies and 500 when the deployment is missing its
//! vendor credential.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;

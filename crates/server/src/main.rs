//! Therapy Compass Server - HTTP API for clinician review summaries
//!
//! This binary serves the review-summary endpoint plus health probes,
//! reading its configuration from `compass.*` files and
//! `COMPASS_SERVER__`-prefixed environment variables.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up local .env before reading configuration
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}

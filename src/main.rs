//! stringlens - HTTP service for string property analysis
//!
//! This binary provides an HTTP server that analyzes submitted strings,
//! persists the results, and answers structured or natural-language filter
//! queries over them.

use stringlens::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present, then configuration.
    dotenvy::dotenv().ok();
    let config = ServiceConfig::load()?;

    stringlens::start_server(config).await?;

    Ok(())
}

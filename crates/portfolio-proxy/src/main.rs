//! Portfolio proxy binary
//!
//! ```bash
//! YT_API_KEY=... YT_CHANNEL_ID=UC... portfolio-proxy
//! PORT=8080 LOG_DIR=./logs portfolio-proxy
//! ```

use anyhow::Result;
use clap::Parser;
use portfolio_core::logging::LoggingBuilder;
use portfolio_proxy::ProxyConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ProxyConfig::parse();

    if let Some(path) = LoggingBuilder::new("proxy")
        .log_dir(config.log_dir.clone())
        .init()?
    {
        tracing::info!(path = %path.display(), "writing JSONL logs");
    }

    if let Err(e) = portfolio_proxy::run(config).await {
        tracing::error!(error = %e, "proxy failed to start");
        return Err(e.into());
    }
    Ok(())
}

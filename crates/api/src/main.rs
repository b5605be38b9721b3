//! API server entry point.

use std::process::ExitCode;

use hello_api::config::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::default();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Start server
    tracing::info!(addr = %config.addr(), "Server starting on port {}...", config.port);

    if let Err(err) = hello_api::run(&config).await {
        tracing::error!(error = %err, "server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

use anyhow::Result;
use clap::Parser;
use tracing::info;

use posts_mock_server::config::ServerConfig;
use posts_mock_server::http::{self, AppState};
use posts_mock_server::{telemetry, InMemoryPostRepository, SERVICE_TITLE, SERVICE_VERSION};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    telemetry::init_tracing(&config.log_filter)?;

    info!(
        title = SERVICE_TITLE,
        version = SERVICE_VERSION,
        bind = %config.bind,
        stall_secs = config.stall_secs,
        "starting mock server"
    );

    let state = AppState::new(InMemoryPostRepository::seeded(), config.stall());
    http::serve(state, config.bind).await?;
    Ok(())
}

//! Command-line and environment configuration for the server binary.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "posts_mock_server")]
#[command(about = "In-memory posts API with forced error scenarios")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "MOCK_SERVER_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,
    /// Seconds an `error_scenario=timeout` request stalls before continuing.
    #[arg(long, env = "MOCK_SERVER_STALL_SECS", default_value_t = 30)]
    pub stall_secs: u64,
    /// tracing-subscriber filter directive.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn stall(&self) -> Duration {
        Duration::from_secs(self.stall_secs)
    }
}

//! Backend entry-point: configuration, tracing, and server bootstrap.

use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::web;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::server::{ServerConfig, create_server};

/// Command-line and environment configuration.
#[derive(Debug, Parser)]
#[command(name = "backend", about = "User account service over a JSON-file record store")]
struct Cli {
    /// Socket address to bind.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Path of the JSON record file.
    #[arg(long, env = "APP_DATA_FILE", default_value = "data/users.json")]
    data_file: PathBuf,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(cli.bind, cli.data_file),
    )
    .await?;
    server.await
}

//! HTTP shell binary for the tabular validation engine.

mod app_error;
mod server;
mod state;

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tabular-api")]
#[command(version, about = "CSV validation HTTP service", long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabular_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    server::run_http_server(state::AppState::new(), args.listen).await
}

use anyhow::Context;
use clap::Parser;
use netbanx_gateway::app::config::{Config, Environment};
use netbanx_gateway::app::logging::{init_logging, LogFormat};
use netbanx_gateway::handlers;
use netbanx_gateway::services::{InMemoryOrderStore, NetbanxClient, PaymentService};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "netbanx-gateway", about = "Checkout service backed by the Netbanx card payments API")]
struct Cli {
    /// TOML config file; environment variables are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    port: Option<u16>,

    /// Talk to the production API instead of the sandbox.
    #[arg(long)]
    live: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(LogFormat::from_env());

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::from_env().context("reading config from environment")?,
    };
    if let Some(port) = cli.port {
        config.server_port = port;
    }
    if cli.live {
        config.environment = Environment::Live;
    }

    info!(
        "Starting Netbanx gateway on port {} ({:?} environment)",
        config.server_port, config.environment
    );

    let client = NetbanxClient::new(&config).context("configuring Netbanx client")?;
    let orders = Arc::new(InMemoryOrderStore::new());
    let payment_service = Arc::new(PaymentService::new(Arc::new(client), orders));

    let app = handlers::router(payment_service);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutting down");
}

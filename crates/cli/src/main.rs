use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use weatherlog_core::Config;
use weatherlog_http::{create_router, AppState};
use weatherlog_provider::ProviderClient;
use weatherlog_store::RecordStore;

#[derive(Parser)]
#[command(name = "weatherlog")]
#[command(about = "Weather lookup service backed by WeatherStack", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port, host } => serve(port, host).await,
    }
}

async fn serve(port: u16, host: String) -> Result<()> {
    let config = Config::from_env()?;
    let provider = ProviderClient::new(
        config.access_key.clone(),
        Duration::from_secs(config.provider_timeout_secs),
    )?;
    let state = Arc::new(AppState {
        store: Arc::new(RecordStore::new()),
        provider: Arc::new(provider),
    });

    let router = create_router(state, &config.allowed_origin)?;
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

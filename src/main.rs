use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use cors_policy_rs::config::CorsConfig;
use cors_policy_rs::server::handlers::banking_routes;
use cors_policy_rs::server::{CorsService, Pipeline};
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Serves the demo banking API behind the CORS evaluator.
#[derive(Debug, Parser)]
#[command(name = "cors-demo", version, about)]
struct Cli {
    /// TOML policy file; without it the policy is read from CORS_* variables.
    #[arg(long, env = "CORS_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, env = "CORS_LISTEN", default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let cors = CorsConfig::load(cli.config.as_deref())?.build()?;
    let pipeline = Arc::new(Pipeline::new(Arc::new(cors), banking_routes()));

    let listener = TcpListener::bind(cli.listen).await?;
    tracing::info!(addr = %cli.listen, "cors-demo listening");

    loop {
        let (stream, peer) = listener.accept().await?;
        let service = CorsService::new(Arc::clone(&pipeline));
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::warn!(%peer, error = %err, "connection error");
            }
        });
    }
}

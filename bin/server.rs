// Award Intervals - Web Server
// Loads the record file once, then serves the award-interval report over REST

use anyhow::{Context, Result};
use award_intervals::api::{bind_address, build_router, AppState, AWARDS_INTERVAL_PATH};
use award_intervals::load_csv;
use clap::Parser;
use std::path::PathBuf;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for the server
#[derive(Parser, Debug)]
#[command(name = "award-intervals-server")]
#[command(about = "Serves min/max intervals between consecutive award wins")]
#[command(version)]
struct Args {
    /// `;`-delimited record file loaded at startup
    #[arg(short, long, default_value = "data/movielist.csv", env = "AWARDS_DATA_FILE")]
    data: PathBuf,

    /// IP address to bind (IPv4 or IPv6, e.g. `::`)
    #[arg(long, default_value = "0.0.0.0", env = "AWARDS_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "AWARDS_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "award_intervals=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Ingestion must fully succeed before the listener is bound
    let store = load_csv(&args.data)
        .with_context(|| format!("Failed to load records from {}", args.data.display()))?;

    let app = build_router(AppState::new(store));

    let addr = bind_address(&args.host, args.port)
        .with_context(|| format!("Invalid bind host: {}", args.host))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server running on http://{}", addr);
    info!("API: http://{}{}", addr, AWARDS_INTERVAL_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

//! optimus-server - OPTIMUS society simulator backend
//!
//! Serves the REST API, the WebSocket signal channel and the static UI.

use anyhow::{Context, Result};
use clap::Parser;
use optimus_common::config::TomlConfig;
use std::net::IpAddr;
use std::path::PathBuf;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use optimus_server::config::{Config, Overrides};
use optimus_server::notifications::NotificationLog;
use optimus_server::society::Society;
use optimus_server::{build_router, AppState};

/// Command-line arguments for optimus-server
#[derive(Parser, Debug)]
#[command(name = "optimus-server")]
#[command(about = "Society simulator: Parliament, judiciary and citizen cases")]
#[command(version)]
struct Args {
    /// Port to listen on (default 5000)
    #[arg(short, long, env = "OPTIMUS_PORT")]
    port: Option<u16>,

    /// Address to bind (default 0.0.0.0)
    #[arg(short, long, env = "OPTIMUS_BIND")]
    bind: Option<IpAddr>,

    /// Folder holding notifications.json
    #[arg(short, long, env = "OPTIMUS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, env = "OPTIMUS_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "optimus_server=debug,optimus_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before any file system work
    info!("Starting OPTIMUS server v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let toml = TomlConfig::load_or_default(args.config.as_deref());
    let config = Config::resolve(
        &Overrides {
            port: args.port,
            bind: args.bind,
            data_dir: args.data_dir,
        },
        &toml,
    );
    info!("Data folder: {}", config.data_dir.display());

    let notifications = NotificationLog::open_fresh(&config.data_dir)
        .await
        .context("Failed to initialize notification log")?;

    let state = AppState::new(Society::new(config.society), notifications);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("optimus-server listening on http://{}", config.bind_addr);
    info!("WebSocket channel: ws://{}/ws", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("optimus-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

//! cef-dash - CEF dashboard web service
//!
//! Upload a coach-evaluation spreadsheet, then browse per-coach charts,
//! group grids and block-to-block comparisons in the browser.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cef_common::config::{load_toml_config, CompiledDefaults, ConfigOverrides, DashboardConfig};
use cef_dash::logging::{apply_level, init_logging};
use cef_dash::{build_router, AppState};
use clap::Parser;
use tokio::signal;
use tracing::info;

/// Command-line arguments for cef-dash
#[derive(Parser, Debug)]
#[command(name = "cef-dash")]
#[command(about = "MK Dons CEF dashboard")]
#[command(version)]
struct Args {
    /// Address to bind to
    #[arg(short, long, env = "CEF_BIND")]
    bind: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CEF_PORT")]
    port: Option<u16>,

    /// TOML config file (defaults to the platform config directory)
    #[arg(short, long, env = "CEF_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum upload size in MiB
    #[arg(long, env = "CEF_MAX_UPLOAD_MB")]
    max_upload_mb: Option<usize>,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "CEF_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind: self.bind.clone(),
            port: self.port,
            max_upload_mb: self.max_upload_mb,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging first so configuration warnings are not lost
    let startup_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| CompiledDefaults::default().log_level);
    let log_handle = init_logging(&startup_level);

    let toml = load_toml_config(args.config.as_deref()).context("Failed to load configuration")?;
    let config = DashboardConfig::resolve(&args.overrides(), &toml);
    apply_level(log_handle.as_ref(), &config.log_level);

    info!(
        "Starting CEF dashboard (cef-dash) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let state = AppState::new(config.max_upload_bytes);
    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("cef-dash listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

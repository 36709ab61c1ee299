//! # Folio Server
//!
//! Read-only REST backend for a personal portfolio site.
//!
//! ## Overview
//!
//! The server derives everything it serves from an uploads tree on disk:
//!
//! - **Projects**: one directory per project; files are classified by
//!   naming convention (logo, cover, PDF) and exposed as download URLs
//! - **Tech showcases**: one directory per showcase; source files are
//!   inlined as text and a language label is inferred from file names
//! - **File serving**: project assets and a fixed profile image, streamed
//!   with a suffix-derived content type
//!
//! There is no database and no cache; every request re-scans the tree.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_server::{
    AppState, create_app,
    infra::config::{ConfigLoad, ConfigLoader},
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "folio-server")]
#[command(about = "Read-only portfolio API server backed by an uploads directory")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Bind host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Uploads root directory (overrides config)
    #[arg(long, env = "UPLOADS_ROOT")]
    uploads_root: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = args.config.clone() {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(root) = args.uploads_root {
        config.uploads.root = root;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_file.as_ref() {
        info!(path = %path.display(), "configuration file loaded");
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    if !config.uploads.root.exists() {
        warn!(
            "uploads root {:?} does not exist; all listings will be empty",
            config.uploads.root
        );
    }

    let config = Arc::new(config);
    let state = AppState::new(Arc::clone(&config));
    let app = create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server host/port")?;

    info!(
        "Starting Folio Server (HTTP) on {}:{}",
        config.server.host, config.server.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

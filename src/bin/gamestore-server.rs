use std::{net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gamestore::{
    AppState, api,
    config::{AppConfig, DEFAULT_DB_PATH, DEFAULT_LISTEN},
    db::{self, SqliteStore},
};
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB_PATH)]
    db_path: PathBuf,
    /// Listen address for the HTTP server
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_LISTEN)]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig {
        db_path: cli.db_path,
        listen: cli.listen,
    };
    let state = Arc::new(init_state(&config).await?);

    let app = api::create_router(state);

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind to {}", config.listen))?;

    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server exited with error")?;

    Ok(())
}

async fn init_state(config: &AppConfig) -> Result<AppState> {
    if let Some(parent) = config.db_dir() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create db directory {}", parent.display()))?;
    }

    let pool = db::init_db(&config.database_url())
        .await
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    info!("using database {}", config.db_path.display());

    Ok(AppState::new(SqliteStore::new(pool)))
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("failed to install CTRL+C handler: {err}");
    }
    info!("shutdown signal received");
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

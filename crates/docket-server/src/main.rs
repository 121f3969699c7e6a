//! docket-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), builds the
//! in-memory portal store — optionally seeded from a JSON snapshot — and
//! serves the JSON API over HTTP. Nothing is persisted: restarting the
//! process resets every record to the seed, which is the lifetime the
//! prototype models.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use docket_api::AppState;
use docket_store_mem::{MemStore, Snapshot};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Runtime server configuration, deserialised from `config.toml` merged
/// with `DOCKET_`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:      String,
  #[serde(default = "default_port")]
  port:      u16,
  /// JSON snapshot loaded into the store at startup.
  seed_path: Option<PathBuf>,
}

fn default_host() -> String {
  "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
  8080
}

#[derive(Parser)]
#[command(author, version, about = "Docket portal server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Seed snapshot path; overrides `seed_path` from the config file.
  #[arg(long)]
  seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("DOCKET"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Build the store, seeded if a snapshot was given.
  let seed_path = cli.seed.or_else(|| server_cfg.seed_path.clone());
  let store = match &seed_path {
    Some(path) => {
      let snapshot = Snapshot::from_path(path)
        .with_context(|| format!("failed to read seed snapshot at {path:?}"))?;
      let store = MemStore::from_snapshot(snapshot)
        .context("seed snapshot failed validation")?;
      tracing::info!(seed = ?path, "store seeded from snapshot");
      store
    }
    None => MemStore::new(),
  };

  let state = AppState::new(Arc::new(store));
  let app = axum::Router::new()
    .nest("/api", docket_api::api_router(state))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

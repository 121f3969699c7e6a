//! Error type for `docket-store-mem`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] docket_core::Error),

  #[error("snapshot read error: {0}")]
  Io(#[from] std::io::Error),

  #[error("snapshot decode error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

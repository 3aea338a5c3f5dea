// client/src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  /// The server answered with a failure envelope. `message` carries the
  /// envelope's joined violation text (or "Item not found", etc.).
  #[error("API error: {status} - {message}")]
  Api { status: u16, message: String },

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type ClientResult<T, E = ClientError> = std::result::Result<T, E>;

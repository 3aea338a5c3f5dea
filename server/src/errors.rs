// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use stockroom::{Envelope, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("{0}")]
  Store(#[from] StoreError),

  // For ids that cannot name any stored record (e.g. not a UUID).
  #[error("Resource Not Found: {0}")]
  NotFound(String),

  // For request bodies rejected before they reach the store (bad JSON).
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers using `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Store(StoreError::Validation(errors)) => {
        HttpResponse::BadRequest().json(Envelope::<()>::fail(errors.to_string()))
      }
      AppError::Store(StoreError::NotFound { .. }) | AppError::NotFound(_) => {
        HttpResponse::NotFound().json(Envelope::<()>::fail("Item not found"))
      }
      AppError::Store(StoreError::Persistence { source }) => {
        HttpResponse::InternalServerError().json(Envelope::<()>::fail(source.to_string()))
      }
      AppError::Validation(m) => HttpResponse::BadRequest().json(Envelope::<()>::fail(m.clone())),
      AppError::Config(m) => HttpResponse::InternalServerError()
        .json(Envelope::<()>::fail(format!("Configuration issue: {}", m))),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(Envelope::<()>::fail(m.clone()))
      }
    }
  }
}

/// Converts a malformed JSON body into the same 400 envelope every other
/// validation failure produces, so actix's default error body never leaks.
pub fn json_error_handler(
  err: actix_web::error::JsonPayloadError,
  _req: &actix_web::HttpRequest,
) -> actix_web::Error {
  AppError::Validation(err.to_string()).into()
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

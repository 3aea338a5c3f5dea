// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;
use uuid::Uuid;

use crate::validate::ValidationErrors;

/// Failure taxonomy for every store operation.
#[derive(Debug, Error)]
pub enum StoreError {
  /// Bad input shape or values. Always recoverable by correcting the input;
  /// the stored state is untouched.
  #[error("{0}")]
  Validation(#[from] ValidationErrors),

  /// The referenced id does not exist in the collection.
  #[error("Item with id {id} not found")]
  NotFound { id: Uuid },

  /// The backing store was unavailable or rejected the operation. Not
  /// retried; surfaced verbatim to the caller.
  #[error("Persistence failure: {source}")]
  Persistence {
    #[source]
    source: AnyhowError,
  },
}

impl StoreError {
  pub fn persistence(source: impl Into<AnyhowError>) -> Self {
    StoreError::Persistence {
      source: source.into(),
    }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;

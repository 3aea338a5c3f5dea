// core/src/envelope.rs

use serde::{Deserialize, Serialize};

/// The fixed response wrapper used for every API outcome.
///
/// `success` is the authoritative discriminator: consumers check it rather
/// than relying solely on transport status in degraded environments. `data`
/// is omitted from the serialized form when absent (delete confirmations,
/// failures).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
  pub success: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
}

impl<T> Envelope<T> {
  pub fn ok(message: impl Into<String>, data: T) -> Self {
    Self {
      success: true,
      message: message.into(),
      data: Some(data),
    }
  }

  pub fn ok_empty(message: impl Into<String>) -> Self {
    Self {
      success: true,
      message: message.into(),
      data: None,
    }
  }

  pub fn fail(message: impl Into<String>) -> Self {
    Self {
      success: false,
      message: message.into(),
      data: None,
    }
  }
}

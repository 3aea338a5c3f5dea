// client/src/api.rs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use stockroom::{Category, Envelope, Item, ItemInput};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Operations of the inventory HTTP API, one method per endpoint.
///
/// The trait is the seam the shared items store is built against, so the
/// store can be exercised with a mock transport in tests.
#[async_trait]
pub trait ItemsApi: Send + Sync + 'static {
  async fn list(&self, category: Option<Category>) -> Result<Vec<Item>, ClientError>;
  async fn get(&self, id: Uuid) -> Result<Item, ClientError>;
  async fn create(&self, input: ItemInput) -> Result<Item, ClientError>;
  async fn update(&self, id: Uuid, input: ItemInput) -> Result<Item, ClientError>;
  async fn delete(&self, id: Uuid) -> Result<(), ClientError>;
}

/// HTTP client for the stockroom inventory API.
pub struct HttpItemsApi {
  http: reqwest::Client,
  base_url: String,
}

impl HttpItemsApi {
  /// Creates a client against the default local server address.
  pub fn new() -> Self {
    Self::with_base_url(DEFAULT_BASE_URL)
  }

  /// Creates a client with a custom base URL (scheme, host and `/api`).
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      base_url: base_url.into(),
    }
  }

  fn items_url(&self) -> String {
    format!("{}/items", self.base_url)
  }

  fn item_url(&self, id: Uuid) -> String {
    format!("{}/items/{}", self.base_url, id)
  }

  /// Decodes a response envelope, trusting `success` over transport status.
  async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
  ) -> Result<(u16, Envelope<T>), ClientError> {
    let status = response.status().as_u16();
    let body: serde_json::Value = response.json().await?;
    let envelope: Envelope<T> = serde_json::from_value(body)?;
    if !envelope.success {
      return Err(ClientError::Api {
        status,
        message: envelope.message,
      });
    }
    Ok((status, envelope))
  }

  fn require_data<T>((status, envelope): (u16, Envelope<T>)) -> Result<T, ClientError> {
    envelope.data.ok_or_else(|| ClientError::Api {
      status,
      message: "Response envelope carried no data".to_string(),
    })
  }
}

impl Default for HttpItemsApi {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ItemsApi for HttpItemsApi {
  #[instrument(skip(self))]
  async fn list(&self, category: Option<Category>) -> Result<Vec<Item>, ClientError> {
    let mut request = self.http.get(self.items_url());
    if let Some(category) = category {
      request = request.query(&[("category", category.as_str())]);
    }

    debug!("Fetching item list");
    let decoded = Self::decode::<Vec<Item>>(request.send().await?).await?;
    Ok(decoded.1.data.unwrap_or_default())
  }

  #[instrument(skip(self), fields(item_id = %id))]
  async fn get(&self, id: Uuid) -> Result<Item, ClientError> {
    let response = self.http.get(self.item_url(id)).send().await?;
    Self::require_data(Self::decode(response).await?)
  }

  #[instrument(skip(self, input))]
  async fn create(&self, input: ItemInput) -> Result<Item, ClientError> {
    let response = self.http.post(self.items_url()).json(&input).send().await?;
    Self::require_data(Self::decode(response).await?)
  }

  #[instrument(skip(self, input), fields(item_id = %id))]
  async fn update(&self, id: Uuid, input: ItemInput) -> Result<Item, ClientError> {
    let response = self.http.put(self.item_url(id)).json(&input).send().await?;
    Self::require_data(Self::decode(response).await?)
  }

  #[instrument(skip(self), fields(item_id = %id))]
  async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
    let response = self.http.delete(self.item_url(id)).send().await?;
    let _ = Self::decode::<()>(response).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let api = HttpItemsApi::new();
    assert_eq!(api.base_url, DEFAULT_BASE_URL);
  }

  #[test]
  fn test_client_custom_base_url() {
    let api = HttpItemsApi::with_base_url("http://inventory.internal/api");
    assert_eq!(api.base_url, "http://inventory.internal/api");
    assert_eq!(api.items_url(), "http://inventory.internal/api/items");
  }
}

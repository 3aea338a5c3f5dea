// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use stockroom::{Category, Item, ItemInput};
use stockroom_client::{ClientError, ItemsApi};
use tracing::Level;
use uuid::Uuid;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn api_error(status: u16, message: &str) -> ClientError {
  ClientError::Api {
    status,
    message: message.to_string(),
  }
}

pub fn make_item(name: &str, category: Category) -> Item {
  let now = Utc::now();
  Item {
    id: Uuid::new_v4(),
    item_name: name.to_string(),
    quantity: 1,
    price: 9.99,
    description: None,
    category,
    created_at: now,
    updated_at: now,
  }
}

/// Counting mock transport for exercising the shared store without a
/// server. The seeded item vec is treated as already newest-first.
pub struct MockItemsApi {
  items: Mutex<Vec<Item>>,
  list_delay: Option<Duration>,
  pub list_calls: AtomicUsize,
  pub fail_list: AtomicBool,
  pub fail_mutations: AtomicBool,
}

impl MockItemsApi {
  pub fn new(items: Vec<Item>) -> Self {
    Self {
      items: Mutex::new(items),
      list_delay: None,
      list_calls: AtomicUsize::new(0),
      fail_list: AtomicBool::new(false),
      fail_mutations: AtomicBool::new(false),
    }
  }

  pub fn with_list_delay(items: Vec<Item>, delay: Duration) -> Self {
    let mut api = Self::new(items);
    api.list_delay = Some(delay);
    api
  }

  pub fn list_calls(&self) -> usize {
    self.list_calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl ItemsApi for MockItemsApi {
  async fn list(&self, category: Option<Category>) -> Result<Vec<Item>, ClientError> {
    self.list_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(delay) = self.list_delay {
      tokio::time::sleep(delay).await;
    }
    if self.fail_list.load(Ordering::SeqCst) {
      return Err(api_error(500, "list unavailable"));
    }
    let items = self.items.lock().clone();
    Ok(match category {
      Some(c) => items.into_iter().filter(|i| i.category == c).collect(),
      None => items,
    })
  }

  async fn get(&self, id: Uuid) -> Result<Item, ClientError> {
    self
      .items
      .lock()
      .iter()
      .find(|i| i.id == id)
      .cloned()
      .ok_or_else(|| api_error(404, "Item not found"))
  }

  async fn create(&self, input: ItemInput) -> Result<Item, ClientError> {
    if self.fail_mutations.load(Ordering::SeqCst) {
      return Err(api_error(
        400,
        "Item name must contain only letters and spaces",
      ));
    }
    let now = Utc::now();
    let item = Item {
      id: Uuid::new_v4(),
      item_name: input.item_name.unwrap_or_default(),
      quantity: input.quantity.unwrap_or(0.0) as i64,
      price: input.price.unwrap_or(0.0),
      description: input.description,
      category: input
        .category
        .as_deref()
        .and_then(|c| c.parse().ok())
        .unwrap_or_default(),
      created_at: now,
      updated_at: now,
    };
    self.items.lock().insert(0, item.clone());
    Ok(item)
  }

  async fn update(&self, id: Uuid, input: ItemInput) -> Result<Item, ClientError> {
    if self.fail_mutations.load(Ordering::SeqCst) {
      return Err(api_error(400, "Quantity cannot be negative"));
    }
    let mut items = self.items.lock();
    let slot = items
      .iter_mut()
      .find(|i| i.id == id)
      .ok_or_else(|| api_error(404, "Item not found"))?;
    if let Some(name) = input.item_name {
      if !name.trim().is_empty() {
        slot.item_name = name.trim().to_string();
      }
    }
    if let Some(quantity) = input.quantity {
      slot.quantity = quantity as i64;
    }
    if let Some(price) = input.price {
      slot.price = price;
    }
    if let Some(description) = input.description {
      slot.description = Some(description);
    }
    if let Some(category) = input.category {
      if let Ok(category) = category.parse() {
        slot.category = category;
      }
    }
    slot.updated_at = Utc::now();
    Ok(slot.clone())
  }

  async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
    if self.fail_mutations.load(Ordering::SeqCst) {
      return Err(api_error(500, "delete rejected"));
    }
    let mut items = self.items.lock();
    let before = items.len();
    items.retain(|i| i.id != id);
    if items.len() == before {
      return Err(api_error(404, "Item not found"));
    }
    Ok(())
  }
}

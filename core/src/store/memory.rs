// core/src/store/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::ItemStore;
use crate::error::{StoreError, StoreResult};
use crate::model::{Item, ItemFilter, ItemInput};
use crate::validate::{apply_patch, validate_create};

/// In-process document store backing the inventory collection.
///
/// Records are kept in insertion order and `list` walks them newest first,
/// so creation order stays authoritative even when two records land within
/// the same clock tick. Lock guards are blocking and MUST NOT be held
/// across an `.await` suspension point.
#[derive(Debug, Default)]
pub struct MemoryStore {
  items: RwLock<Vec<Item>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.items.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.read().is_empty()
  }
}

#[async_trait]
impl ItemStore for MemoryStore {
  async fn create(&self, input: ItemInput) -> StoreResult<Item> {
    let draft = validate_create(&input)?;

    let now = Utc::now();
    let item = Item {
      id: Uuid::new_v4(),
      item_name: draft.item_name,
      quantity: draft.quantity,
      price: draft.price,
      description: draft.description,
      category: draft.category,
      created_at: now,
      updated_at: now,
    };

    self.items.write().push(item.clone());
    debug!(item_id = %item.id, "Item stored.");
    Ok(item)
  }

  async fn get(&self, id: Uuid) -> StoreResult<Item> {
    self
      .items
      .read()
      .iter()
      .find(|item| item.id == id)
      .cloned()
      .ok_or(StoreError::NotFound { id })
  }

  async fn list(&self, filter: ItemFilter) -> StoreResult<Vec<Item>> {
    let items = self.items.read();
    Ok(
      items
        .iter()
        .rev()
        .filter(|item| filter.category.map_or(true, |c| item.category == c))
        .cloned()
        .collect(),
    )
  }

  async fn update(&self, id: Uuid, input: ItemInput) -> StoreResult<Item> {
    let mut items = self.items.write();
    let slot = items
      .iter_mut()
      .find(|item| item.id == id)
      .ok_or(StoreError::NotFound { id })?;

    let draft = apply_patch(slot, &input)?;

    slot.item_name = draft.item_name;
    slot.quantity = draft.quantity;
    slot.price = draft.price;
    slot.description = draft.description;
    slot.category = draft.category;
    slot.updated_at = Utc::now();

    debug!(item_id = %slot.id, "Item updated.");
    Ok(slot.clone())
  }

  async fn delete(&self, id: Uuid) -> StoreResult<()> {
    let mut items = self.items.write();
    let before = items.len();
    items.retain(|item| item.id != id);
    if items.len() == before {
      return Err(StoreError::NotFound { id });
    }
    debug!(item_id = %id, "Item deleted.");
    Ok(())
  }
}

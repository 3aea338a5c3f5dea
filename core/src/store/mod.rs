// core/src/store/mod.rs

//! Persistence operations over the inventory collection.
//!
//! [`ItemStore`] is the seam between the HTTP layer and the backing
//! document store. Validation runs inside the operations: a record that
//! fails validation never reaches storage, and a partial update is merged
//! over the stored record before the merged result is checked.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::model::{Item, ItemFilter, ItemInput};

mod memory;

pub use memory::MemoryStore;

#[async_trait]
pub trait ItemStore: Send + Sync {
  /// Validates `input`, assigns a fresh id and timestamps, stores the
  /// record and returns it.
  async fn create(&self, input: ItemInput) -> StoreResult<Item>;

  /// Returns the record with `id`, or `NotFound`.
  async fn get(&self, id: Uuid) -> StoreResult<Item>;

  /// Returns all records matching `filter`, most-recently-created first.
  /// An empty collection is a successful outcome, not an error.
  async fn list(&self, filter: ItemFilter) -> StoreResult<Vec<Item>>;

  /// Partial update: fields present in `input` overwrite the stored record,
  /// absent fields retain their values, and the merged result is validated
  /// before anything is written. Refreshes `updated_at` on success.
  async fn update(&self, id: Uuid, input: ItemInput) -> StoreResult<Item>;

  /// Removes the record permanently. The removal is immediate; there is no
  /// tombstone and no recovery.
  async fn delete(&self, id: Uuid) -> StoreResult<()>;
}

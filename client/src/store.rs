// client/src/store.rs

//! The shared client-side mirror of the server's item collection.
//!
//! One [`ItemsStore`] instance is shared by every consumer (view) in the
//! process. Each mutating operation keeps the local collection consistent
//! with the server's response instead of re-fetching the whole list, and
//! the initial load is a process-wide single-flight: no matter how many
//! consumers ask for it concurrently, exactly one list request is issued
//! and every caller observes the same eventual result or failure.

use futures_util::future::{BoxFuture, FutureExt, Shared};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::api::ItemsApi;
use crate::error::ClientError;
use stockroom::{Category, Item, ItemInput};

/// Point-in-time view of the shared collection for consumers.
///
/// Consumers observe three states: loading (no data yet), error (last
/// operation failed, message retained) and ready (`items` reflects the last
/// known server state).
#[derive(Debug, Clone)]
pub struct ItemsSnapshot {
  pub items: Vec<Item>,
  pub loading: bool,
  pub error: Option<String>,
}

// The single-flight token: a shared future every joiner awaits. The error
// is Arc'd because Shared hands the result to every caller by clone.
type InitialLoad = Shared<BoxFuture<'static, Result<Vec<Item>, Arc<ClientError>>>>;

#[derive(Debug, Default)]
struct StoreState {
  items: Vec<Item>,
  loading: bool,
  error: Option<String>,
}

pub struct ItemsStore {
  api: Arc<dyn ItemsApi>,
  state: RwLock<StoreState>,
  initial_load: Mutex<Option<InitialLoad>>,
}

impl ItemsStore {
  pub fn new(api: Arc<dyn ItemsApi>) -> Self {
    Self {
      api,
      state: RwLock::new(StoreState {
        items: Vec::new(),
        loading: true,
        error: None,
      }),
      initial_load: Mutex::new(None),
    }
  }

  /// Returns the current observable state of the collection.
  pub fn snapshot(&self) -> ItemsSnapshot {
    let state = self.state.read();
    ItemsSnapshot {
      items: state.items.clone(),
      loading: state.loading,
      error: state.error.clone(),
    }
  }

  /// Joins the process-wide initial load, starting it if nobody has yet.
  ///
  /// The first caller installs the shared request token; every concurrent
  /// or later caller awaits the same token, so the server sees at most one
  /// initial list request per store lifetime.
  #[instrument(skip(self))]
  pub async fn ensure_loaded(&self) -> Result<Vec<Item>, Arc<ClientError>> {
    let load = {
      let mut slot = self.initial_load.lock();
      match slot.as_ref() {
        Some(load) => {
          debug!("Joining in-flight or completed initial load");
          load.clone()
        }
        None => {
          debug!("Starting initial load");
          let api = Arc::clone(&self.api);
          let load = async move { api.list(None).await.map_err(Arc::new) }
            .boxed()
            .shared();
          *slot = Some(load.clone());
          load
        }
      }
    };

    let result = load.await;

    // Only the first completion is applied; a consumer joining after later
    // mutations must not clobber the newer collection with the cached
    // initial result.
    let mut state = self.state.write();
    if state.loading {
      match &result {
        Ok(items) => {
          state.items = items.clone();
          state.loading = false;
          state.error = None;
        }
        Err(err) => {
          warn!(error = %err, "Initial item load failed.");
          state.loading = false;
          state.error = Some(err.to_string());
        }
      }
    }

    result
  }

  /// Re-fetches the collection, optionally restricted to one category.
  ///
  /// On failure the previously loaded items are retained; only the error
  /// message is recorded.
  #[instrument(skip(self))]
  pub async fn refresh(&self, category: Option<Category>) -> Result<Vec<Item>, ClientError> {
    {
      let mut state = self.state.write();
      state.loading = true;
      state.error = None;
    }

    match self.api.list(category).await {
      Ok(items) => {
        let mut state = self.state.write();
        state.items = items.clone();
        state.loading = false;
        Ok(items)
      }
      Err(err) => {
        warn!(error = %err, "Item refresh failed.");
        let mut state = self.state.write();
        state.loading = false;
        state.error = Some(err.to_string());
        Err(err)
      }
    }
  }

  /// Creates an item and prepends the server's record to the collection,
  /// matching the server's most-recent-first ordering.
  #[instrument(skip(self, input))]
  pub async fn add_item(&self, input: ItemInput) -> Result<Item, ClientError> {
    self.state.write().error = None;

    match self.api.create(input).await {
      Ok(item) => {
        self.state.write().items.insert(0, item.clone());
        Ok(item)
      }
      Err(err) => {
        warn!(error = %err, "Create item failed.");
        self.state.write().error = Some(err.to_string());
        Err(err)
      }
    }
  }

  /// Applies a partial update and replaces the matching local record with
  /// the server's returned one.
  #[instrument(skip(self, input), fields(item_id = %id))]
  pub async fn update_item(&self, id: Uuid, input: ItemInput) -> Result<Item, ClientError> {
    self.state.write().error = None;

    match self.api.update(id, input).await {
      Ok(item) => {
        let mut state = self.state.write();
        if let Some(slot) = state.items.iter_mut().find(|i| i.id == item.id) {
          *slot = item.clone();
        }
        Ok(item)
      }
      Err(err) => {
        warn!(error = %err, "Update item failed.");
        self.state.write().error = Some(err.to_string());
        Err(err)
      }
    }
  }

  /// Deletes an item and removes it from the local collection.
  #[instrument(skip(self), fields(item_id = %id))]
  pub async fn delete_item(&self, id: Uuid) -> Result<(), ClientError> {
    self.state.write().error = None;

    match self.api.delete(id).await {
      Ok(()) => {
        self.state.write().items.retain(|i| i.id != id);
        Ok(())
      }
      Err(err) => {
        warn!(error = %err, "Delete item failed.");
        self.state.write().error = Some(err.to_string());
        Err(err)
      }
    }
  }
}

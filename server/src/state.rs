// server/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use stockroom::ItemStore;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ItemStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}

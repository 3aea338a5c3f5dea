// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use stockroom::ItemInput;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Common Input Builders ---

pub fn desk_lamp_input() -> ItemInput {
  ItemInput {
    item_name: Some("Desk Lamp".to_string()),
    price: Some(19.99),
    category: Some("Furniture".to_string()),
    ..Default::default()
  }
}

pub fn input(name: &str, price: f64, category: &str) -> ItemInput {
  ItemInput {
    item_name: Some(name.to_string()),
    price: Some(price),
    category: Some(category.to_string()),
    ..Default::default()
  }
}

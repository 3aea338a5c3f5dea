// server/src/seed.rs

use stockroom::{ItemInput, ItemStore, StoreResult};
use tracing::info;

/// Inserts a handful of sample items so a fresh dev instance has data to
/// browse. Enabled with SEED_DB=true.
pub async fn seed_store(store: &dyn ItemStore) -> StoreResult<()> {
  let samples = [
    ("Desk Lamp", 4.0, 19.99, "Adjustable LED desk lamp", "Furniture"),
    ("Wireless Mouse", 12.0, 24.5, "", "Electronics"),
    ("Wool Sweater", 7.0, 39.0, "Medium, charcoal", "Clothing"),
  ];

  for (name, quantity, price, description, category) in samples {
    let input = ItemInput {
      item_name: Some(name.to_string()),
      quantity: Some(quantity),
      price: Some(price),
      description: if description.is_empty() {
        None
      } else {
        Some(description.to_string())
      },
      category: Some(category.to_string()),
    };
    let item = store.create(input).await?;
    info!(item_id = %item.id, name, "Seeded inventory item.");
  }

  Ok(())
}

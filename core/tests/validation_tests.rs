// tests/validation_tests.rs
mod common;

use common::*;
use stockroom::{apply_patch, validate_create, Category, Item, ItemInput};

fn assert_has_message(messages: &[String], expected: &str) {
  assert!(
    messages.iter().any(|m| m == expected),
    "expected violation {:?} in {:?}",
    expected,
    messages
  );
}

#[test]
fn test_minimal_create_applies_defaults() {
  setup_tracing();
  let draft = validate_create(&desk_lamp_input()).expect("valid input");

  assert_eq!(draft.item_name, "Desk Lamp");
  assert_eq!(draft.quantity, 0);
  assert_eq!(draft.price, 19.99);
  assert_eq!(draft.description, None);
  assert_eq!(draft.category, Category::Furniture);
}

#[test]
fn test_item_name_is_trimmed() {
  setup_tracing();
  let mut input = desk_lamp_input();
  input.item_name = Some("  Desk Lamp  ".to_string());

  let draft = validate_create(&input).expect("valid input");
  assert_eq!(draft.item_name, "Desk Lamp");
}

#[test]
fn test_name_with_digit_is_rejected() {
  setup_tracing();
  let mut input = desk_lamp_input();
  input.item_name = Some("Lamp2".to_string());

  let errors = validate_create(&input).expect_err("digit in name");
  assert_has_message(
    errors.messages(),
    "Item name must contain only letters and spaces",
  );
}

#[test]
fn test_blank_name_is_required() {
  setup_tracing();
  let mut input = desk_lamp_input();
  input.item_name = Some("   ".to_string());

  let errors = validate_create(&input).expect_err("blank name");
  assert_has_message(errors.messages(), "Item name is required");
}

#[test]
fn test_overlong_name_is_rejected() {
  setup_tracing();
  let mut input = desk_lamp_input();
  input.item_name = Some("a".repeat(201));

  let errors = validate_create(&input).expect_err("201-char name");
  assert_has_message(
    errors.messages(),
    "Item name must be less than 200 characters",
  );
}

#[test]
fn test_all_violations_are_collected() {
  setup_tracing();
  let errors = validate_create(&ItemInput::default()).expect_err("empty input");

  assert_has_message(errors.messages(), "Item name is required");
  assert_has_message(errors.messages(), "Price is required");
  assert_has_message(errors.messages(), "Category is required");

  // Display joins the individual messages with ", ".
  let joined = errors.to_string();
  assert!(joined.contains("Item name is required, "));
  assert!(joined.contains("Price is required"));
}

#[test]
fn test_quantity_rules() {
  setup_tracing();

  let mut input = desk_lamp_input();
  input.quantity = Some(-1.0);
  let errors = validate_create(&input).expect_err("negative quantity");
  assert_has_message(errors.messages(), "Quantity cannot be negative");

  input.quantity = Some(1.5);
  let errors = validate_create(&input).expect_err("fractional quantity");
  assert_has_message(errors.messages(), "Quantity must be an integer");

  input.quantity = Some(7.0);
  let draft = validate_create(&input).expect("valid quantity");
  assert_eq!(draft.quantity, 7);
}

#[test]
fn test_price_rules() {
  setup_tracing();

  let mut input = desk_lamp_input();
  input.price = Some(-0.01);
  let errors = validate_create(&input).expect_err("negative price");
  assert_has_message(errors.messages(), "Price cannot be negative");

  input.price = None;
  let errors = validate_create(&input).expect_err("missing price");
  assert_has_message(errors.messages(), "Price is required");

  input.price = Some(0.0);
  let draft = validate_create(&input).expect("free items are fine");
  assert_eq!(draft.price, 0.0);
}

#[test]
fn test_description_rules() {
  setup_tracing();

  let mut input = desk_lamp_input();
  input.description = Some("x".repeat(1001));
  let errors = validate_create(&input).expect_err("overlong description");
  assert_has_message(
    errors.messages(),
    "Description must be less than 1000 characters",
  );

  input.description = Some(String::new());
  let draft = validate_create(&input).expect("empty description is valid");
  assert_eq!(draft.description, Some(String::new()));
}

#[test]
fn test_unknown_category_is_rejected_not_coerced() {
  setup_tracing();
  let mut input = desk_lamp_input();
  input.category = Some("Toys".to_string());

  let errors = validate_create(&input).expect_err("unknown category");
  assert_has_message(
    errors.messages(),
    "Category must be one of: Electronics, Clothing, Furniture, Other",
  );
}

#[test]
fn test_unknown_input_fields_are_dropped() {
  setup_tracing();
  let raw = serde_json::json!({
    "itemName": "Desk Lamp",
    "price": 19.99,
    "category": "Furniture",
    "flavor": "vanilla",
    "_id": "abc123"
  });

  let input: ItemInput = serde_json::from_value(raw).expect("unknown keys are ignored");
  assert!(validate_create(&input).is_ok());
}

// --- Partial update merge semantics ---

fn stored_lamp() -> Item {
  let draft = validate_create(&desk_lamp_input()).expect("valid input");
  let now = chrono::Utc::now();
  Item {
    id: uuid::Uuid::new_v4(),
    item_name: draft.item_name,
    quantity: draft.quantity,
    price: draft.price,
    description: Some("Adjustable arm".to_string()),
    category: draft.category,
    created_at: now,
    updated_at: now,
  }
}

#[test]
fn test_patch_overwrites_only_present_fields() {
  setup_tracing();
  let existing = stored_lamp();
  let patch = ItemInput {
    quantity: Some(5.0),
    ..Default::default()
  };

  let merged = apply_patch(&existing, &patch).expect("valid patch");
  assert_eq!(merged.quantity, 5);
  assert_eq!(merged.item_name, existing.item_name);
  assert_eq!(merged.price, existing.price);
  assert_eq!(merged.description, existing.description);
  assert_eq!(merged.category, existing.category);
}

#[test]
fn test_patch_empty_name_falls_back_to_stored_value() {
  setup_tracing();
  let existing = stored_lamp();
  let patch = ItemInput {
    item_name: Some("   ".to_string()),
    price: Some(24.99),
    ..Default::default()
  };

  let merged = apply_patch(&existing, &patch).expect("valid patch");
  assert_eq!(merged.item_name, "Desk Lamp");
  assert_eq!(merged.price, 24.99);
}

#[test]
fn test_patch_empty_description_overwrites() {
  setup_tracing();
  let existing = stored_lamp();
  let patch = ItemInput {
    description: Some(String::new()),
    ..Default::default()
  };

  let merged = apply_patch(&existing, &patch).expect("valid patch");
  assert_eq!(merged.description, Some(String::new()));
}

#[test]
fn test_patch_violations_are_collected() {
  setup_tracing();
  let existing = stored_lamp();
  let patch = ItemInput {
    item_name: Some("Lamp2".to_string()),
    quantity: Some(-3.0),
    category: Some("Groceries".to_string()),
    ..Default::default()
  };

  let errors = apply_patch(&existing, &patch).expect_err("invalid patch");
  assert_has_message(
    errors.messages(),
    "Item name must contain only letters and spaces",
  );
  assert_has_message(errors.messages(), "Quantity cannot be negative");
  assert_has_message(
    errors.messages(),
    "Category must be one of: Electronics, Clothing, Furniture, Other",
  );
}

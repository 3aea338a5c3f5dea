// core/src/validate.rs

//! Validation and normalization of raw item input.
//!
//! Both entry points collect every applicable field violation before
//! reporting, so one round trip tells the caller everything that is wrong
//! with the record.

use thiserror::Error;

use crate::model::{Category, Item, ItemDraft, ItemInput};

pub const ITEM_NAME_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 1000;

// Largest magnitude at which an f64 still represents every integer exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Field-level violations collected over a whole input record.
///
/// `Display` joins the individual messages with `", "`, which is the exact
/// text surfaced in a failed response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join(", "))]
pub struct ValidationErrors {
  messages: Vec<String>,
}

impl ValidationErrors {
  fn new() -> Self {
    Self { messages: Vec::new() }
  }

  fn push(&mut self, message: impl Into<String>) {
    self.messages.push(message.into());
  }

  pub fn messages(&self) -> &[String] {
    &self.messages
  }

  pub fn is_empty(&self) -> bool {
    self.messages.is_empty()
  }

  fn finish<T>(self, value: T) -> Result<T, Self> {
    if self.messages.is_empty() {
      Ok(value)
    } else {
      Err(self)
    }
  }
}

/// Validates a create request, producing the normalized draft.
///
/// Omitted `quantity` defaults to 0; `price` and `category` are required;
/// `item_name` is trimmed before any other rule is applied.
pub fn validate_create(input: &ItemInput) -> Result<ItemDraft, ValidationErrors> {
  let mut errors = ValidationErrors::new();

  let item_name = match input.item_name.as_deref().map(str::trim) {
    Some(trimmed) if !trimmed.is_empty() => {
      check_name_rules(trimmed, &mut errors);
      trimmed.to_string()
    }
    _ => {
      errors.push("Item name is required");
      String::new()
    }
  };

  let quantity = match input.quantity {
    Some(raw) => validate_quantity(raw, &mut errors).unwrap_or(0),
    None => 0,
  };

  let price = match input.price {
    Some(raw) => {
      check_price_rules(raw, &mut errors);
      raw
    }
    None => {
      errors.push("Price is required");
      0.0
    }
  };

  let description = input
    .description
    .as_deref()
    .map(|raw| check_description(raw, &mut errors));

  let category = match input.category.as_deref() {
    Some(raw) => parse_category(raw, &mut errors).unwrap_or_default(),
    None => {
      errors.push("Category is required");
      Category::default()
    }
  };

  errors.finish(ItemDraft {
    item_name,
    quantity,
    price,
    description,
    category,
  })
}

/// Merges a partial update over an existing record and validates the result.
///
/// `quantity`, `price`, `description` and `category` overwrite whenever they
/// are present in the input, even when empty or zero. `item_name` falls back
/// to the stored value when absent or empty after trimming. Every present
/// field is validated; violations are collected across all of them.
pub fn apply_patch(existing: &Item, input: &ItemInput) -> Result<ItemDraft, ValidationErrors> {
  let mut errors = ValidationErrors::new();

  let item_name = match input.item_name.as_deref().map(str::trim) {
    Some(trimmed) if !trimmed.is_empty() => {
      check_name_rules(trimmed, &mut errors);
      trimmed.to_string()
    }
    _ => existing.item_name.clone(),
  };

  let quantity = match input.quantity {
    Some(raw) => validate_quantity(raw, &mut errors).unwrap_or(existing.quantity),
    None => existing.quantity,
  };

  let price = match input.price {
    Some(raw) => {
      check_price_rules(raw, &mut errors);
      raw
    }
    None => existing.price,
  };

  let description = match input.description.as_deref() {
    Some(raw) => Some(check_description(raw, &mut errors)),
    None => existing.description.clone(),
  };

  let category = match input.category.as_deref() {
    Some(raw) => parse_category(raw, &mut errors).unwrap_or(existing.category),
    None => existing.category,
  };

  errors.finish(ItemDraft {
    item_name,
    quantity,
    price,
    description,
    category,
  })
}

fn check_name_rules(trimmed: &str, errors: &mut ValidationErrors) {
  if trimmed.chars().count() > ITEM_NAME_MAX {
    errors.push("Item name must be less than 200 characters");
  }
  if !trimmed.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
    errors.push("Item name must contain only letters and spaces");
  }
}

fn validate_quantity(raw: f64, errors: &mut ValidationErrors) -> Option<i64> {
  if !raw.is_finite() {
    errors.push("Quantity must be a number");
    return None;
  }
  if raw.fract() != 0.0 || raw.abs() > MAX_SAFE_INTEGER {
    errors.push("Quantity must be an integer");
    return None;
  }
  if raw < 0.0 {
    errors.push("Quantity cannot be negative");
    return None;
  }
  Some(raw as i64)
}

fn check_price_rules(raw: f64, errors: &mut ValidationErrors) {
  if !raw.is_finite() {
    errors.push("Price must be a number");
  } else if raw < 0.0 {
    errors.push("Price cannot be negative");
  }
}

fn check_description(raw: &str, errors: &mut ValidationErrors) -> String {
  let trimmed = raw.trim();
  if trimmed.chars().count() > DESCRIPTION_MAX {
    errors.push("Description must be less than 1000 characters");
  }
  trimmed.to_string()
}

fn parse_category(raw: &str, errors: &mut ValidationErrors) -> Option<Category> {
  match raw.trim().parse::<Category>() {
    Ok(category) => Some(category),
    Err(e) => {
      errors.push(e.to_string());
      None
    }
  }
}

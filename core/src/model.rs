// core/src/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// A single inventory record, as persisted and as sent over the wire.
///
/// `id` is assigned by the store at creation and never reassigned.
/// `updated_at >= created_at` holds for the whole lifetime of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
  pub id: Uuid,
  pub item_name: String,
  pub quantity: i64,
  pub price: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub category: Category,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Closed set of item categories.
///
/// Unknown values are rejected at the validation boundary, never coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
  Electronics,
  Clothing,
  Furniture,
  #[default]
  Other,
}

impl Category {
  pub const ALL: [Category; 4] = [
    Category::Electronics,
    Category::Clothing,
    Category::Furniture,
    Category::Other,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Electronics => "Electronics",
      Category::Clothing => "Clothing",
      Category::Furniture => "Furniture",
      Category::Other => "Other",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Rejection for a category string outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Category must be one of: Electronics, Clothing, Furniture, Other")]
pub struct UnknownCategory;

impl FromStr for Category {
  type Err = UnknownCategory;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Electronics" => Ok(Category::Electronics),
      "Clothing" => Ok(Category::Clothing),
      "Furniture" => Ok(Category::Furniture),
      "Other" => Ok(Category::Other),
      _ => Err(UnknownCategory),
    }
  }
}

/// Raw input record for create and partial update.
///
/// Every field is optional; presence is what distinguishes "overwrite" from
/// "leave alone" on update. Numbers are accepted as JSON numbers so that
/// integrality and sign are reported as field violations rather than
/// deserialization failures, and `category` stays a raw string so unknown
/// values get a violation instead of a serde error. Unknown keys in the
/// input are dropped silently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemInput {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub item_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub quantity: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
}

/// Normalized result of validating an input record: the full set of mutable
/// fields, ready to be persisted by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
  pub item_name: String,
  pub quantity: i64,
  pub price: f64,
  pub description: Option<String>,
  pub category: Category,
}

/// Restriction applied by the list operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFilter {
  pub category: Option<Category>,
}

// server/src/web/handlers/item_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use stockroom::{Category, Envelope, Item, ItemFilter, ItemInput};

const NO_ITEMS_MESSAGE: &str = "No items found. Add items to your inventory.";

#[derive(Deserialize, Debug)]
pub struct ListItemsQuery {
  pub category: Option<String>,
}

// An id that does not parse as a UUID can never name a stored record.
fn parse_item_id(raw: &str) -> Result<Uuid, AppError> {
  Uuid::parse_str(raw).map_err(|_| {
    warn!(raw_id = raw, "Request with malformed item id.");
    AppError::NotFound(format!("'{}' is not a valid item id", raw))
  })
}

#[instrument(name = "handler::add_item", skip(app_state, payload))]
pub async fn add_item_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ItemInput>,
) -> Result<HttpResponse, AppError> {
  let item = app_state.store.create(payload.into_inner()).await?;

  info!(item_id = %item.id, "Item created successfully.");
  Ok(HttpResponse::Created().json(Envelope::ok("Item added successfully", item)))
}

#[instrument(name = "handler::list_items", skip(app_state, query))]
pub async fn list_items_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ListItemsQuery>,
) -> Result<HttpResponse, AppError> {
  let filter = match query.category.as_deref() {
    Some(raw) => match raw.trim().parse::<Category>() {
      Ok(category) => ItemFilter {
        category: Some(category),
      },
      Err(_) => {
        // A value outside the closed category set can never match a stored
        // item, so the filter result is an empty collection, not an error.
        warn!(category = raw, "List request with unknown category filter.");
        return Ok(HttpResponse::Ok().json(Envelope::ok(NO_ITEMS_MESSAGE, Vec::<Item>::new())));
      }
    },
    None => ItemFilter::default(),
  };

  let items = app_state.store.list(filter).await?;
  info!("Successfully fetched {} items.", items.len());

  if items.is_empty() {
    return Ok(HttpResponse::Ok().json(Envelope::ok(NO_ITEMS_MESSAGE, items)));
  }
  Ok(HttpResponse::Ok().json(Envelope::ok("Items retrieved successfully", items)))
}

#[instrument(name = "handler::get_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn get_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_item_id(&path.into_inner())?;
  let item = app_state.store.get(id).await?;

  Ok(HttpResponse::Ok().json(Envelope::ok("Item retrieved successfully", item)))
}

#[instrument(name = "handler::edit_item", skip(app_state, path, payload), fields(item_id = %path.as_ref()))]
pub async fn edit_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<ItemInput>,
) -> Result<HttpResponse, AppError> {
  let id = parse_item_id(&path.into_inner())?;
  let item = app_state.store.update(id, payload.into_inner()).await?;

  info!(item_id = %item.id, "Item updated successfully.");
  Ok(HttpResponse::Ok().json(Envelope::ok("Item updated successfully", item)))
}

#[instrument(name = "handler::delete_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn delete_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_item_id(&path.into_inner())?;
  app_state.store.delete(id).await?;

  info!(item_id = %id, "Item deleted successfully.");
  Ok(HttpResponse::Ok().json(Envelope::<()>::ok_empty("Item deleted successfully")))
}

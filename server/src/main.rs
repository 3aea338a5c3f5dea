// server/src/main.rs

use stockroom_server::config::AppConfig;
use stockroom_server::errors::json_error_handler;
use stockroom_server::seed;
use stockroom_server::state::AppState;
use stockroom_server::web::configure_app_routes;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use stockroom::{ItemStore, MemoryStore};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting stockroom inventory server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Initialize the item store. The collection lives in process memory; the
  // ItemStore trait is the seam a durable backend would plug into.
  let store: Arc<dyn ItemStore> = Arc::new(MemoryStore::new());
  tracing::info!("Item store initialized.");

  // Seed the store if configured
  if app_config.seed_db {
    if let Err(e) = seed::seed_store(store.as_ref()).await {
      tracing::error!(error = %e, "Failed to seed the item store.");
    }
  }

  // Create AppState
  let app_state = AppState {
    store: store.clone(),
    config: app_config.clone(), // Clone Arc for AppState
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone())) // Share AppState with handlers
      .app_data(web::JsonConfig::default().error_handler(json_error_handler))
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}

// server/src/web/routes.rs

use actix_web::web;

// Simple health check handler. In a real deployment this might also probe
// the backing store.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` (and by the integration tests) to
// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Inventory Item Routes
      .service(
        web::scope("/items")
          .route(
            "",
            web::get().to(crate::web::handlers::item_handlers::list_items_handler),
          )
          .route(
            "",
            web::post().to(crate::web::handlers::item_handlers::add_item_handler),
          )
          .route(
            "/{item_id}",
            web::get().to(crate::web::handlers::item_handlers::get_item_handler),
          )
          .route(
            "/{item_id}",
            web::put().to(crate::web::handlers::item_handlers::edit_item_handler),
          )
          .route(
            "/{item_id}",
            web::delete().to(crate::web::handlers::item_handlers::delete_item_handler),
          ),
      ),
  );
}

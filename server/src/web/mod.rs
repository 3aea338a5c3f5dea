// server/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;

// Re-export so main.rs and tests can easily access routing configuration.
pub use routes::configure_app_routes;

// server/src/lib.rs

//! Stockroom inventory server: the actix-web application exposing the item
//! CRUD API. The binary lives in `main.rs`; the modules are exported here
//! so integration tests can assemble the same App the binary runs.

pub mod config;
pub mod errors;
pub mod seed;
pub mod state;
pub mod web;

// client/src/lib.rs

//! Consumer-side library for the stockroom inventory API.
//!
//! Two layers:
//!  - [`ItemsApi`] / [`HttpItemsApi`]: one typed call per endpoint, with
//!    the response envelope's `success` flag treated as the authoritative
//!    outcome discriminator.
//!  - [`ItemsStore`]: the shared in-memory collection views read from,
//!    kept consistent after every mutation without redundant re-fetches.

pub mod api;
pub mod error;
pub mod store;

pub use crate::api::{HttpItemsApi, ItemsApi};
pub use crate::error::{ClientError, ClientResult};
pub use crate::store::{ItemsSnapshot, ItemsStore};

//! REST surface for restash services.
//!
//! Turns a `Service<T>` into the CRUD resource the `restash-http` store
//! consumes: paged listing, field-equality lookup, substring search, batch
//! upsert, and delete, all under `/{table_name}`.

#[allow(unused_extern_crates)]
extern crate self as restash_api;

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use router::{read_only_resource_router, resource_router};
pub use server::ApiServer;

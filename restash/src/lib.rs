//! Main restash crate providing generic CRUD data-access scaffolding.
//!
//! This crate is the primary entry point for users of the restash framework.
//! It re-exports the core types from the sub-crates and provides convenient
//! access to the store backends. Given an entity type, restash derives a
//! paginated, searchable, upsertable resource: a service layer, a pluggable
//! data store (in-memory or HTTP-backed), and the matching REST surface.
//!
//! # Features
//!
//! - **Entity-first** - Describe your data once with Serde and `#[derive(Entity)]`
//! - **Pluggable stores** - In-memory and HTTP-backed stores behind one trait
//! - **Uniform recovery** - Services log store failures and answer with
//!   empty/default values instead of propagating errors
//! - **Field-driven queries** - Equality lookup and substring search addressed
//!   by serialized field names
//!
//! # Quick Start
//!
//! ```ignore
//! use restash::{Entity, prelude::*, memory::MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
//! #[entity(table = "people")]
//! pub struct Person {
//!     #[entity(id)]
//!     pub id: i64,
//!     #[entity(searchable)]
//!     pub name: String,
//!     pub email: String,
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = Service::new(MemoryStore::<Person>::new());
//!
//!     service
//!         .upsert(Person { id: 1, name: "Alice".into(), email: "alice@example.com".into() })
//!         .await;
//!
//!     let hits = service.search("ali", &[], None).await;
//!     println!("found: {hits:?}");
//! }
//! ```
//!
//! # Remote resources
//!
//! With the `api` feature, a service mounts as a REST resource; with the
//! `http` feature, the same wire format is consumed from the client side, so
//! an application can swap its in-memory store for a remote one without
//! touching the service layer.
//!
//! ```ignore
//! // Server side (feature "api"):
//! let app = restash::api::resource_router(Service::new(MemoryStore::<Person>::new()));
//!
//! // Client side (feature "http"):
//! let store = restash::http::HttpStore::<Person>::builder("http://localhost:8080")
//!     .build()
//!     .await?;
//! let service = Service::new(store);
//! let people = service.get_page(None).await;
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Fast in-memory storage for development and testing
//! - [`http`] - HTTP-client store speaking the restash wire format (requires
//!   the `http` feature)

pub mod prelude;

pub use restash_core::{entity, error, fields, paging, service, store};

pub use restash_core::entity::Entity;
pub use restash_macros::Entity;

/// In-memory store implementations.
pub mod memory {
    pub use restash_memory::{MemoryStore, MemoryStoreBuilder};
}

/// HTTP-client store implementations.
///
/// This module is only available when the `http` feature is enabled.
#[cfg(feature = "http")]
pub mod http {
    pub use restash_http::{HttpStore, HttpStoreBuilder};
}

/// REST surface for exposing services.
///
/// This module is only available when the `api` feature is enabled.
#[cfg(feature = "api")]
pub mod api {
    pub use restash_api::{
        ApiConfig, ApiError, ApiResult, ApiServer, read_only_resource_router, resource_router,
    };
}

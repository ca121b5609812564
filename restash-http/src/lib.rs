//! HTTP-client backend implementation for restash.
//!
//! This crate provides an HTTP-backed implementation of the `DataStore` trait:
//! every store operation maps 1:1 onto one request against a restash resource
//! router (or any server speaking the same wire format). There is no retry,
//! caching, or batching layer - a failed request surfaces as a store error and
//! the service layer's recovery policy takes over.
//!
//! To use this backend through the facade crate, include the `http` feature:
//!
//! ```toml
//! [dependencies]
//! restash = { version = "x.y.z", features = ["http"] }
//! ```
//!
//! # Wire format
//!
//! | operation     | request                                              |
//! |---------------|------------------------------------------------------|
//! | `get_page`    | `GET {base}/{table}?page=&pageSize=`                 |
//! | `get(id)`     | `GET {base}/{table}/find/id/{id}?page=0&pageSize=1`  |
//! | `get_by`      | `GET {base}/{table}/find/{field}/{value}?page=&pageSize=` |
//! | `search`      | `GET {base}/{table}/search?q=&fields=&page=&pageSize=` |
//! | `upsert`      | `PUT {base}/{table}` (JSON array body)               |
//! | `delete`      | `DELETE {base}/{table}?id=`                          |
//!
//! # Example
//!
//! ```ignore
//! use restash_core::store::StoreBuilder;
//! use restash_http::HttpStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = HttpStore::<Person>::builder("http://localhost:8080")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as restash_http;

pub mod store;

pub use store::{HttpStore, HttpStoreBuilder};

//! In-memory data store backend for restash.
//!
//! This crate provides a thread-safe, in-memory implementation of the
//! `DataStore` trait. It uses an async-aware read-write lock for concurrent
//! access and is ideal for development, testing, and small-scale deployments.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and writes using an async-aware RwLock
//! - **Stable ordering** - Rows iterate in id order, so paging is deterministic
//! - **Full query support** - Field-equality lookup and substring search with paging
//!
//! # Quick Start
//!
//! ```ignore
//! use restash_core::service::Service;
//! use restash_memory::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = Service::new(MemoryStore::<Person>::new());
//!     service.upsert(Person { id: 1, name: "Alice".into() }).await;
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as restash_memory;

pub mod store;

pub use store::{MemoryStore, MemoryStoreBuilder};

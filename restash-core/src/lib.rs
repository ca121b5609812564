//! A generic CRUD data-access layer that turns an entity type into a paginated,
//! searchable, upsertable resource without per-entity hand coding.
//!
//! This crate is the core of the restash project and provides:
//!
//! - **Entity traits** ([`entity`]) - Core traits for defining and serializing entities
//! - **Field introspection** ([`fields`]) - Name-based lookup, comparison, and search over
//!   an entity's serialized field map
//! - **Store abstraction** ([`store`]) - Traits for implementing pluggable data stores
//! - **Service layer** ([`service`]) - CRUD orchestration with uniform error recovery
//! - **Paging** ([`paging`]) - Skip/take pagination parameters
//! - **Error handling** ([`error`]) - Error and result types shared by all backends
//!
//! # Example
//!
//! ```ignore
//! use restash_core::entity::Entity;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Person {
//!     pub id: i64,
//!     pub name: String,
//!     pub email: String,
//! }
//!
//! impl Entity for Person {
//!     fn id(&self) -> i64 {
//!         self.id
//!     }
//!
//!     fn table_name() -> &'static str {
//!         "people"
//!     }
//!
//!     fn searchable_fields() -> &'static [&'static str] {
//!         &["name", "email"]
//!     }
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as restash_core;

pub mod entity;
pub mod error;
pub mod fields;
pub mod paging;
pub mod service;
pub mod store;

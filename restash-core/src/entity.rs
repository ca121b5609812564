//! Core traits for entity representation and serialization.
//!
//! This module provides the fundamental trait that all stored entities must implement,
//! as well as utilities for converting entities to and from their JSON field map.

use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::StoreResult;

/// Core trait that all entities handled by a data store must implement.
///
/// This trait defines the minimal interface required for a type to be served as a
/// CRUD resource: an integer identity, a table (resource) name, and the set of
/// fields that participate in substring search.
///
/// The identity must serialize under the `"id"` key: the remote store resolves
/// single-entity lookups through the `find/id/{id}` route, which matches on the
/// serialized field name.
///
/// # Deriving
///
/// The `restash` facade crate ships a `#[derive(Entity)]` macro that implements
/// this trait from `#[entity(...)]` attributes. A manual implementation looks like:
///
/// ```ignore
/// use restash_core::entity::Entity;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// pub struct Person {
///     pub id: i64,
///     pub name: String,
/// }
///
/// impl Entity for Person {
///     fn id(&self) -> i64 {
///         self.id
///     }
///
///     fn table_name() -> &'static str {
///         "people"
///     }
///
///     fn searchable_fields() -> &'static [&'static str] {
///         &["name"]
///     }
/// }
/// ```
pub trait Entity:
    Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + Default + 'static
{
    /// Returns this entity's identifier.
    fn id(&self) -> i64;

    /// Returns the table (resource) name this entity is stored under.
    ///
    /// This doubles as the path segment of the entity's REST resource
    /// (e.g. `"people"` maps to `/people`).
    fn table_name() -> &'static str;

    /// Returns the serialized field names that substring search may inspect.
    ///
    /// Fields not listed here are silently skipped by search operations.
    /// Defaults to no fields.
    fn searchable_fields() -> &'static [&'static str] {
        &[]
    }
}

/// Extension trait providing serialization utilities for entities.
///
/// This trait is automatically implemented for all types that implement [`Entity`].
pub trait EntityExt: Entity {
    /// Converts this entity to a JSON value (its field map).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_value(&self) -> StoreResult<Value>;

    /// Creates an entity from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_value(value: Value) -> StoreResult<Self>;
}

impl<T: Entity> EntityExt for T {
    fn to_value(&self) -> StoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_value(value: Value) -> StoreResult<Self> {
        Ok(from_value(value)?)
    }
}

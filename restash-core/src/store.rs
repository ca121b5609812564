//! Pluggable data store abstraction.
//!
//! This module defines the traits that abstract over different store
//! implementations, allowing the service layer to work with any backend
//! (in-memory, HTTP-backed, or custom).
//!
//! # Overview
//!
//! [`ReadOnlyDataStore`] covers retrieval: single lookup by id, paged listing,
//! field-equality lookup, and substring search. [`DataStore`] extends it with
//! the mutating half: upsert and delete. Implementations are required to be
//! thread-safe (`Send + Sync`) and support concurrent access.
//!
//! Both traits are object-safe; blanket impls for `&S` and `Arc<S>` mean a
//! service can hold a concrete store, a shared store, or an `Arc<dyn …>`
//! trait object interchangeably.

use async_trait::async_trait;
use serde_json::Value;
use std::{fmt::Debug, sync::Arc};

use crate::{entity::Entity, error::StoreResult, paging::PagingInfo};

/// Abstract interface for the read side of an entity store.
///
/// # Field names
///
/// `get_by` and `search` address fields by their *serialized* names (the keys
/// of the entity's JSON field map). Implementations must reject unknown field
/// names with [`StoreError::UnknownField`](crate::error::StoreError::UnknownField)
/// rather than silently returning nothing.
#[async_trait]
pub trait ReadOnlyDataStore<T: Entity>: Send + Sync + Debug {
    /// Retrieves a single entity by id.
    ///
    /// Returns `Ok(None)` when no entity with the given id exists.
    async fn get(&self, id: i64) -> StoreResult<Option<T>>;

    /// Retrieves one page of entities.
    ///
    /// Ordering is stable across calls so consecutive pages do not overlap.
    async fn get_page(&self, paging: PagingInfo) -> StoreResult<Vec<T>>;

    /// Retrieves one page of the entities whose named field equals `value`.
    ///
    /// The query value is coerced toward the field's type the way
    /// [`fields::field_matches`](crate::fields::field_matches) does, so values
    /// taken verbatim from a URL still match typed fields.
    async fn get_by(&self, field: &str, value: Value, paging: PagingInfo) -> StoreResult<Vec<T>>;

    /// Retrieves one page of the entities where any of the named fields
    /// contains `query` (case-insensitive substring).
    ///
    /// An entity matching several fields is returned once. An empty field list
    /// yields no results.
    async fn search(
        &self,
        query: &str,
        fields: &[String],
        paging: PagingInfo,
    ) -> StoreResult<Vec<T>>;
}

/// Abstract interface for a full entity store: retrieval plus mutation.
#[async_trait]
pub trait DataStore<T: Entity>: ReadOnlyDataStore<T> {
    /// Inserts the entity, or replaces the stored entity with the same id.
    ///
    /// Returns the stored entity.
    async fn upsert(&self, item: T) -> StoreResult<T>;

    /// Upserts a batch of entities in order.
    ///
    /// Returns the stored entities.
    async fn upsert_many(&self, items: Vec<T>) -> StoreResult<Vec<T>>;

    /// Deletes the entity with the given id.
    ///
    /// Returns `true` if an entity was deleted, `false` if none existed.
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}

#[async_trait]
impl<T, S> ReadOnlyDataStore<T> for &S
where
    T: Entity,
    S: ReadOnlyDataStore<T> + ?Sized,
{
    async fn get(&self, id: i64) -> StoreResult<Option<T>> {
        (**self).get(id).await
    }

    async fn get_page(&self, paging: PagingInfo) -> StoreResult<Vec<T>> {
        (**self).get_page(paging).await
    }

    async fn get_by(&self, field: &str, value: Value, paging: PagingInfo) -> StoreResult<Vec<T>> {
        (**self).get_by(field, value, paging).await
    }

    async fn search(
        &self,
        query: &str,
        fields: &[String],
        paging: PagingInfo,
    ) -> StoreResult<Vec<T>> {
        (**self).search(query, fields, paging).await
    }
}

#[async_trait]
impl<T, S> DataStore<T> for &S
where
    T: Entity,
    S: DataStore<T> + ?Sized,
{
    async fn upsert(&self, item: T) -> StoreResult<T> {
        (**self).upsert(item).await
    }

    async fn upsert_many(&self, items: Vec<T>) -> StoreResult<Vec<T>> {
        (**self).upsert_many(items).await
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        (**self).delete(id).await
    }
}

#[async_trait]
impl<T, S> ReadOnlyDataStore<T> for Arc<S>
where
    T: Entity,
    S: ReadOnlyDataStore<T> + ?Sized,
{
    async fn get(&self, id: i64) -> StoreResult<Option<T>> {
        (**self).get(id).await
    }

    async fn get_page(&self, paging: PagingInfo) -> StoreResult<Vec<T>> {
        (**self).get_page(paging).await
    }

    async fn get_by(&self, field: &str, value: Value, paging: PagingInfo) -> StoreResult<Vec<T>> {
        (**self).get_by(field, value, paging).await
    }

    async fn search(
        &self,
        query: &str,
        fields: &[String],
        paging: PagingInfo,
    ) -> StoreResult<Vec<T>> {
        (**self).search(query, fields, paging).await
    }
}

#[async_trait]
impl<T, S> DataStore<T> for Arc<S>
where
    T: Entity,
    S: DataStore<T> + ?Sized,
{
    async fn upsert(&self, item: T) -> StoreResult<T> {
        (**self).upsert(item).await
    }

    async fn upsert_many(&self, items: Vec<T>) -> StoreResult<Vec<T>> {
        (**self).upsert_many(items).await
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        (**self).delete(id).await
    }
}

/// Factory trait for constructing store instances.
#[async_trait]
pub trait StoreBuilder {
    /// The store type this builder produces.
    type Store;

    /// Builds the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Initialization`](crate::error::StoreError::Initialization)
    /// if construction fails.
    async fn build(self) -> StoreResult<Self::Store>;
}

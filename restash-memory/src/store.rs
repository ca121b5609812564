//! In-memory store implementation.
//!
//! This module provides a simple but fully functional backend that keeps
//! entities in a `BTreeMap` keyed by id, behind an async-safe read-write lock.

use std::{collections::BTreeMap, fmt, marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use mea::rwlock::RwLock;
use serde_json::Value;

use restash_core::{
    entity::Entity,
    error::StoreResult,
    fields::{field_contains, field_matches},
    paging::PagingInfo,
    store::{DataStore, ReadOnlyDataStore, StoreBuilder},
};

/// Thread-safe in-memory entity store.
///
/// Entities live in a `BTreeMap` keyed by id, so scans (and therefore pages)
/// are always in id order and consecutive pages never overlap.
///
/// # Thread Safety
///
/// `MemoryStore` is cloneable and uses an `Arc`-wrapped internal map; clones
/// share the same underlying data and may be used concurrently from multiple
/// async tasks.
///
/// # Performance
///
/// Field lookup and search scan every row. For the small and medium data sets
/// this backend targets that is acceptable; there is no indexing.
///
/// # Example
///
/// ```ignore
/// use restash_memory::MemoryStore;
///
/// let store = MemoryStore::<Person>::new();
/// store.upsert(Person { id: 1, name: "Alice".into() }).await?;
/// assert!(store.get(1).await?.is_some());
/// ```
#[derive(Clone)]
pub struct MemoryStore<T: Entity> {
    rows: Arc<RwLock<BTreeMap<i64, T>>>,
}

impl<T: Entity> MemoryStore<T> {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self { rows: Arc::new(RwLock::new(BTreeMap::new())) }
    }

    /// Creates a builder for constructing a `MemoryStore`.
    pub fn builder() -> MemoryStoreBuilder<T> {
        MemoryStoreBuilder::default()
    }

    /// Returns the number of stored entities.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns `true` when the store holds no entities.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> fmt::Debug for MemoryStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("table", &T::table_name())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Entity> ReadOnlyDataStore<T> for MemoryStore<T> {
    async fn get(&self, id: i64) -> StoreResult<Option<T>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn get_page(&self, paging: PagingInfo) -> StoreResult<Vec<T>> {
        let rows = self.rows.read().await;

        Ok(rows
            .values()
            .skip(paging.offset())
            .take(paging.page_size)
            .cloned()
            .collect())
    }

    async fn get_by(&self, field: &str, value: Value, paging: PagingInfo) -> StoreResult<Vec<T>> {
        let rows = self.rows.read().await;

        let mut hits = Vec::new();
        for row in rows.values() {
            if field_matches(row, field, &value)? {
                hits.push(row.clone());
            }
        }

        Ok(paging.paginate(hits))
    }

    async fn search(
        &self,
        query: &str,
        fields: &[String],
        paging: PagingInfo,
    ) -> StoreResult<Vec<T>> {
        let rows = self.rows.read().await;

        // Row-major scan: a row matching several fields is still pushed once.
        let mut hits = Vec::new();
        for row in rows.values() {
            for field in fields {
                if field_contains(row, field, query)? {
                    hits.push(row.clone());
                    break;
                }
            }
        }

        Ok(paging.paginate(hits))
    }
}

#[async_trait]
impl<T: Entity> DataStore<T> for MemoryStore<T> {
    async fn upsert(&self, item: T) -> StoreResult<T> {
        self.rows
            .write()
            .await
            .insert(item.id(), item.clone());

        Ok(item)
    }

    async fn upsert_many(&self, items: Vec<T>) -> StoreResult<Vec<T>> {
        let mut rows = self.rows.write().await;
        for item in &items {
            rows.insert(item.id(), item.clone());
        }

        Ok(items)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}

/// Builder for constructing [`MemoryStore`] instances.
///
/// Currently carries no options; it exists so in-memory and remote stores are
/// constructed through the same [`StoreBuilder`] seam.
pub struct MemoryStoreBuilder<T: Entity> {
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Default for MemoryStoreBuilder<T> {
    fn default() -> Self {
        Self { _entity: PhantomData }
    }
}

#[async_trait]
impl<T: Entity> StoreBuilder for MemoryStoreBuilder<T> {
    type Store = MemoryStore<T>;

    async fn build(self) -> StoreResult<Self::Store> {
        Ok(MemoryStore::new())
    }
}

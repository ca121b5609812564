//! CRUD orchestration over a pluggable data store.
//!
//! This module provides the service layer: a thin generic orchestrator that
//! turns any [`DataStore`] into a paginated, searchable, upsertable resource.
//! Every operation is wrapped in a uniform recovery policy: a store failure is
//! logged and the operation yields its empty/default value instead of
//! propagating the error. Callers of a service never handle store errors.
//!
//! # Example
//!
//! ```ignore
//! use restash_core::service::Service;
//!
//! let service = Service::new(store);
//! let page = service.get_page(None).await;          // Vec<Person>, empty on failure
//! let one = service.get(42).await;                  // Option<Person>
//! let hits = service.search("ali", &["name"], None).await;
//! ```

use std::{marker::PhantomData, sync::Arc};

use serde_json::Value;

use crate::{
    entity::Entity,
    error::StoreResult,
    paging::PagingInfo,
    store::{DataStore, ReadOnlyDataStore},
};

/// A service over an `Arc`'d store trait object, for runtime backend selection.
pub type SharedService<T> = Service<T, Arc<dyn DataStore<T>>>;

/// A read-only service over an `Arc`'d store trait object.
pub type SharedReadOnlyService<T> = ReadOnlyService<T, Arc<dyn ReadOnlyDataStore<T>>>;

/// Generic CRUD service for one entity type.
///
/// The service delegates each operation to its store and applies the shared
/// recovery policy on failure. Search requests are additionally filtered
/// against the entity's declared [`searchable_fields`](Entity::searchable_fields)
/// before they reach the store.
///
/// # Type Parameters
///
/// * `T` - The entity type served
/// * `S` - The store implementation (a concrete store, a reference, or an
///   `Arc<dyn DataStore<T>>`)
#[derive(Debug, Clone)]
pub struct Service<T: Entity, S: DataStore<T>> {
    store: S,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, S: DataStore<T>> Service<T, S> {
    /// Creates a new service over the given store.
    pub fn new(store: S) -> Self {
        Self { store, _entity: PhantomData }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Retrieves a single entity by id.
    ///
    /// Returns `None` when the entity does not exist or the store fails.
    pub async fn get(&self, id: i64) -> Option<T> {
        recover::<T, _>("get", self.store.get(id).await)
    }

    /// Retrieves one page of entities.
    ///
    /// `None` paging selects the first page with the default page size.
    /// Returns an empty vec when the store fails.
    pub async fn get_page(&self, paging: impl Into<Option<PagingInfo>>) -> Vec<T> {
        let paging = paging.into().unwrap_or_default();
        recover::<T, _>("get_page", self.store.get_page(paging).await)
    }

    /// Retrieves one page of the entities whose named field equals `value`.
    ///
    /// Returns an empty vec when the field is unknown or the store fails.
    pub async fn get_by(
        &self,
        field: &str,
        value: impl Into<Value>,
        paging: impl Into<Option<PagingInfo>>,
    ) -> Vec<T> {
        let paging = paging.into().unwrap_or_default();
        recover::<T, _>(
            "get_by",
            self.store
                .get_by(field, value.into(), paging)
                .await,
        )
    }

    /// Searches the named fields for a case-insensitive substring match.
    ///
    /// Requested fields that the entity has not declared searchable are
    /// silently dropped; an empty `fields` slice selects every declared
    /// searchable field. If nothing remains to search, the result is empty
    /// without consulting the store.
    pub async fn search(
        &self,
        query: &str,
        fields: &[&str],
        paging: impl Into<Option<PagingInfo>>,
    ) -> Vec<T> {
        let paging = paging.into().unwrap_or_default();
        let selected = searchable_subset::<T>(fields);
        if selected.is_empty() {
            return Vec::new();
        }

        recover::<T, _>(
            "search",
            self.store
                .search(query, &selected, paging)
                .await,
        )
    }

    /// Inserts or replaces a single entity.
    ///
    /// Returns the stored entity, or `T::default()` when the store fails.
    pub async fn upsert(&self, item: T) -> T {
        recover::<T, _>("upsert", self.store.upsert(item).await)
    }

    /// Inserts or replaces a batch of entities.
    ///
    /// Returns the stored entities, or an empty vec when the store fails.
    pub async fn upsert_many(&self, items: Vec<T>) -> Vec<T> {
        recover::<T, _>("upsert_many", self.store.upsert_many(items).await)
    }

    /// Deletes the entity with the given id.
    ///
    /// Returns `true` only when an entity was actually deleted.
    pub async fn delete(&self, id: i64) -> bool {
        recover::<T, _>("delete", self.store.delete(id).await)
    }
}

/// Generic read-only service for one entity type.
///
/// The retrieval half of [`Service`], usable over any
/// [`ReadOnlyDataStore`] - including a full store, since every
/// [`DataStore`] is also a read-only one.
#[derive(Debug, Clone)]
pub struct ReadOnlyService<T: Entity, S: ReadOnlyDataStore<T>> {
    store: S,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, S: ReadOnlyDataStore<T>> ReadOnlyService<T, S> {
    /// Creates a new read-only service over the given store.
    pub fn new(store: S) -> Self {
        Self { store, _entity: PhantomData }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Retrieves a single entity by id.
    ///
    /// Returns `None` when the entity does not exist or the store fails.
    pub async fn get(&self, id: i64) -> Option<T> {
        recover::<T, _>("get", self.store.get(id).await)
    }

    /// Retrieves one page of entities.
    pub async fn get_page(&self, paging: impl Into<Option<PagingInfo>>) -> Vec<T> {
        let paging = paging.into().unwrap_or_default();
        recover::<T, _>("get_page", self.store.get_page(paging).await)
    }

    /// Retrieves one page of the entities whose named field equals `value`.
    pub async fn get_by(
        &self,
        field: &str,
        value: impl Into<Value>,
        paging: impl Into<Option<PagingInfo>>,
    ) -> Vec<T> {
        let paging = paging.into().unwrap_or_default();
        recover::<T, _>(
            "get_by",
            self.store
                .get_by(field, value.into(), paging)
                .await,
        )
    }
}

/// The uniform recovery policy: log the failure, return the default.
fn recover<T: Entity, U: Default>(operation: &str, result: StoreResult<U>) -> U {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(
                entity = T::table_name(),
                operation,
                error = %err,
                "store operation failed, returning default",
            );
            U::default()
        }
    }
}

/// Intersects requested field names with the entity's declared searchable set.
fn searchable_subset<T: Entity>(fields: &[&str]) -> Vec<String> {
    let declared = T::searchable_fields();
    if fields.is_empty() {
        return declared.iter().map(|f| (*f).to_string()).collect();
    }

    fields
        .iter()
        .copied()
        .filter(|field| declared.contains(field))
        .map(|field| field.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::StoreError, fields};
    use async_trait::async_trait;
    use serde::{Deserialize, Serialize};
    use std::{collections::BTreeMap, sync::Mutex};

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    struct Person {
        id: i64,
        name: String,
        email: String,
    }

    impl Entity for Person {
        fn id(&self) -> i64 {
            self.id
        }

        fn table_name() -> &'static str {
            "people"
        }

        fn searchable_fields() -> &'static [&'static str] {
            &["name"]
        }
    }

    fn person(id: i64, name: &str, email: &str) -> Person {
        Person { id, name: name.into(), email: email.into() }
    }

    /// Minimal honest store for exercising the service wiring.
    #[derive(Debug, Default)]
    struct VecStore {
        rows: Mutex<BTreeMap<i64, Person>>,
    }

    #[async_trait]
    impl ReadOnlyDataStore<Person> for VecStore {
        async fn get(&self, id: i64) -> StoreResult<Option<Person>> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn get_page(&self, paging: PagingInfo) -> StoreResult<Vec<Person>> {
            let rows: Vec<_> = self.rows.lock().unwrap().values().cloned().collect();
            Ok(paging.paginate(rows))
        }

        async fn get_by(
            &self,
            field: &str,
            value: Value,
            paging: PagingInfo,
        ) -> StoreResult<Vec<Person>> {
            let rows: Vec<_> = self.rows.lock().unwrap().values().cloned().collect();
            let mut hits = Vec::new();
            for row in rows {
                if fields::field_matches(&row, field, &value)? {
                    hits.push(row);
                }
            }
            Ok(paging.paginate(hits))
        }

        async fn search(
            &self,
            query: &str,
            fields: &[String],
            paging: PagingInfo,
        ) -> StoreResult<Vec<Person>> {
            let rows: Vec<_> = self.rows.lock().unwrap().values().cloned().collect();
            let mut hits = Vec::new();
            for row in rows {
                for field in fields {
                    if crate::fields::field_contains(&row, field, query)? {
                        hits.push(row.clone());
                        break;
                    }
                }
            }
            Ok(paging.paginate(hits))
        }
    }

    #[async_trait]
    impl DataStore<Person> for VecStore {
        async fn upsert(&self, item: Person) -> StoreResult<Person> {
            self.rows
                .lock()
                .unwrap()
                .insert(item.id, item.clone());
            Ok(item)
        }

        async fn upsert_many(&self, items: Vec<Person>) -> StoreResult<Vec<Person>> {
            let mut rows = self.rows.lock().unwrap();
            for item in &items {
                rows.insert(item.id, item.clone());
            }
            Ok(items)
        }

        async fn delete(&self, id: i64) -> StoreResult<bool> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }

    /// A store whose every operation fails.
    #[derive(Debug, Default)]
    struct BrokenStore;

    #[async_trait]
    impl ReadOnlyDataStore<Person> for BrokenStore {
        async fn get(&self, _id: i64) -> StoreResult<Option<Person>> {
            Err(StoreError::Backend("down".into()))
        }

        async fn get_page(&self, _paging: PagingInfo) -> StoreResult<Vec<Person>> {
            Err(StoreError::Backend("down".into()))
        }

        async fn get_by(
            &self,
            _field: &str,
            _value: Value,
            _paging: PagingInfo,
        ) -> StoreResult<Vec<Person>> {
            Err(StoreError::Backend("down".into()))
        }

        async fn search(
            &self,
            _query: &str,
            _fields: &[String],
            _paging: PagingInfo,
        ) -> StoreResult<Vec<Person>> {
            Err(StoreError::Backend("down".into()))
        }
    }

    #[async_trait]
    impl DataStore<Person> for BrokenStore {
        async fn upsert(&self, _item: Person) -> StoreResult<Person> {
            Err(StoreError::Backend("down".into()))
        }

        async fn upsert_many(&self, _items: Vec<Person>) -> StoreResult<Vec<Person>> {
            Err(StoreError::Backend("down".into()))
        }

        async fn delete(&self, _id: i64) -> StoreResult<bool> {
            Err(StoreError::Backend("down".into()))
        }
    }

    #[tokio::test]
    async fn round_trips_through_the_store() {
        let service = Service::new(VecStore::default());
        service
            .upsert_many(vec![
                person(1, "Alice", "alice@example.com"),
                person(2, "Bob", "bob@example.com"),
            ])
            .await;

        assert_eq!(service.get(1).await.unwrap().name, "Alice");
        assert_eq!(service.get_page(None).await.len(), 2);
        assert!(service.delete(2).await);
        assert!(!service.delete(2).await);
        assert_eq!(service.get(2).await, None);
    }

    #[tokio::test]
    async fn get_by_coerces_route_values() {
        let service = Service::new(VecStore::default());
        service
            .upsert(person(5, "Carol", "carol@example.com"))
            .await;

        let hits = service.get_by("id", "5", None).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Carol");
    }

    #[tokio::test]
    async fn search_drops_undeclared_fields() {
        let service = Service::new(VecStore::default());
        service
            .upsert_many(vec![
                person(1, "Alice", "alice@example.com"),
                person(2, "Bob", "alice-fan@example.com"),
            ])
            .await;

        // "email" is not declared searchable, so only "name" is consulted.
        let hits = service
            .search("alice", &["name", "email"], None)
            .await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        // Nothing searchable requested at all -> empty, store untouched.
        let none = service.search("alice", &["email"], None).await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn empty_field_list_selects_all_searchable() {
        let service = Service::new(VecStore::default());
        service
            .upsert(person(1, "Alice", "alice@example.com"))
            .await;

        let hits = service.search("ali", &[], None).await;
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn failures_recover_to_defaults() {
        let service = Service::new(BrokenStore);

        assert_eq!(service.get(1).await, None);
        assert!(service.get_page(None).await.is_empty());
        assert!(service.get_by("name", "x", None).await.is_empty());
        assert!(service.search("x", &["name"], None).await.is_empty());
        assert_eq!(service.upsert(person(1, "A", "a@x")).await, Person::default());
        assert!(service.upsert_many(vec![person(1, "A", "a@x")]).await.is_empty());
        assert!(!service.delete(1).await);
    }

    #[tokio::test]
    async fn shared_service_over_trait_object() {
        let store: Arc<dyn DataStore<Person>> = Arc::new(VecStore::default());
        let service: SharedService<Person> = Service::new(store);
        service
            .upsert(person(9, "Dora", "dora@example.com"))
            .await;
        assert_eq!(service.get(9).await.unwrap().name, "Dora");
    }

    #[tokio::test]
    async fn read_only_service_over_full_store() {
        let store = Arc::new(VecStore::default());
        Service::new(store.clone())
            .upsert(person(3, "Eve", "eve@example.com"))
            .await;

        let reader = ReadOnlyService::new(store);
        assert_eq!(reader.get(3).await.unwrap().name, "Eve");
        assert_eq!(reader.get_by("name", "Eve", None).await.len(), 1);
    }
}

//! Router construction for entity resources.

use std::sync::Arc;

use axum::{Router, routing::get};

use restash_core::{entity::Entity, service::Service, store::DataStore};

use crate::handler;

/// Builds the REST surface for one entity type over the given service.
///
/// The routes live under `/{table_name}`:
///
/// | route                         | verb   | behavior                         |
/// |-------------------------------|--------|----------------------------------|
/// | `/{table}`                    | GET    | one page of entities             |
/// | `/{table}`                    | PUT    | upsert a JSON array of entities  |
/// | `/{table}?id=`                | DELETE | delete one entity                |
/// | `/{table}/find/{field}/{value}` | GET  | field-equality lookup            |
/// | `/{table}/search`             | GET    | substring search                 |
///
/// Routers for several entity types compose with [`Router::merge`]:
///
/// ```ignore
/// let app = resource_router(people_service).merge(resource_router(posts_service));
/// ```
pub fn resource_router<T, S>(service: Service<T, S>) -> Router
where
    T: Entity,
    S: DataStore<T> + 'static,
{
    let state = Arc::new(service);
    let base = format!("/{}", T::table_name());

    Router::new()
        .route(
            &base,
            get(handler::get_page::<T, S>)
                .put(handler::upsert::<T, S>)
                .delete(handler::delete_entity::<T, S>),
        )
        .route(
            &format!("{base}/find/:field/:value"),
            get(handler::find::<T, S>),
        )
        .route(&format!("{base}/search"), get(handler::search::<T, S>))
        .with_state(state)
}

/// Builds resource routers for read-only use by dropping the mutating verbs.
///
/// Same paths as [`resource_router`], `GET` only.
pub fn read_only_resource_router<T, S>(service: Service<T, S>) -> Router
where
    T: Entity,
    S: DataStore<T> + 'static,
{
    let state = Arc::new(service);
    let base = format!("/{}", T::table_name());

    Router::new()
        .route(&base, get(handler::get_page::<T, S>))
        .route(
            &format!("{base}/find/:field/:value"),
            get(handler::find::<T, S>),
        )
        .route(&format!("{base}/search"), get(handler::search::<T, S>))
        .with_state(state)
}

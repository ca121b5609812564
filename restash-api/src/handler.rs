//! Generic request handlers for one entity resource.
//!
//! Each handler delegates to the shared [`Service`]; the service's recovery
//! policy means read handlers always answer `200` with a (possibly empty)
//! JSON array. Only the mutating routes signal failure through status codes.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use restash_core::{
    entity::Entity,
    paging::{DEFAULT_PAGE_SIZE, PagingInfo},
    service::Service,
    store::DataStore,
};

/// Paging query parameters (`?page=&pageSize=`).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageQuery {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 0, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl From<PageQuery> for PagingInfo {
    fn from(query: PageQuery) -> Self {
        PagingInfo::new(query.page, query.page_size)
    }
}

/// Search query parameters (`?q=&fields=&page=&pageSize=`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchQuery {
    pub q: Option<String>,
    /// Comma-separated field names; empty means every searchable field.
    pub fields: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            q: None,
            fields: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Delete query parameters (`?id=`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteQuery {
    pub id: i64,
}

/// `GET /{table}` - one page of entities.
pub async fn get_page<T, S>(
    State(service): State<Arc<Service<T, S>>>,
    Query(paging): Query<PageQuery>,
) -> Json<Vec<T>>
where
    T: Entity,
    S: DataStore<T> + 'static,
{
    Json(service.get_page(PagingInfo::from(paging)).await)
}

/// `GET /{table}/find/{field}/{value}` - entities whose field equals the value.
pub async fn find<T, S>(
    State(service): State<Arc<Service<T, S>>>,
    Path((field, value)): Path<(String, String)>,
    Query(paging): Query<PageQuery>,
) -> Json<Vec<T>>
where
    T: Entity,
    S: DataStore<T> + 'static,
{
    Json(
        service
            .get_by(&field, value, PagingInfo::from(paging))
            .await,
    )
}

/// `GET /{table}/search` - substring search over searchable fields.
///
/// Without a `q` parameter this falls back to plain paging.
pub async fn search<T, S>(
    State(service): State<Arc<Service<T, S>>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<T>>
where
    T: Entity,
    S: DataStore<T> + 'static,
{
    let paging = PagingInfo::new(query.page, query.page_size);

    let Some(needle) = query.q else {
        return Json(service.get_page(paging).await);
    };

    let fields: Vec<&str> = query
        .fields
        .as_deref()
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Json(service.search(&needle, &fields, paging).await)
}

/// `PUT /{table}` - upsert a batch of entities.
///
/// An empty body is rejected with `400`.
pub async fn upsert<T, S>(
    State(service): State<Arc<Service<T, S>>>,
    Json(items): Json<Vec<T>>,
) -> Response
where
    T: Entity,
    S: DataStore<T> + 'static,
{
    if items.is_empty() {
        return (StatusCode::BAD_REQUEST, "Invalid item passed").into_response();
    }

    Json(service.upsert_many(items).await).into_response()
}

/// `DELETE /{table}?id=` - delete one entity.
///
/// Answers `400` when nothing was deleted.
pub async fn delete_entity<T, S>(
    State(service): State<Arc<Service<T, S>>>,
    Query(query): Query<DeleteQuery>,
) -> Response
where
    T: Entity,
    S: DataStore<T> + 'static,
{
    if service.delete(query.id).await {
        Json(true).into_response()
    } else {
        StatusCode::BAD_REQUEST.into_response()
    }
}

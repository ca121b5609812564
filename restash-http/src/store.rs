//! HTTP-client store implementation.

use std::{fmt, marker::PhantomData};

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use restash_core::{
    entity::Entity,
    error::{StoreError, StoreResult},
    fields::display_value,
    paging::PagingInfo,
    store::{DataStore, ReadOnlyDataStore, StoreBuilder},
};

/// An entity store backed by a remote restash resource router.
///
/// Each trait method issues exactly one HTTP request; the resource path is the
/// entity's [`table_name`](Entity::table_name). Responses are plain JSON
/// arrays of entities.
///
/// Single-entity lookup reuses the field-equality route (`find/id/{id}` with a
/// page size of one), so the entity's identifier must serialize under the
/// `"id"` key.
///
/// # Example
///
/// ```ignore
/// let store = HttpStore::<Person>::builder("http://localhost:8080")
///     .build()
///     .await?;
/// let page = store.get_page(PagingInfo::default()).await?;
/// ```
#[derive(Clone)]
pub struct HttpStore<T: Entity> {
    client: Client,
    base_url: Url,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> HttpStore<T> {
    /// Creates a new store from a preconfigured client and a parsed base URL.
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url, _entity: PhantomData }
    }

    /// Creates a builder for constructing an `HttpStore`.
    pub fn builder(base_url: &str) -> HttpStoreBuilder<T> {
        HttpStoreBuilder::new(base_url)
    }

    /// Returns the base URL this store talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/{table}/{segments...}`, percent-encoding each segment.
    pub(crate) fn resource_url(&self, segments: &[&str]) -> StoreResult<Url> {
        let mut url = self.base_url.clone();

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| StoreError::Initialization("base URL cannot be a base".into()))?;
            path.pop_if_empty();
            path.push(T::table_name());
            for segment in segments {
                path.push(segment);
            }
        }

        Ok(url)
    }

    fn with_paging(mut url: Url, paging: PagingInfo) -> Url {
        url.query_pairs_mut()
            .append_pair("page", &paging.page.to_string())
            .append_pair("pageSize", &paging.page_size.to_string());
        url
    }

    async fn fetch<U: DeserializeOwned>(&self, url: Url) -> StoreResult<U> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| StoreError::Transport(err.to_string()))?;

        read_json(response).await
    }
}

impl<T: Entity> fmt::Debug for HttpStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpStore")
            .field("table", &T::table_name())
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Entity> ReadOnlyDataStore<T> for HttpStore<T> {
    async fn get(&self, id: i64) -> StoreResult<Option<T>> {
        let url = Self::with_paging(
            self.resource_url(&["find", "id", &id.to_string()])?,
            PagingInfo::new(0, 1),
        );

        let items: Vec<T> = self.fetch(url).await?;
        Ok(items.into_iter().next())
    }

    async fn get_page(&self, paging: PagingInfo) -> StoreResult<Vec<T>> {
        let url = Self::with_paging(self.resource_url(&[])?, paging);
        self.fetch(url).await
    }

    async fn get_by(&self, field: &str, value: Value, paging: PagingInfo) -> StoreResult<Vec<T>> {
        let url = Self::with_paging(
            self.resource_url(&["find", field, &display_value(&value)])?,
            paging,
        );
        self.fetch(url).await
    }

    async fn search(
        &self,
        query: &str,
        fields: &[String],
        paging: PagingInfo,
    ) -> StoreResult<Vec<T>> {
        // The search route treats an absent field list as "all searchable
        // fields"; an explicitly empty selection never leaves the client.
        if fields.is_empty() {
            return Ok(Vec::new());
        }

        let mut url = Self::with_paging(self.resource_url(&["search"])?, paging);
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("fields", &fields.join(","));

        self.fetch(url).await
    }
}

#[async_trait]
impl<T: Entity> DataStore<T> for HttpStore<T> {
    async fn upsert(&self, item: T) -> StoreResult<T> {
        let stored = self.upsert_many(vec![item]).await?;

        stored
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Transport("empty upsert response".into()))
    }

    async fn upsert_many(&self, items: Vec<T>) -> StoreResult<Vec<T>> {
        let url = self.resource_url(&[])?;
        let response = self
            .client
            .put(url)
            .json(&items)
            .send()
            .await
            .map_err(|err| StoreError::Transport(err.to_string()))?;

        read_json(response).await
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut url = self.resource_url(&[])?;
        url.query_pairs_mut()
            .append_pair("id", &id.to_string());

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|err| StoreError::Transport(err.to_string()))?;

        Ok(response.status().is_success())
    }
}

/// Checks the status and decodes the JSON body.
async fn read_json<U: DeserializeOwned>(response: Response) -> StoreResult<U> {
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    response
        .json()
        .await
        .map_err(|err| StoreError::Transport(err.to_string()))
}

/// Builder for constructing [`HttpStore`] instances.
///
/// # Example
///
/// ```ignore
/// let store = HttpStore::<Person>::builder("http://localhost:8080")
///     .with_client(custom_client)
///     .build()
///     .await?;
/// ```
pub struct HttpStoreBuilder<T: Entity> {
    base_url: String,
    client: Option<Client>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> HttpStoreBuilder<T> {
    /// Creates a new builder for the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: None,
            _entity: PhantomData,
        }
    }

    /// Uses a preconfigured `reqwest` client instead of a default one.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
}

#[async_trait]
impl<T: Entity> StoreBuilder for HttpStoreBuilder<T> {
    type Store = HttpStore<T>;

    async fn build(self) -> StoreResult<Self::Store> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|err| StoreError::Initialization(err.to_string()))?;

        Ok(HttpStore::new(
            self.client.unwrap_or_default(),
            base_url,
        ))
    }
}

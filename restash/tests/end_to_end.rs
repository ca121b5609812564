//! Client/server round trip: a service over the in-memory store is mounted as
//! a REST resource, and a second service over the HTTP store consumes it.

use restash::{
    Entity,
    api::resource_router,
    http::HttpStore,
    memory::MemoryStore,
    prelude::*,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Entity)]
#[entity(table = "posts")]
struct Post {
    #[entity(id)]
    id: i64,
    #[entity(searchable)]
    title: String,
    views: i64,
}

fn post(id: i64, title: &str, views: i64) -> Post {
    Post { id, title: title.into(), views }
}

async fn remote_service() -> Service<Post, HttpStore<Post>> {
    let app = resource_router(Service::new(MemoryStore::<Post>::new()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let store = HttpStore::<Post>::builder(&format!("http://{addr}"))
        .build()
        .await
        .unwrap();
    Service::new(store)
}

#[tokio::test]
async fn crud_through_the_wire() {
    let service = remote_service().await;

    let stored = service
        .upsert_many(vec![
            post(1, "Skip and take", 10),
            post(2, "Substring search", 25),
            post(3, "Skipping stones", 3),
        ])
        .await;
    assert_eq!(stored.len(), 3);

    assert_eq!(service.get(2).await.unwrap().title, "Substring search");
    assert_eq!(service.get(99).await, None);

    let page = service.get_page(PagingInfo::new(0, 2)).await;
    assert_eq!(page.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

    let ten_views = service.get_by("views", "10", None).await;
    assert_eq!(ten_views.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);

    let hits = service.search("skip", &[], None).await;
    assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

    assert!(service.delete(1).await);
    assert!(!service.delete(1).await);
    assert_eq!(service.get_page(None).await.len(), 2);
}

#[tokio::test]
async fn unreachable_server_recovers_to_defaults() {
    // Nothing is listening here; every call degrades to its empty value.
    let store = HttpStore::<Post>::builder("http://127.0.0.1:9")
        .build()
        .await
        .unwrap();
    let service = Service::new(store);

    assert_eq!(service.get(1).await, None);
    assert!(service.get_page(None).await.is_empty());
    assert!(!service.delete(1).await);
}

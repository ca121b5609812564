//! End-to-end CRUD behavior through the facade: derive an entity, stand up a
//! service over the in-memory store, and exercise every operation.

use restash::{Entity, memory::MemoryStore, prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Entity)]
#[entity(table = "people")]
struct Person {
    #[entity(id)]
    id: i64,
    #[entity(searchable)]
    name: String,
    #[entity(searchable)]
    email: String,
    age: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Entity)]
struct Widget {
    #[entity(id)]
    id: i64,
    label: String,
}

fn person(id: i64, name: &str, email: &str, age: i64) -> Person {
    Person { id, name: name.into(), email: email.into(), age }
}

fn service() -> Service<Person, MemoryStore<Person>> {
    Service::new(MemoryStore::new())
}

#[test]
fn derive_fills_in_the_entity_surface() {
    assert_eq!(Person::table_name(), "people");
    assert_eq!(Person::searchable_fields(), &["name", "email"]);
    assert_eq!(person(4, "Dan", "dan@example.com", 41).id(), 4);

    // Without #[entity(table = ...)] the struct name is the table name,
    // and nothing is searchable unless marked.
    assert_eq!(Widget::table_name(), "Widget");
    assert!(Widget::searchable_fields().is_empty());
}

#[tokio::test]
async fn upsert_get_delete_round_trip() {
    let service = service();

    service
        .upsert_many(vec![
            person(1, "Alice", "alice@example.com", 30),
            person(2, "Bob", "bob@example.com", 35),
        ])
        .await;

    assert_eq!(service.get(1).await.unwrap().name, "Alice");
    assert_eq!(service.get_page(None).await.len(), 2);

    // Replacing by id keeps a single row.
    service.upsert(person(2, "Robert", "bob@example.com", 36)).await;
    assert_eq!(service.get_page(None).await.len(), 2);
    assert_eq!(service.get(2).await.unwrap().name, "Robert");

    assert!(service.delete(1).await);
    assert_eq!(service.get(1).await, None);
}

#[tokio::test]
async fn paging_slices_the_result_set() {
    let service = service();
    let people: Vec<Person> = (1..=25)
        .map(|id| person(id, &format!("p{id}"), &format!("p{id}@example.com"), 20))
        .collect();
    service.upsert_many(people).await;

    let page = service
        .get_page(PagingInfo::new(2, 10))
        .await;
    assert_eq!(page.first().unwrap().id, 21);
    assert_eq!(page.len(), 5);
}

#[tokio::test]
async fn lookup_and_search_use_serialized_field_names() {
    let service = service();
    service
        .upsert_many(vec![
            person(1, "Alice", "alice@example.com", 30),
            person(2, "Bob", "alice-fan@example.com", 30),
            person(3, "Carol", "carol@example.com", 41),
        ])
        .await;

    let thirty = service.get_by("age", "30", None).await;
    assert_eq!(thirty.len(), 2);

    // Both name and email are searchable; "alice" hits one of each.
    let hits = service.search("ALICE", &[], None).await;
    assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

    // Restricting the fields narrows the result.
    let hits = service.search("alice", &["name"], None).await;
    assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);

    // "age" is not searchable; asking only for it yields nothing.
    assert!(service.search("30", &["age"], None).await.is_empty());
}

//! Tests for the in-memory list store adapter.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rstest::rstest;

use super::*;
use crate::domain::{ItemTitle, ListName, MemberName, Quantity, UserId};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().expect("valid instant")
}

fn draft(name: &str, owner: &str, archived: bool, at_secs: i64) -> ListDraft {
    let created = at(at_secs);
    let owner_id = UserId::new(owner).expect("valid owner id");
    ListDraft {
        name: ListName::new(name).expect("valid name"),
        owner_id: owner_id.clone(),
        archived,
        created_at: created,
        updated_at: created,
        members: vec![Member::owner(
            owner_id,
            MemberName::new("Alex").expect("valid member name"),
            created,
        )],
        items: vec![],
    }
}

fn item(id: i64, title: &str, at_secs: i64) -> Item {
    Item::new(
        ItemId::new(id),
        ItemTitle::new(title).expect("valid title"),
        Quantity::DEFAULT,
        at(at_secs),
    )
}

#[tokio::test]
async fn insert_assigns_a_native_key_and_stores_the_document() {
    let store = InMemoryListStore::new();
    let stored = store
        .insert(draft("Groceries", "user-1", false, 100))
        .await
        .expect("insert succeeds");

    let found = store
        .find_one(stored.id())
        .await
        .expect("lookup succeeds")
        .expect("document present");
    assert_eq!(found, stored);
}

#[tokio::test]
async fn find_one_misses_unknown_identifiers() {
    let store = InMemoryListStore::new();
    let found = store
        .find_one(&ListId::resolve("invalid-id-format"))
        .await
        .expect("lookup succeeds");
    assert!(found.is_none());
}

#[rstest]
#[case(None, 3)]
#[case(Some(true), 1)]
#[case(Some(false), 2)]
#[tokio::test]
async fn find_many_honors_the_tri_state_filter(
    #[case] archived: Option<bool>,
    #[case] expected: usize,
) {
    let store = InMemoryListStore::new();
    for (name, flag) in [
        ("Groceries", false),
        ("Hardware Store", false),
        ("Party Supplies", true),
    ] {
        store
            .insert(draft(name, "user-1", flag, 100))
            .await
            .expect("insert succeeds");
    }

    let listed = store
        .find_many(ListFilter::from_archived(archived))
        .await
        .expect("list succeeds");
    assert_eq!(listed.len(), expected);
    if let Some(flag) = archived {
        assert!(listed.iter().all(|list| list.archived() == flag));
    }
}

#[tokio::test]
async fn find_many_orders_by_most_recent_update() {
    let store = InMemoryListStore::new();
    let older = store
        .insert(draft("Older", "user-1", false, 100))
        .await
        .expect("insert succeeds");
    let newer = store
        .insert(draft("Newer", "user-1", false, 200))
        .await
        .expect("insert succeeds");

    let listed = store
        .find_many(ListFilter::default())
        .await
        .expect("list succeeds");
    assert_eq!(listed[0].id(), newer.id());
    assert_eq!(listed[1].id(), older.id());

    // Touching the older list moves it to the front.
    store
        .set_archived(older.id(), false, at(300))
        .await
        .expect("update succeeds");
    let listed = store
        .find_many(ListFilter::default())
        .await
        .expect("list succeeds");
    assert_eq!(listed[0].id(), older.id());
}

#[tokio::test]
async fn set_archived_updates_flag_and_timestamp() {
    let store = InMemoryListStore::new();
    let stored = store
        .insert(draft("Groceries", "user-1", false, 100))
        .await
        .expect("insert succeeds");

    let matched = store
        .set_archived(stored.id(), true, at(200))
        .await
        .expect("update succeeds");
    assert!(matched);

    let found = store
        .find_one(stored.id())
        .await
        .expect("lookup succeeds")
        .expect("document present");
    assert!(found.archived());
    assert_eq!(found.updated_at(), at(200));
}

#[tokio::test]
async fn mutations_against_unknown_lists_report_zero_matches() {
    let store = InMemoryListStore::new();
    let id = ListId::resolve("gone");

    assert!(
        !store
            .set_archived(&id, true, at(100))
            .await
            .expect("update succeeds")
    );
    assert!(
        !store
            .push_item(&id, item(1, "Milk", 100), at(100))
            .await
            .expect("update succeeds")
    );
    assert!(
        !store
            .pull_item(&id, ItemId::new(1), at(100))
            .await
            .expect("update succeeds")
    );
    assert!(
        !store
            .pull_member(&id, "user-2", at(100))
            .await
            .expect("update succeeds")
    );
    assert!(!store.delete_one(&id).await.expect("delete succeeds"));
    assert!(
        store
            .set_item_completed(&id, ItemId::new(1), true, at(100))
            .await
            .expect("update succeeds")
            .is_none()
    );
}

#[tokio::test]
async fn item_lifecycle_restores_the_sequence() {
    let store = InMemoryListStore::new();
    let stored = store
        .insert(draft("Groceries", "user-1", false, 100))
        .await
        .expect("insert succeeds");

    store
        .push_item(stored.id(), item(1, "Milk", 150), at(150))
        .await
        .expect("push succeeds");

    let updated = store
        .set_item_completed(stored.id(), ItemId::new(1), true, at(200))
        .await
        .expect("toggle succeeds")
        .expect("item matched");
    assert!(updated.is_completed());

    store
        .pull_item(stored.id(), ItemId::new(1), at(250))
        .await
        .expect("pull succeeds");

    let found = store
        .find_one(stored.id())
        .await
        .expect("lookup succeeds")
        .expect("document present");
    assert!(found.items().is_empty());
    assert_eq!(found.updated_at(), at(250));
}

#[tokio::test]
async fn pulling_an_absent_item_is_a_successful_no_op() {
    let store = InMemoryListStore::new();
    let stored = store
        .insert(draft("Groceries", "user-1", false, 100))
        .await
        .expect("insert succeeds");
    store
        .push_item(stored.id(), item(1, "Milk", 150), at(150))
        .await
        .expect("push succeeds");

    let matched = store
        .pull_item(stored.id(), ItemId::new(999), at(200))
        .await
        .expect("pull succeeds");
    assert!(matched);

    let found = store
        .find_one(stored.id())
        .await
        .expect("lookup succeeds")
        .expect("document present");
    assert_eq!(found.items().len(), 1);
}

#[tokio::test]
async fn member_lifecycle_pulls_by_identity() {
    let store = InMemoryListStore::new();
    let stored = store
        .insert(draft("Groceries", "user-1", false, 100))
        .await
        .expect("insert succeeds");

    let member = Member::joining(
        UserId::new("user-2").expect("valid id"),
        MemberName::new("Jane").expect("valid member name"),
        at(150),
    );
    store
        .push_member(stored.id(), member, at(150))
        .await
        .expect("push succeeds");

    store
        .pull_member(stored.id(), "user-2", at(200))
        .await
        .expect("pull succeeds");

    let found = store
        .find_one(stored.id())
        .await
        .expect("lookup succeeds")
        .expect("document present");
    assert_eq!(found.members().len(), 1);
    assert_eq!(found.members()[0].user_id().as_str(), "user-1");
}

#[tokio::test]
async fn delete_one_removes_the_aggregate_exactly_once() {
    let store = InMemoryListStore::new();
    let stored = store
        .insert(draft("Groceries", "user-1", false, 100))
        .await
        .expect("insert succeeds");

    assert!(store.delete_one(stored.id()).await.expect("first delete"));
    assert!(!store.delete_one(stored.id()).await.expect("second delete"));
}

#[tokio::test]
async fn concurrent_appends_to_one_list_lose_nothing() {
    let store = Arc::new(InMemoryListStore::new());
    let stored = store
        .insert(draft("Groceries", "user-1", false, 100))
        .await
        .expect("insert succeeds");

    let mut handles = Vec::new();
    for i in 0..50_i64 {
        let store = Arc::clone(&store);
        let id = stored.id().clone();
        handles.push(tokio::spawn(async move {
            store
                .push_item(&id, item(i, "Milk", 150), at(150))
                .await
                .expect("push succeeds")
        }));
    }
    for handle in handles {
        assert!(handle.await.expect("task completes"));
    }

    let found = store
        .find_one(stored.id())
        .await
        .expect("lookup succeeds")
        .expect("document present");
    assert_eq!(found.items().len(), 50);
}

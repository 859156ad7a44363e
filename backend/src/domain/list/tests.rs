//! Regression coverage for this module.

use chrono::{TimeZone, Utc};
use rstest::rstest;
use uuid::Uuid;

use super::*;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().expect("valid instant")
}

fn sample_list(at_secs: i64) -> ShoppingList {
    let created = at(at_secs);
    let owner = UserId::new("user-1").expect("valid owner id");
    ShoppingList::new(
        ListId::generate(),
        ListDraft {
            name: ListName::new("Groceries").expect("valid name"),
            owner_id: owner.clone(),
            archived: false,
            created_at: created,
            updated_at: created,
            members: vec![Member::owner(
                owner,
                MemberName::new("Alex").expect("valid member name"),
                created,
            )],
            items: vec![],
        },
    )
}

#[test]
fn resolve_normalizes_native_key_encoding() {
    let resolved = ListId::resolve("3FA85F64-5717-4562-B3FC-2C963F66AFA6");
    assert_eq!(resolved.as_str(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
}

#[test]
fn resolve_passes_legacy_ids_through_verbatim() {
    for raw in ["list-1", "invalid-id-format", "42"] {
        assert_eq!(ListId::resolve(raw).as_str(), raw);
    }
}

#[test]
fn generated_list_ids_are_native_keys() {
    let id = ListId::generate();
    assert!(Uuid::parse_str(id.as_str()).is_ok());
}

#[rstest]
#[case("", ListValidationError::EmptyUserId)]
#[case(" user-1", ListValidationError::PaddedUserId)]
#[case("user-1 ", ListValidationError::PaddedUserId)]
fn user_id_rejects_bad_input(#[case] raw: &str, #[case] expected: ListValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[test]
fn user_id_accepts_opaque_identities() {
    let id = UserId::new("user-1").expect("valid id");
    assert_eq!(id.as_str(), "user-1");
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_names_are_rejected(#[case] raw: &str) {
    assert_eq!(ListName::new(raw), Err(ListValidationError::EmptyListName));
    assert_eq!(ItemTitle::new(raw), Err(ListValidationError::EmptyItemTitle));
    assert_eq!(
        MemberName::new(raw),
        Err(ListValidationError::EmptyMemberName)
    );
}

#[rstest]
#[case(None, 1)]
#[case(Some(0), 1)]
#[case(Some(-3), 1)]
#[case(Some(1), 1)]
#[case(Some(100), 100)]
fn quantity_defaults_non_positive_input(#[case] requested: Option<i64>, #[case] expected: u32) {
    assert_eq!(Quantity::from_requested(requested).value(), expected);
}

#[test]
fn member_role_serializes_lowercase() {
    let owner = serde_json::to_value(MemberRole::Owner).expect("serializes");
    assert_eq!(owner, "owner");
    let member = serde_json::to_value(MemberRole::Member).expect("serializes");
    assert_eq!(member, "member");
}

#[test]
fn list_serializes_with_camel_case_wire_names() {
    let list = sample_list(100);
    let value = serde_json::to_value(&list).expect("serializes");
    assert_eq!(value["name"], "Groceries");
    assert_eq!(value["ownerId"], "user-1");
    assert_eq!(value["archived"], false);
    assert!(value["createdAt"].is_string());
    assert_eq!(value["members"][0]["role"], "owner");
    assert_eq!(value["items"], serde_json::json!([]));
}

#[test]
fn item_serializes_completion_flag_in_camel_case() {
    let item = Item::new(
        ItemId::new(7),
        ItemTitle::new("Milk").expect("valid title"),
        Quantity::from_requested(Some(2)),
        at(100),
    );
    let value = serde_json::to_value(&item).expect("serializes");
    assert_eq!(value["id"], 7);
    assert_eq!(value["title"], "Milk");
    assert_eq!(value["quantity"], 2);
    assert_eq!(value["isCompleted"], false);
}

#[test]
fn set_archived_bumps_updated_at_even_when_unchanged() {
    let mut list = sample_list(100);
    list.set_archived(false, at(200));
    assert!(!list.archived());
    assert_eq!(list.updated_at(), at(200));
}

#[test]
fn push_and_pull_item_restore_the_sequence() {
    let mut list = sample_list(100);
    let item = Item::new(
        ItemId::new(1),
        ItemTitle::new("Milk").expect("valid title"),
        Quantity::DEFAULT,
        at(150),
    );

    list.push_item(item, at(150));
    assert_eq!(list.items().len(), 1);
    assert_eq!(list.updated_at(), at(150));

    list.pull_item(ItemId::new(1), at(200));
    assert!(list.items().is_empty());
    assert_eq!(list.updated_at(), at(200));
}

#[test]
fn pull_item_with_absent_id_leaves_items_unchanged() {
    let mut list = sample_list(100);
    let item = Item::new(
        ItemId::new(1),
        ItemTitle::new("Milk").expect("valid title"),
        Quantity::DEFAULT,
        at(150),
    );
    list.push_item(item.clone(), at(150));

    list.pull_item(ItemId::new(999), at(200));
    assert_eq!(list.items(), &[item]);
}

#[test]
fn complete_item_updates_only_the_matching_entry() {
    let mut list = sample_list(100);
    for id in [1, 2] {
        list.push_item(
            Item::new(
                ItemId::new(id),
                ItemTitle::new("Milk").expect("valid title"),
                Quantity::DEFAULT,
                at(150),
            ),
            at(150),
        );
    }

    let updated = list
        .complete_item(ItemId::new(2), true, at(200))
        .expect("item matched");
    assert!(updated.is_completed());
    assert_eq!(updated.id(), ItemId::new(2));
    assert!(!list.items()[0].is_completed());
    assert_eq!(list.updated_at(), at(200));
}

#[test]
fn complete_item_without_match_leaves_the_aggregate_untouched() {
    let mut list = sample_list(100);
    assert!(list.complete_item(ItemId::new(9), true, at(200)).is_none());
    assert_eq!(list.updated_at(), at(100));
}

#[test]
fn pull_member_removes_by_identity() {
    let mut list = sample_list(100);
    let helper = UserId::new("user-2").expect("valid id");
    list.push_member(
        Member::joining(
            helper.clone(),
            MemberName::new("Jane").expect("valid member name"),
            at(150),
        ),
        at(150),
    );
    assert_eq!(list.members().len(), 2);

    list.pull_member(helper.as_str(), at(200));
    assert_eq!(list.members().len(), 1);
    assert_eq!(list.members()[0].role(), MemberRole::Owner);
}

#[rstest]
#[case(None, true, true)]
#[case(None, false, true)]
#[case(Some(true), true, true)]
#[case(Some(true), false, false)]
#[case(Some(false), false, true)]
#[case(Some(false), true, false)]
fn filter_matches_tri_state(
    #[case] filter: Option<bool>,
    #[case] archived: bool,
    #[case] expected: bool,
) {
    let mut list = sample_list(100);
    list.set_archived(archived, at(200));
    assert_eq!(ListFilter::from_archived(filter).matches(&list), expected);
}

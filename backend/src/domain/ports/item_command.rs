//! Driving port for embedded item mutations.
//!
//! None of these operations carry an ownership check; list absence is
//! discovered through zero-match mutations rather than a separate read.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Error, Item, ItemId, ItemTitle, ListId, Quantity};

/// Request to append an item to a list.
#[derive(Debug, Clone, PartialEq)]
pub struct AddItemRequest {
    /// External list identifier.
    pub list_id: String,
    /// Item title; required, validated by the service.
    pub title: Option<String>,
    /// Requested quantity; defaults to 1 when absent or non-positive.
    pub quantity: Option<i64>,
}

/// Request to set an item's completion flag.
#[derive(Debug, Clone, PartialEq)]
pub struct SetItemCompletedRequest {
    /// External list identifier.
    pub list_id: String,
    /// Item identifier within the list.
    pub item_id: i64,
    /// Desired completion value.
    pub done: bool,
}

/// Request to remove an item from a list.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveItemRequest {
    /// External list identifier.
    pub list_id: String,
    /// Item identifier within the list.
    pub item_id: i64,
}

/// Confirmation of a completed item removal.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveItemResponse {
    /// Internal identifier of the parent list.
    pub list_id: ListId,
    /// Identifier the pull targeted; the item may not have existed.
    pub item_id: ItemId,
}

/// Driving port for item write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemCommand: Send + Sync {
    /// Append a new item, assigning its identifier.
    ///
    /// Fails with `InvalidRequest` when the title is absent or blank and
    /// with `NotFound` when the list does not exist.
    async fn add_item(&self, request: AddItemRequest) -> Result<Item, Error>;

    /// Set one item's completion flag in a single positional update.
    ///
    /// Fails with `NotFound` when no list/item pair matches.
    async fn set_item_completed(&self, request: SetItemCompletedRequest) -> Result<Item, Error>;

    /// Remove an item; removing an absent item from an existing list
    /// succeeds.
    ///
    /// Fails with `NotFound` only when the list itself is absent.
    async fn remove_item(&self, request: RemoveItemRequest) -> Result<RemoveItemResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureItemCommand;

#[async_trait]
impl ItemCommand for FixtureItemCommand {
    async fn add_item(&self, request: AddItemRequest) -> Result<Item, Error> {
        let title = ItemTitle::new(request.title.unwrap_or_default())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let now = Utc::now();
        Ok(Item::new(
            ItemId::new(now.timestamp_millis()),
            title,
            Quantity::from_requested(request.quantity),
            now,
        ))
    }

    async fn set_item_completed(&self, request: SetItemCompletedRequest) -> Result<Item, Error> {
        Err(Error::not_found(format!(
            "item {} not found in list {}",
            request.item_id, request.list_id
        )))
    }

    async fn remove_item(&self, request: RemoveItemRequest) -> Result<RemoveItemResponse, Error> {
        Ok(RemoveItemResponse {
            list_id: ListId::resolve(&request.list_id),
            item_id: ItemId::new(request.item_id),
        })
    }
}

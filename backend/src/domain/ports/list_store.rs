//! Driven port for the shopping list document collection.
//!
//! One method per store primitive: find-one, filtered find-many, insert,
//! field-set update, array push/pull, positional matched-element update, and
//! delete. Every mutation targets exactly one aggregate document and must be
//! atomic with respect to concurrent operations on the same document, so two
//! concurrent item appends never lose one of the two items. Zero-match
//! mutations report `false` (or `None`) rather than failing, letting the
//! service translate them into not-found responses without a prior read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Item, ItemId, ListDraft, ListFilter, ListId, Member, ShoppingList};

use super::define_port_error;

define_port_error! {
    /// Errors raised by list store adapters.
    pub enum ListStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "list store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "list store query failed: {message}",
    }
}

/// Port for reading and mutating list aggregates, one document at a time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Find one aggregate by its internal identifier.
    async fn find_one(&self, id: &ListId) -> Result<Option<ShoppingList>, ListStoreError>;

    /// Find every aggregate satisfying the filter, most recently updated
    /// first.
    async fn find_many(&self, filter: ListFilter) -> Result<Vec<ShoppingList>, ListStoreError>;

    /// Persist a new aggregate, assigning its identifier.
    async fn insert(&self, draft: ListDraft) -> Result<ShoppingList, ListStoreError>;

    /// Set the archived flag and `updatedAt` on the matching aggregate.
    ///
    /// Returns whether a document matched.
    async fn set_archived(
        &self,
        id: &ListId,
        archived: bool,
        at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError>;

    /// Append an item to the matching aggregate, bumping `updatedAt`.
    ///
    /// Returns whether a document matched.
    async fn push_item(
        &self,
        id: &ListId,
        item: Item,
        at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError>;

    /// Set the completion flag of one matching item, bumping `updatedAt`.
    ///
    /// Positional update: only the matched element is rewritten. Returns the
    /// updated item, or `None` when no list/item pair matched.
    async fn set_item_completed(
        &self,
        id: &ListId,
        item_id: ItemId,
        done: bool,
        at: DateTime<Utc>,
    ) -> Result<Option<Item>, ListStoreError>;

    /// Pull every item with the given id, bumping `updatedAt`.
    ///
    /// Returns whether the *list* matched; pulling an absent item from an
    /// existing list is a successful no-op.
    async fn pull_item(
        &self,
        id: &ListId,
        item_id: ItemId,
        at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError>;

    /// Append a member to the matching aggregate, bumping `updatedAt`.
    ///
    /// Returns whether a document matched.
    async fn push_member(
        &self,
        id: &ListId,
        member: Member,
        at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError>;

    /// Pull every member with the given identity, bumping `updatedAt`.
    ///
    /// Returns whether the *list* matched; pulling an absent member is a
    /// successful no-op.
    async fn pull_member(
        &self,
        id: &ListId,
        member_id: &str,
        at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError>;

    /// Delete the matching aggregate and its embedded sequences.
    ///
    /// Returns whether a document was deleted.
    async fn delete_one(&self, id: &ListId) -> Result<bool, ListStoreError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureListStore;

#[async_trait]
impl ListStore for FixtureListStore {
    async fn find_one(&self, _id: &ListId) -> Result<Option<ShoppingList>, ListStoreError> {
        Ok(None)
    }

    async fn find_many(&self, _filter: ListFilter) -> Result<Vec<ShoppingList>, ListStoreError> {
        Ok(Vec::new())
    }

    async fn insert(&self, draft: ListDraft) -> Result<ShoppingList, ListStoreError> {
        Ok(ShoppingList::new(ListId::generate(), draft))
    }

    async fn set_archived(
        &self,
        _id: &ListId,
        _archived: bool,
        _at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError> {
        Ok(false)
    }

    async fn push_item(
        &self,
        _id: &ListId,
        _item: Item,
        _at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError> {
        Ok(false)
    }

    async fn set_item_completed(
        &self,
        _id: &ListId,
        _item_id: ItemId,
        _done: bool,
        _at: DateTime<Utc>,
    ) -> Result<Option<Item>, ListStoreError> {
        Ok(None)
    }

    async fn pull_item(
        &self,
        _id: &ListId,
        _item_id: ItemId,
        _at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError> {
        Ok(false)
    }

    async fn push_member(
        &self,
        _id: &ListId,
        _member: Member,
        _at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError> {
        Ok(false)
    }

    async fn pull_member(
        &self,
        _id: &ListId,
        _member_id: &str,
        _at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError> {
        Ok(false)
    }

    async fn delete_one(&self, _id: &ListId) -> Result<bool, ListStoreError> {
        Ok(false)
    }
}

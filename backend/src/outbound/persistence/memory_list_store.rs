//! In-memory list store adapter.
//!
//! Backs the [`ListStore`] port with a process-local document map. Every
//! operation takes the map lock for its whole duration, which gives the
//! document-level atomicity the port requires: two concurrent appends to the
//! same aggregate serialize instead of losing one, and a positional update
//! never interleaves with a pull of the same element. Nothing outside this
//! adapter holds list state between requests.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{ListStore, ListStoreError};
use crate::domain::{Item, ItemId, ListDraft, ListFilter, ListId, Member, ShoppingList};

/// Process-local document collection keyed by the internal identifier.
#[derive(Debug, Default)]
pub struct InMemoryListStore {
    documents: RwLock<HashMap<String, ShoppingList>>,
}

impl InMemoryListStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ShoppingList>> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ShoppingList>> {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ListStore for InMemoryListStore {
    async fn find_one(&self, id: &ListId) -> Result<Option<ShoppingList>, ListStoreError> {
        Ok(self.read().get(id.as_str()).cloned())
    }

    async fn find_many(&self, filter: ListFilter) -> Result<Vec<ShoppingList>, ListStoreError> {
        let mut lists: Vec<ShoppingList> = self
            .read()
            .values()
            .filter(|list| filter.matches(list))
            .cloned()
            .collect();
        lists.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
        Ok(lists)
    }

    async fn insert(&self, draft: ListDraft) -> Result<ShoppingList, ListStoreError> {
        let list = ShoppingList::new(ListId::generate(), draft);
        self.write()
            .insert(list.id().as_str().to_owned(), list.clone());
        Ok(list)
    }

    async fn set_archived(
        &self,
        id: &ListId,
        archived: bool,
        at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError> {
        let mut documents = self.write();
        match documents.get_mut(id.as_str()) {
            Some(list) => {
                list.set_archived(archived, at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn push_item(
        &self,
        id: &ListId,
        item: Item,
        at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError> {
        let mut documents = self.write();
        match documents.get_mut(id.as_str()) {
            Some(list) => {
                list.push_item(item, at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_item_completed(
        &self,
        id: &ListId,
        item_id: ItemId,
        done: bool,
        at: DateTime<Utc>,
    ) -> Result<Option<Item>, ListStoreError> {
        let mut documents = self.write();
        Ok(documents
            .get_mut(id.as_str())
            .and_then(|list| list.complete_item(item_id, done, at)))
    }

    async fn pull_item(
        &self,
        id: &ListId,
        item_id: ItemId,
        at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError> {
        let mut documents = self.write();
        match documents.get_mut(id.as_str()) {
            Some(list) => {
                list.pull_item(item_id, at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn push_member(
        &self,
        id: &ListId,
        member: Member,
        at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError> {
        let mut documents = self.write();
        match documents.get_mut(id.as_str()) {
            Some(list) => {
                list.push_member(member, at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn pull_member(
        &self,
        id: &ListId,
        member_id: &str,
        at: DateTime<Utc>,
    ) -> Result<bool, ListStoreError> {
        let mut documents = self.write();
        match documents.get_mut(id.as_str()) {
            Some(list) => {
                list.pull_member(member_id, at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_one(&self, id: &ListId) -> Result<bool, ListStoreError> {
        Ok(self.write().remove(id.as_str()).is_some())
    }
}

#[cfg(test)]
#[path = "memory_list_store_tests.rs"]
mod tests;

//! Shopping list domain service.
//!
//! Implements every driving port over the [`ListStore`] port: creation,
//! retrieval, filtered listing, the archival toggle, deletion, and the
//! embedded item/member mutators. The injected clock is the single timestamp
//! authority; every mutation stamps `updatedAt` through the store call, and
//! item identifiers are creation-time values seeded from the clock.
//!
//! Guarded operations (archive, delete) re-read the aggregate and check
//! ownership before mutating; there is no version field, so the narrow
//! window between guard and write is accepted and a zero-match write maps to
//! `NotFound`. The item/member mutators skip the read entirely and discover
//! list absence through the zero-match result of the mutation itself.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::json;

use crate::domain::ownership::ensure_owner;
use crate::domain::ports::{
    AddItemRequest, AddMemberRequest, CreateListRequest, DeleteListRequest, DeleteListResponse,
    GetListRequest, ItemCommand, ListCommand, ListListsRequest, ListQuery, ListStore,
    ListStoreError, MemberCommand, RemoveItemRequest, RemoveItemResponse, RemoveMemberRequest,
    RemoveMemberResponse, SetArchivedRequest, SetArchivedResponse, SetItemCompletedRequest,
};
use crate::domain::{
    Error, Item, ItemId, ItemTitle, ListDraft, ListFilter, ListId, ListName, Member, MemberName,
    Quantity, ShoppingList, UserId,
};

/// Display name used for the owner's member entry when none is supplied.
const DEFAULT_OWNER_NAME: &str = "Owner";

fn map_store_error(error: ListStoreError) -> Error {
    match error {
        ListStoreError::Connection { message } => {
            Error::internal(format!("list store unavailable: {message}"))
        }
        ListStoreError::Query { message } => {
            Error::internal(format!("list store error: {message}"))
        }
    }
}

fn list_not_found(id: &ListId) -> Error {
    Error::not_found(format!("list {id} not found"))
}

fn invalid_field(field: &'static str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field }))
}

/// List service implementing the driving ports.
#[derive(Clone)]
pub struct ListService<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    item_id_seq: Arc<AtomicI64>,
}

impl<S> ListService<S> {
    /// Create a new service over the list store and timestamp source.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            item_id_seq: Arc::new(AtomicI64::new(0)),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Allocate the next item identifier.
    ///
    /// Identifiers are creation-time values: seeded from the clock's
    /// millisecond timestamp and strictly increasing within this process,
    /// so two adds in the same millisecond never collide.
    fn next_item_id(&self, now: DateTime<Utc>) -> ItemId {
        let millis = now.timestamp_millis();
        let id = match self.item_id_seq.fetch_update(
            Ordering::AcqRel,
            Ordering::Acquire,
            |last| Some(last.saturating_add(1).max(millis)),
        ) {
            Ok(prev) | Err(prev) => prev.saturating_add(1).max(millis),
        };
        ItemId::new(id)
    }
}

impl<S> ListService<S>
where
    S: ListStore,
{
    /// Resolve, load, and owner-check an aggregate for a guarded mutation.
    async fn load_owned(
        &self,
        list_id: &str,
        caller: &UserId,
    ) -> Result<(ListId, ShoppingList), Error> {
        let id = ListId::resolve(list_id);
        let list = self
            .store
            .find_one(&id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| list_not_found(&id))?;
        ensure_owner(caller, &list)?;
        Ok((id, list))
    }
}

#[async_trait]
impl<S> ListCommand for ListService<S>
where
    S: ListStore,
{
    async fn create_list(&self, request: CreateListRequest) -> Result<ShoppingList, Error> {
        let name = ListName::new(request.name.unwrap_or_default())
            .map_err(|err| invalid_field("name", err.to_string()))?;
        let owner_id = UserId::new(request.owner_id.unwrap_or_default())
            .map_err(|err| invalid_field("ownerId", err.to_string()))?;
        let owner_name = MemberName::new(
            request
                .owner_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OWNER_NAME.to_owned()),
        )
        .map_err(|err| invalid_field("ownerName", err.to_string()))?;

        let now = self.now();
        let draft = ListDraft {
            name,
            owner_id: owner_id.clone(),
            archived: false,
            created_at: now,
            updated_at: now,
            members: vec![Member::owner(owner_id, owner_name, now)],
            items: vec![],
        };

        self.store.insert(draft).await.map_err(map_store_error)
    }

    async fn set_archived(
        &self,
        request: SetArchivedRequest,
    ) -> Result<SetArchivedResponse, Error> {
        let (id, _list) = self.load_owned(&request.list_id, &request.caller).await?;

        let matched = self
            .store
            .set_archived(&id, request.archived, self.now())
            .await
            .map_err(map_store_error)?;
        if !matched {
            // The aggregate vanished between guard and write.
            return Err(list_not_found(&id));
        }

        Ok(SetArchivedResponse {
            archived: request.archived,
        })
    }

    async fn delete_list(&self, request: DeleteListRequest) -> Result<DeleteListResponse, Error> {
        let (id, _list) = self.load_owned(&request.list_id, &request.caller).await?;

        let deleted = self
            .store
            .delete_one(&id)
            .await
            .map_err(map_store_error)?;
        if !deleted {
            return Err(list_not_found(&id));
        }

        Ok(DeleteListResponse { deleted_id: id })
    }
}

#[async_trait]
impl<S> ListQuery for ListService<S>
where
    S: ListStore,
{
    async fn get_list(&self, request: GetListRequest) -> Result<ShoppingList, Error> {
        let id = ListId::resolve(&request.list_id);
        self.store
            .find_one(&id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| list_not_found(&id))
    }

    async fn list_lists(&self, request: ListListsRequest) -> Result<Vec<ShoppingList>, Error> {
        self.store
            .find_many(ListFilter::from_archived(request.archived))
            .await
            .map_err(map_store_error)
    }
}

#[async_trait]
impl<S> ItemCommand for ListService<S>
where
    S: ListStore,
{
    async fn add_item(&self, request: AddItemRequest) -> Result<Item, Error> {
        let title = ItemTitle::new(request.title.unwrap_or_default())
            .map_err(|err| invalid_field("name", err.to_string()))?;
        let quantity = Quantity::from_requested(request.quantity);

        let id = ListId::resolve(&request.list_id);
        let now = self.now();
        let item = Item::new(self.next_item_id(now), title, quantity, now);

        let matched = self
            .store
            .push_item(&id, item.clone(), now)
            .await
            .map_err(map_store_error)?;
        if !matched {
            return Err(list_not_found(&id));
        }

        Ok(item)
    }

    async fn set_item_completed(&self, request: SetItemCompletedRequest) -> Result<Item, Error> {
        let id = ListId::resolve(&request.list_id);
        let item_id = ItemId::new(request.item_id);

        self.store
            .set_item_completed(&id, item_id, request.done, self.now())
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| {
                Error::not_found(format!("item {item_id} not found in list {id}"))
            })
    }

    async fn remove_item(&self, request: RemoveItemRequest) -> Result<RemoveItemResponse, Error> {
        let id = ListId::resolve(&request.list_id);
        let item_id = ItemId::new(request.item_id);

        let matched = self
            .store
            .pull_item(&id, item_id, self.now())
            .await
            .map_err(map_store_error)?;
        if !matched {
            return Err(list_not_found(&id));
        }

        Ok(RemoveItemResponse {
            list_id: id,
            item_id,
        })
    }
}

#[async_trait]
impl<S> MemberCommand for ListService<S>
where
    S: ListStore,
{
    async fn add_member(&self, request: AddMemberRequest) -> Result<Member, Error> {
        let name = MemberName::new(request.name.unwrap_or_default())
            .map_err(|err| invalid_field("name", err.to_string()))?;
        let user_id = match request.user_id {
            Some(raw) => UserId::new(raw).map_err(|err| invalid_field("userId", err.to_string()))?,
            None => UserId::generate(),
        };

        let id = ListId::resolve(&request.list_id);
        let now = self.now();
        let member = Member::joining(user_id, name, now);

        let matched = self
            .store
            .push_member(&id, member.clone(), now)
            .await
            .map_err(map_store_error)?;
        if !matched {
            return Err(list_not_found(&id));
        }

        Ok(member)
    }

    async fn remove_member(
        &self,
        request: RemoveMemberRequest,
    ) -> Result<RemoveMemberResponse, Error> {
        let id = ListId::resolve(&request.list_id);

        let matched = self
            .store
            .pull_member(&id, &request.member_id, self.now())
            .await
            .map_err(map_store_error)?;
        if !matched {
            return Err(list_not_found(&id));
        }

        Ok(RemoveMemberResponse {
            list_id: id,
            member_id: request.member_id,
        })
    }
}

#[cfg(test)]
#[path = "list_service_tests.rs"]
mod tests;

//! Driving port for list-level mutations.
//!
//! Creation is ungated; the archival toggle and deletion are owner-gated and
//! require a resolved caller identity.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, ListDraft, ListId, ListName, Member, MemberName, ShoppingList, UserId,
};

/// Request to create a list.
///
/// Presence of `name` and `owner_id` is part of the operation's contract, so
/// the fields stay optional here and the service validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    /// Display name of the new list.
    pub name: Option<String>,
    /// Identity of the owner.
    pub owner_id: Option<String>,
    /// Display name for the owner's member entry.
    pub owner_name: Option<String>,
}

/// Request to set the archived flag, made by `caller`.
#[derive(Debug, Clone, PartialEq)]
pub struct SetArchivedRequest {
    /// External list identifier.
    pub list_id: String,
    /// Resolved caller identity.
    pub caller: UserId,
    /// Desired archived value.
    pub archived: bool,
}

/// Response from the archival toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetArchivedResponse {
    /// The applied archived value.
    pub archived: bool,
}

/// Request to delete a list, made by `caller`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteListRequest {
    /// External list identifier.
    pub list_id: String,
    /// Resolved caller identity.
    pub caller: UserId,
}

/// Confirmation of a completed deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteListResponse {
    /// Internal identifier of the deleted aggregate.
    pub deleted_id: ListId,
}

/// Driving port for list write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListCommand: Send + Sync {
    /// Create a list owned by the requested identity.
    ///
    /// Fails with `InvalidRequest` when the name is absent or blank, or the
    /// owner identity is absent.
    async fn create_list(&self, request: CreateListRequest) -> Result<ShoppingList, Error>;

    /// Set the archived flag; owner-gated.
    ///
    /// Idempotent in effect, but every call bumps `updatedAt`.
    async fn set_archived(&self, request: SetArchivedRequest)
    -> Result<SetArchivedResponse, Error>;

    /// Delete a list and its embedded sequences; owner-gated.
    ///
    /// Not idempotent: a second delete fails with `NotFound`.
    async fn delete_list(&self, request: DeleteListRequest) -> Result<DeleteListResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureListCommand;

#[async_trait]
impl ListCommand for FixtureListCommand {
    async fn create_list(&self, request: CreateListRequest) -> Result<ShoppingList, Error> {
        let name = ListName::new(request.name.unwrap_or_default())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let owner_id = UserId::new(request.owner_id.unwrap_or_default())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let owner_name = MemberName::new(request.owner_name.unwrap_or_else(|| "Owner".to_owned()))
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let now = Utc::now();
        Ok(ShoppingList::new(
            ListId::generate(),
            ListDraft {
                name,
                owner_id: owner_id.clone(),
                archived: false,
                created_at: now,
                updated_at: now,
                members: vec![Member::owner(owner_id, owner_name, now)],
                items: vec![],
            },
        ))
    }

    async fn set_archived(
        &self,
        request: SetArchivedRequest,
    ) -> Result<SetArchivedResponse, Error> {
        Ok(SetArchivedResponse {
            archived: request.archived,
        })
    }

    async fn delete_list(&self, request: DeleteListRequest) -> Result<DeleteListResponse, Error> {
        Ok(DeleteListResponse {
            deleted_id: ListId::resolve(&request.list_id),
        })
    }
}

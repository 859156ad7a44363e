//! Driving port for embedded member mutations.
//!
//! Structurally identical to the item mutators, keyed by member identity
//! instead of an integer item id, and equally ungated.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Error, ListId, Member, MemberName, UserId};

/// Request to add a member to a list.
#[derive(Debug, Clone, PartialEq)]
pub struct AddMemberRequest {
    /// External list identifier.
    pub list_id: String,
    /// Member display name; required, validated by the service.
    pub name: Option<String>,
    /// Member identity; freshly generated when absent.
    pub user_id: Option<String>,
}

/// Request to remove a member from a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveMemberRequest {
    /// External list identifier.
    pub list_id: String,
    /// Identity the pull targets; compared verbatim against member entries.
    pub member_id: String,
}

/// Confirmation of a completed member removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveMemberResponse {
    /// Internal identifier of the parent list.
    pub list_id: ListId,
    /// Identity the pull targeted; the member may not have existed.
    pub member_id: String,
}

/// Driving port for member write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberCommand: Send + Sync {
    /// Append a new member with role `member`.
    ///
    /// Fails with `InvalidRequest` when the name is absent or blank and
    /// with `NotFound` when the list does not exist.
    async fn add_member(&self, request: AddMemberRequest) -> Result<Member, Error>;

    /// Remove a member; removing an absent identity from an existing list
    /// succeeds.
    ///
    /// Fails with `NotFound` only when the list itself is absent.
    async fn remove_member(
        &self,
        request: RemoveMemberRequest,
    ) -> Result<RemoveMemberResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMemberCommand;

#[async_trait]
impl MemberCommand for FixtureMemberCommand {
    async fn add_member(&self, request: AddMemberRequest) -> Result<Member, Error> {
        let name = MemberName::new(request.name.unwrap_or_default())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let user_id = match request.user_id {
            Some(raw) => {
                UserId::new(raw).map_err(|err| Error::invalid_request(err.to_string()))?
            }
            None => UserId::generate(),
        };
        Ok(Member::joining(user_id, name, Utc::now()))
    }

    async fn remove_member(
        &self,
        request: RemoveMemberRequest,
    ) -> Result<RemoveMemberResponse, Error> {
        Ok(RemoveMemberResponse {
            list_id: ListId::resolve(&request.list_id),
            member_id: request.member_id,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::{ErrorCode, MemberRole};

    #[rstest]
    #[tokio::test]
    async fn fixture_add_generates_an_identity_when_absent() {
        let command = FixtureMemberCommand;
        let member = command
            .add_member(AddMemberRequest {
                list_id: "list-1".to_owned(),
                name: Some("Jane".to_owned()),
                user_id: None,
            })
            .await
            .expect("fixture add succeeds");

        assert_eq!(member.role(), MemberRole::Member);
        assert!(!member.user_id().as_str().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_add_rejects_missing_name() {
        let command = FixtureMemberCommand;
        let err = command
            .add_member(AddMemberRequest {
                list_id: "list-1".to_owned(),
                name: None,
                user_id: None,
            })
            .await
            .expect_err("invalid request");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}

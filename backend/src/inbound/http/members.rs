//! Embedded member HTTP handlers.
//!
//! ```text
//! POST   /api/v1/lists/{list_id}/members
//! DELETE /api/v1/lists/{list_id}/members/{member_id}
//! ```
//!
//! Like the item routes, member mutations are deliberately ungated.

use actix_web::{HttpResponse, delete, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{AddMemberRequest, RemoveMemberRequest};
use crate::domain::{Error, Member};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for adding a member.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberBody {
    /// Member display name.
    pub name: Option<String>,
    /// Member identity; freshly generated when absent.
    pub user_id: Option<String>,
}

/// Confirmation payload for a completed member removal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberRemovedBody {
    /// Human-readable confirmation.
    pub message: String,
}

/// Add a member with role `member` to a list.
#[utoipa::path(
    post,
    path = "/api/v1/lists/{list_id}/members",
    params(("list_id" = String, Path, description = "External list identifier")),
    request_body = AddMemberBody,
    responses(
        (status = 201, description = "Member added", body = Member),
        (status = 400, description = "Missing member name", body = Error),
        (status = 404, description = "List not found", body = Error)
    ),
    tags = ["members"],
    operation_id = "addMember"
)]
#[post("/lists/{list_id}/members")]
pub async fn add_member(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AddMemberBody>,
) -> ApiResult<HttpResponse> {
    let AddMemberBody { name, user_id } = payload.into_inner();

    let member = state
        .members
        .add_member(AddMemberRequest {
            list_id: path.into_inner(),
            name,
            user_id,
        })
        .await?;

    Ok(HttpResponse::Created().json(member))
}

/// Remove a member from a list.
///
/// Removing an absent identity from an existing list succeeds; only a
/// missing list is an error.
#[utoipa::path(
    delete,
    path = "/api/v1/lists/{list_id}/members/{member_id}",
    params(
        ("list_id" = String, Path, description = "External list identifier"),
        ("member_id" = String, Path, description = "Member identity within the list")
    ),
    responses(
        (status = 200, description = "Member removed", body = MemberRemovedBody),
        (status = 404, description = "List not found", body = Error)
    ),
    tags = ["members"],
    operation_id = "deleteMember"
)]
#[delete("/lists/{list_id}/members/{member_id}")]
pub async fn delete_member(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<MemberRemovedBody>> {
    let (list_id, member_id) = path.into_inner();

    state
        .members
        .remove_member(RemoveMemberRequest { list_id, member_id })
        .await?;

    Ok(web::Json(MemberRemovedBody {
        message: "Member removed".to_owned(),
    }))
}

#[cfg(test)]
#[path = "members_tests.rs"]
mod tests;

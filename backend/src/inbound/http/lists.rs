//! List HTTP handlers.
//!
//! ```text
//! POST   /api/v1/lists
//! GET    /api/v1/lists
//! GET    /api/v1/lists/{list_id}
//! PATCH  /api/v1/lists/{list_id}/archive
//! DELETE /api/v1/lists/{list_id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    CreateListRequest, DeleteListRequest, GetListRequest, ListListsRequest, SetArchivedRequest,
    SetArchivedResponse,
};
use crate::domain::{Error, ShoppingList};
use crate::inbound::http::ApiResult;
use crate::inbound::http::identity::CallerIdentity;
use crate::inbound::http::state::HttpState;

/// Request payload for creating a list.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListBody {
    /// Display name of the new list.
    pub name: Option<String>,
    /// Identity of the owner.
    pub owner_id: Option<String>,
    /// Display name for the owner's member entry.
    pub owner_name: Option<String>,
}

/// Query parameters for enumerating lists.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct ListsQuery {
    /// Tri-state archived filter; omit to return everything.
    pub archived: Option<bool>,
}

/// Request payload for the archival toggle.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveListBody {
    /// Desired archived value.
    pub archived: Option<bool>,
    /// Caller identity fallback when the header is absent.
    pub owner_id: Option<String>,
}

/// Optional request payload for deletion, carrying the identity fallback.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteListBody {
    /// Caller identity fallback when the header is absent.
    pub owner_id: Option<String>,
}

/// Confirmation payload for a completed deletion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDeletedBody {
    /// Human-readable confirmation.
    pub message: String,
}

/// Create a new list owned by the supplied identity.
#[utoipa::path(
    post,
    path = "/api/v1/lists",
    request_body = CreateListBody,
    responses(
        (status = 201, description = "List created", body = ShoppingList),
        (status = 400, description = "Missing name or ownerId", body = Error)
    ),
    tags = ["lists"],
    operation_id = "createList"
)]
#[post("/lists")]
pub async fn create_list(
    state: web::Data<HttpState>,
    payload: web::Json<CreateListBody>,
) -> ApiResult<HttpResponse> {
    let CreateListBody {
        name,
        owner_id,
        owner_name,
    } = payload.into_inner();

    let list = state
        .lists
        .create_list(CreateListRequest {
            name,
            owner_id,
            owner_name,
        })
        .await?;

    Ok(HttpResponse::Created().json(list))
}

/// Enumerate lists, most recently updated first.
#[utoipa::path(
    get,
    path = "/api/v1/lists",
    params(ListsQuery),
    responses(
        (status = 200, description = "Matching lists", body = [ShoppingList])
    ),
    tags = ["lists"],
    operation_id = "listLists"
)]
#[get("/lists")]
pub async fn list_lists(
    state: web::Data<HttpState>,
    query: web::Query<ListsQuery>,
) -> ApiResult<web::Json<Vec<ShoppingList>>> {
    let listed = state
        .lists_query
        .list_lists(ListListsRequest {
            archived: query.archived,
        })
        .await?;

    Ok(web::Json(listed))
}

/// Fetch one list by its external identifier.
#[utoipa::path(
    get,
    path = "/api/v1/lists/{list_id}",
    params(("list_id" = String, Path, description = "External list identifier")),
    responses(
        (status = 200, description = "The list", body = ShoppingList),
        (status = 404, description = "List not found", body = Error)
    ),
    tags = ["lists"],
    operation_id = "getList"
)]
#[get("/lists/{list_id}")]
pub async fn get_list(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ShoppingList>> {
    let list = state
        .lists_query
        .get_list(GetListRequest {
            list_id: path.into_inner(),
        })
        .await?;

    Ok(web::Json(list))
}

/// Set the archived flag; owner-gated.
#[utoipa::path(
    patch,
    path = "/api/v1/lists/{list_id}/archive",
    params(("list_id" = String, Path, description = "External list identifier")),
    request_body = ArchiveListBody,
    responses(
        (status = 200, description = "Applied archived value", body = SetArchivedResponse),
        (status = 400, description = "Missing identity or archived flag", body = Error),
        (status = 403, description = "Caller is not the owner", body = Error),
        (status = 404, description = "List not found", body = Error)
    ),
    tags = ["lists"],
    operation_id = "archiveList"
)]
#[patch("/lists/{list_id}/archive")]
pub async fn archive_list(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    identity: CallerIdentity,
    payload: web::Json<ArchiveListBody>,
) -> ApiResult<web::Json<SetArchivedResponse>> {
    let ArchiveListBody { archived, owner_id } = payload.into_inner();
    let caller = identity.resolve(owner_id)?;
    let archived = archived.ok_or_else(|| {
        Error::invalid_request("archived flag is required")
            .with_details(json!({ "field": "archived" }))
    })?;

    let response = state
        .lists
        .set_archived(SetArchivedRequest {
            list_id: path.into_inner(),
            caller,
            archived,
        })
        .await?;

    Ok(web::Json(response))
}

/// Delete a list and everything embedded in it; owner-gated.
#[utoipa::path(
    delete,
    path = "/api/v1/lists/{list_id}",
    params(("list_id" = String, Path, description = "External list identifier")),
    request_body = DeleteListBody,
    responses(
        (status = 200, description = "List deleted", body = ListDeletedBody),
        (status = 400, description = "Missing identity", body = Error),
        (status = 403, description = "Caller is not the owner", body = Error),
        (status = 404, description = "List not found", body = Error)
    ),
    tags = ["lists"],
    operation_id = "deleteList"
)]
#[delete("/lists/{list_id}")]
pub async fn delete_list(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    identity: CallerIdentity,
    payload: Option<web::Json<DeleteListBody>>,
) -> ApiResult<web::Json<ListDeletedBody>> {
    let fallback = payload.and_then(|body| body.into_inner().owner_id);
    let caller = identity.resolve(fallback)?;

    state
        .lists
        .delete_list(DeleteListRequest {
            list_id: path.into_inner(),
            caller,
        })
        .await?;

    Ok(web::Json(ListDeletedBody {
        message: "List deleted".to_owned(),
    }))
}

#[cfg(test)]
#[path = "lists_tests.rs"]
mod tests;

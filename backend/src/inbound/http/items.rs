//! Embedded item HTTP handlers.
//!
//! ```text
//! POST   /api/v1/lists/{list_id}/items
//! PUT    /api/v1/lists/{list_id}/items/{item_id}
//! DELETE /api/v1/lists/{list_id}/items/{item_id}
//! ```
//!
//! None of these routes extract a caller identity; item mutations are
//! deliberately ungated.

use actix_web::{HttpResponse, delete, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::{AddItemRequest, RemoveItemRequest, SetItemCompletedRequest};
use crate::domain::{Error, Item};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for appending an item.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemBody {
    /// Item title.
    pub name: Option<String>,
    /// Requested quantity; defaults to 1 when absent or non-positive.
    pub quantity: Option<i64>,
}

/// Request payload for the completion toggle.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleItemBody {
    /// Desired completion value.
    pub done: Option<bool>,
}

/// Confirmation payload for a completed item removal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDeletedBody {
    /// Human-readable confirmation.
    pub message: String,
}

/// Append a new item to a list.
#[utoipa::path(
    post,
    path = "/api/v1/lists/{list_id}/items",
    params(("list_id" = String, Path, description = "External list identifier")),
    request_body = AddItemBody,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Missing item name", body = Error),
        (status = 404, description = "List not found", body = Error)
    ),
    tags = ["items"],
    operation_id = "addItem"
)]
#[post("/lists/{list_id}/items")]
pub async fn add_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AddItemBody>,
) -> ApiResult<HttpResponse> {
    let AddItemBody { name, quantity } = payload.into_inner();

    let item = state
        .items
        .add_item(AddItemRequest {
            list_id: path.into_inner(),
            title: name,
            quantity,
        })
        .await?;

    Ok(HttpResponse::Created().json(item))
}

/// Set one item's completion flag.
#[utoipa::path(
    put,
    path = "/api/v1/lists/{list_id}/items/{item_id}",
    params(
        ("list_id" = String, Path, description = "External list identifier"),
        ("item_id" = i64, Path, description = "Item identifier within the list")
    ),
    request_body = ToggleItemBody,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 400, description = "Missing done flag", body = Error),
        (status = 404, description = "List or item not found", body = Error)
    ),
    tags = ["items"],
    operation_id = "toggleItem"
)]
#[put("/lists/{list_id}/items/{item_id}")]
pub async fn toggle_item(
    state: web::Data<HttpState>,
    path: web::Path<(String, i64)>,
    payload: web::Json<ToggleItemBody>,
) -> ApiResult<web::Json<Item>> {
    let (list_id, item_id) = path.into_inner();
    let done = payload.done.ok_or_else(|| {
        Error::invalid_request("done flag is required").with_details(json!({ "field": "done" }))
    })?;

    let item = state
        .items
        .set_item_completed(SetItemCompletedRequest {
            list_id,
            item_id,
            done,
        })
        .await?;

    Ok(web::Json(item))
}

/// Remove an item from a list.
///
/// Removing an absent item from an existing list succeeds; only a missing
/// list is an error.
#[utoipa::path(
    delete,
    path = "/api/v1/lists/{list_id}/items/{item_id}",
    params(
        ("list_id" = String, Path, description = "External list identifier"),
        ("item_id" = i64, Path, description = "Item identifier within the list")
    ),
    responses(
        (status = 200, description = "Item removed", body = ItemDeletedBody),
        (status = 404, description = "List not found", body = Error)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/lists/{list_id}/items/{item_id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<(String, i64)>,
) -> ApiResult<web::Json<ItemDeletedBody>> {
    let (list_id, item_id) = path.into_inner();

    state
        .items
        .remove_item(RemoveItemRequest { list_id, item_id })
        .await?;

    Ok(web::Json(ItemDeletedBody {
        message: "Item deleted".to_owned(),
    }))
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;

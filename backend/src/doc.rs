//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: every list, item, member, and health endpoint plus the
//! boundary schemas. The generated specification backs Swagger UI in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::ports::SetArchivedResponse;
use crate::domain::{Error, ErrorCode, Item, Member, MemberRole, ShoppingList};
use crate::inbound::http::items::{AddItemBody, ItemDeletedBody, ToggleItemBody};
use crate::inbound::http::lists::{
    ArchiveListBody, CreateListBody, DeleteListBody, ListDeletedBody,
};
use crate::inbound::http::members::{AddMemberBody, MemberRemovedBody};

/// OpenAPI document for the REST API.
///
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopping list backend API",
        description = "HTTP interface for shared, mutable shopping lists."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::lists::create_list,
        crate::inbound::http::lists::list_lists,
        crate::inbound::http::lists::get_list,
        crate::inbound::http::lists::archive_list,
        crate::inbound::http::lists::delete_list,
        crate::inbound::http::items::add_item,
        crate::inbound::http::items::toggle_item,
        crate::inbound::http::items::delete_item,
        crate::inbound::http::members::add_member,
        crate::inbound::http::members::delete_member,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ShoppingList,
        Member,
        MemberRole,
        Item,
        Error,
        ErrorCode,
        CreateListBody,
        ArchiveListBody,
        DeleteListBody,
        ListDeletedBody,
        SetArchivedResponse,
        AddItemBody,
        ToggleItemBody,
        ItemDeletedBody,
        AddMemberBody,
        MemberRemovedBody,
    )),
    tags(
        (name = "lists", description = "List aggregate operations"),
        (name = "items", description = "Embedded item operations"),
        (name = "members", description = "Embedded member operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's shape.

    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn registers_every_rest_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/lists",
            "/api/v1/lists/{list_id}",
            "/api/v1/lists/{list_id}/archive",
            "/api/v1/lists/{list_id}/items",
            "/api/v1/lists/{list_id}/items/{item_id}",
            "/api/v1/lists/{list_id}/members",
            "/api/v1/lists/{list_id}/members/{member_id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in OpenAPI document"
            );
        }
    }

    #[test]
    fn registers_the_aggregate_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        for name in ["ShoppingList", "Member", "Item", "Error"] {
            assert!(
                schemas.contains_key(name),
                "missing schema {name} in OpenAPI document"
            );
        }
    }
}

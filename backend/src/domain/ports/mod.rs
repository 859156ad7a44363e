//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod item_command;
mod list_command;
mod list_query;
mod list_store;
mod member_command;

#[cfg(test)]
pub use item_command::MockItemCommand;
pub use item_command::{
    AddItemRequest, FixtureItemCommand, ItemCommand, RemoveItemRequest, RemoveItemResponse,
    SetItemCompletedRequest,
};
#[cfg(test)]
pub use list_command::MockListCommand;
pub use list_command::{
    CreateListRequest, DeleteListRequest, DeleteListResponse, FixtureListCommand, ListCommand,
    SetArchivedRequest, SetArchivedResponse,
};
#[cfg(test)]
pub use list_query::MockListQuery;
pub use list_query::{FixtureListQuery, GetListRequest, ListListsRequest, ListQuery};
#[cfg(test)]
pub use list_store::MockListStore;
pub use list_store::{FixtureListStore, ListStore, ListStoreError};
#[cfg(test)]
pub use member_command::MockMemberCommand;
pub use member_command::{
    AddMemberRequest, FixtureMemberCommand, MemberCommand, RemoveMemberRequest,
    RemoveMemberResponse,
};

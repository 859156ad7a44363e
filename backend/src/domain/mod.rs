//! Domain model, ports, and services.
//!
//! Purpose: define the strongly typed shopping list aggregate, the error
//! taxonomy shared by every adapter, the ownership guard, and the services
//! implementing the driving ports. Types stay immutable outside the
//! aggregate's own mutators; serialization contracts (serde) are documented
//! on each type.

pub mod error;
pub mod list;
pub mod list_service;
pub mod ownership;
pub mod ports;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::list::{
    Item, ItemId, ItemTitle, ListDraft, ListFilter, ListId, ListName, ListValidationError, Member,
    MemberName, MemberRole, Quantity, ShoppingList, UserId,
};
pub use self::list_service::ListService;
pub use self::ownership::ensure_owner;

/// Convenient domain result alias.
pub type ApiResult<T> = Result<T, Error>;

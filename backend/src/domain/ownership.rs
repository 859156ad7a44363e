//! Ownership guard for owner-gated mutations.
//!
//! Only the archival toggle and list deletion are gated on ownership; list
//! creation and the item/member mutators are deliberately ungated, matching
//! the observed behavior of the system this service models. The guard reads
//! `ownerId` on the aggregate root and never inspects the member sequence,
//! so an owner-role entry drifting out of the members list does not affect
//! authorization.

use serde_json::json;

use crate::domain::{Error, ShoppingList, UserId};

/// Check that the caller owns the list.
///
/// Returns `Forbidden` when the identities differ. Missing identity is
/// rejected earlier, at the boundary, before the aggregate is loaded.
///
/// # Examples
/// ```
/// use backend::domain::{ensure_owner, ErrorCode, UserId};
/// # use chrono::Utc;
/// # use backend::domain::{ListDraft, ListId, ListName, Member, MemberName, ShoppingList};
/// # let owner = UserId::new("user-1").expect("valid id");
/// # let now = Utc::now();
/// # let list = ShoppingList::new(
/// #     ListId::generate(),
/// #     ListDraft {
/// #         name: ListName::new("Groceries").expect("valid name"),
/// #         owner_id: owner.clone(),
/// #         archived: false,
/// #         created_at: now,
/// #         updated_at: now,
/// #         members: vec![],
/// #         items: vec![],
/// #     },
/// # );
/// assert!(ensure_owner(&owner, &list).is_ok());
///
/// let stranger = UserId::new("user-2").expect("valid id");
/// let err = ensure_owner(&stranger, &list).expect_err("not the owner");
/// assert_eq!(err.code(), ErrorCode::Forbidden);
/// ```
pub fn ensure_owner(caller: &UserId, list: &ShoppingList) -> Result<(), Error> {
    if caller == list.owner_id() {
        return Ok(());
    }
    Err(
        Error::forbidden("only the list owner can perform this operation").with_details(json!({
            "listId": list.id().as_str(),
            "code": "not_owner",
        })),
    )
}

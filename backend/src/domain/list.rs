//! Shopping list aggregate model.
//!
//! A [`ShoppingList`] owns its embedded [`Member`] and [`Item`] sequences;
//! they have no identity or lifecycle outside their parent list. Validation
//! lives in the newtypes so a constructed aggregate is always well formed.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors raised while constructing aggregate components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListValidationError {
    /// The list name was absent or blank.
    EmptyListName,
    /// The caller identity was absent or blank.
    EmptyUserId,
    /// The caller identity had surrounding whitespace.
    PaddedUserId,
    /// The item title was absent or blank.
    EmptyItemTitle,
    /// The member display name was absent or blank.
    EmptyMemberName,
}

impl fmt::Display for ListValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyListName => write!(f, "list name must not be empty"),
            Self::EmptyUserId => write!(f, "user id must not be empty"),
            Self::PaddedUserId => write!(f, "user id must not have surrounding whitespace"),
            Self::EmptyItemTitle => write!(f, "item title must not be empty"),
            Self::EmptyMemberName => write!(f, "member name must not be empty"),
        }
    }
}

impl std::error::Error for ListValidationError {}

/// Store-assigned list identifier.
///
/// The external form may be the store's native key encoding (a UUID) or any
/// legacy opaque string; [`ListId::resolve`] normalizes the former and passes
/// the latter through verbatim so the store lookup reports absence instead of
/// this layer rejecting the id up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    /// Normalize an externally supplied identifier into the internal key form.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ListId;
    ///
    /// let native = ListId::resolve("3FA85F64-5717-4562-B3FC-2C963F66AFA6");
    /// assert_eq!(native.as_str(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    ///
    /// let legacy = ListId::resolve("list-1");
    /// assert_eq!(legacy.as_str(), "list-1");
    /// ```
    pub fn resolve(raw: &str) -> Self {
        match Uuid::parse_str(raw) {
            Ok(uuid) => Self(uuid.to_string()),
            Err(_) => Self(raw.to_owned()),
        }
    }

    /// Generate a fresh identifier in the store's native key encoding.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the internal key form.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque caller identity, resolved by an out-of-scope authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ListValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a fresh identity for members added without one.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, ListValidationError> {
        if id.is_empty() {
            return Err(ListValidationError::EmptyUserId);
        }
        if id.trim() != id {
            return Err(ListValidationError::PaddedUserId);
        }
        Ok(Self(id))
    }

    /// Borrow the identity string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ListValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Non-empty list display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ListName(String);

impl ListName {
    /// Validate and construct a [`ListName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, ListValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ListValidationError::EmptyListName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for ListName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ListName> for String {
    fn from(value: ListName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ListName {
    type Error = ListValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Non-empty item title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemTitle(String);

impl ItemTitle {
    /// Validate and construct an [`ItemTitle`] from owned input.
    pub fn new(title: impl Into<String>) -> Result<Self, ListValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ListValidationError::EmptyItemTitle);
        }
        Ok(Self(title))
    }
}

impl AsRef<str> for ItemTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<ItemTitle> for String {
    fn from(value: ItemTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for ItemTitle {
    type Error = ListValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Non-empty member display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberName(String);

impl MemberName {
    /// Validate and construct a [`MemberName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, ListValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ListValidationError::EmptyMemberName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<MemberName> for String {
    fn from(value: MemberName) -> Self {
        value.0
    }
}

impl TryFrom<String> for MemberName {
    type Error = ListValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Role a member holds within one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// The list owner; exactly one at creation time.
    Owner,
    /// A regular member.
    Member,
}

impl MemberRole {
    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service-assigned item identifier, unique within one list's item sequence.
///
/// Values come from the clock's millisecond timestamp at creation time, so
/// they are monotonically non-decreasing within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Wrap a raw identifier value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positive item quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Default quantity applied when the caller supplies none.
    pub const DEFAULT: Self = Self(1);

    /// Build a quantity from an optional caller-supplied value.
    ///
    /// Absent or non-positive values fall back to [`Quantity::DEFAULT`];
    /// values beyond `u32::MAX` saturate.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Quantity;
    ///
    /// assert_eq!(Quantity::from_requested(Some(6)).value(), 6);
    /// assert_eq!(Quantity::from_requested(Some(0)), Quantity::DEFAULT);
    /// assert_eq!(Quantity::from_requested(None), Quantity::DEFAULT);
    /// ```
    pub fn from_requested(requested: Option<i64>) -> Self {
        match requested {
            Some(value) if value > 0 => Self(u32::try_from(value).unwrap_or(u32::MAX)),
            _ => Self::DEFAULT,
        }
    }

    /// Raw quantity value.
    pub fn value(self) -> u32 {
        self.0
    }
}

/// One entry of a list's embedded item sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[schema(value_type = i64)]
    id: ItemId,
    #[schema(value_type = String, example = "Milk")]
    title: ItemTitle,
    #[schema(value_type = u32, example = 2)]
    quantity: Quantity,
    is_completed: bool,
    created_at: DateTime<Utc>,
}

impl Item {
    /// Build a new, not-yet-completed item.
    pub fn new(id: ItemId, title: ItemTitle, quantity: Quantity, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            quantity,
            is_completed: false,
            created_at,
        }
    }

    /// Identifier within the parent list.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Item title.
    pub fn title(&self) -> &ItemTitle {
        &self.title
    }

    /// Requested quantity.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Whether the item has been checked off.
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Creation instant, set once.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// One entry of a list's embedded member sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[schema(value_type = String, example = "user-1")]
    user_id: UserId,
    #[schema(value_type = String, example = "Alex")]
    name: MemberName,
    role: MemberRole,
    joined_at: DateTime<Utc>,
}

impl Member {
    /// Build the owner entry created alongside a new list.
    pub fn owner(user_id: UserId, name: MemberName, joined_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            name,
            role: MemberRole::Owner,
            joined_at,
        }
    }

    /// Build a regular member entry.
    pub fn joining(user_id: UserId, name: MemberName, joined_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            name,
            role: MemberRole::Member,
            joined_at,
        }
    }

    /// Identity of the member.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Display name shown to other members.
    pub fn name(&self) -> &MemberName {
        &self.name
    }

    /// Role within the list.
    pub fn role(&self) -> MemberRole {
        self.role
    }

    /// Join instant, set once.
    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}

/// Everything a new list carries before the store assigns its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDraft {
    /// Display name of the list.
    pub name: ListName,
    /// Immutable owner identity.
    pub owner_id: UserId,
    /// Archival flag, false for new lists.
    pub archived: bool,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last-mutation instant, equal to `created_at` for new lists.
    pub updated_at: DateTime<Utc>,
    /// Initial member sequence.
    pub members: Vec<Member>,
    /// Initial item sequence.
    pub items: Vec<Item>,
}

/// Shopping list aggregate root.
///
/// ## Invariants
/// - `updated_at` moves forward on every successful mutation.
/// - The member and item sequences preserve insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: ListId,
    #[schema(value_type = String, example = "Groceries")]
    name: ListName,
    #[schema(value_type = String, example = "user-1")]
    owner_id: UserId,
    archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    members: Vec<Member>,
    items: Vec<Item>,
}

impl ShoppingList {
    /// Assemble an aggregate from a draft and its store-assigned identifier.
    pub fn new(id: ListId, draft: ListDraft) -> Self {
        let ListDraft {
            name,
            owner_id,
            archived,
            created_at,
            updated_at,
            members,
            items,
        } = draft;
        Self {
            id,
            name,
            owner_id,
            archived,
            created_at,
            updated_at,
            members,
            items,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &ListId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &ListName {
        &self.name
    }

    /// Immutable owner identity.
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Archival flag.
    pub fn archived(&self) -> bool {
        self.archived
    }

    /// Creation instant, set once.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Instant of the last successful mutation.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Member sequence in join order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Item sequence in add order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Set the archival flag and bump `updated_at`.
    ///
    /// Setting the current value is a no-op in effect but still bumps the
    /// timestamp.
    pub fn set_archived(&mut self, archived: bool, at: DateTime<Utc>) {
        self.archived = archived;
        self.updated_at = at;
    }

    /// Append an item and bump `updated_at`.
    pub fn push_item(&mut self, item: Item, at: DateTime<Utc>) {
        self.items.push(item);
        self.updated_at = at;
    }

    /// Set the completion flag of the matching item and bump `updated_at`.
    ///
    /// Returns the updated item, or `None` when no item matches; an
    /// unmatched call leaves the aggregate untouched.
    pub fn complete_item(
        &mut self,
        item_id: ItemId,
        done: bool,
        at: DateTime<Utc>,
    ) -> Option<Item> {
        let item = self.items.iter_mut().find(|item| item.id == item_id)?;
        item.is_completed = done;
        let updated = item.clone();
        self.updated_at = at;
        Some(updated)
    }

    /// Remove every item with the given id and bump `updated_at`.
    ///
    /// Pulling an absent id is a no-op apart from the timestamp bump,
    /// matching idempotent deletion semantics.
    pub fn pull_item(&mut self, item_id: ItemId, at: DateTime<Utc>) {
        self.items.retain(|item| item.id != item_id);
        self.updated_at = at;
    }

    /// Append a member and bump `updated_at`.
    pub fn push_member(&mut self, member: Member, at: DateTime<Utc>) {
        self.members.push(member);
        self.updated_at = at;
    }

    /// Remove every member with the given identity and bump `updated_at`.
    ///
    /// The identity is compared verbatim, so a value that could never
    /// validate simply matches nothing.
    pub fn pull_member(&mut self, member_id: &str, at: DateTime<Utc>) {
        self.members
            .retain(|member| member.user_id.as_str() != member_id);
        self.updated_at = at;
    }
}

/// Store-level filter built from the `archived` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListFilter {
    archived: Option<bool>,
}

impl ListFilter {
    /// Build a filter from the tri-state `archived` parameter.
    pub fn from_archived(archived: Option<bool>) -> Self {
        Self { archived }
    }

    /// The archived constraint, if any.
    pub fn archived(self) -> Option<bool> {
        self.archived
    }

    /// Whether a list satisfies the filter.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ListFilter;
    ///
    /// assert_eq!(ListFilter::from_archived(None).archived(), None);
    /// ```
    pub fn matches(self, list: &ShoppingList) -> bool {
        self.archived.is_none_or(|archived| list.archived == archived)
    }
}

#[cfg(test)]
mod tests;

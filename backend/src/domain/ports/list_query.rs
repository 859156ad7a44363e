//! Driving port for list reads.
//!
//! Reads are unrestricted: no caller identity and no ownership check.

use async_trait::async_trait;

use crate::domain::{Error, ShoppingList};

/// Request to fetch one list by its external identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetListRequest {
    /// External list identifier; resolved permissively before lookup.
    pub list_id: String,
}

/// Request to enumerate lists with an optional archived filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListListsRequest {
    /// Tri-state archived filter; `None` returns everything.
    pub archived: Option<bool>,
}

/// Driving port for list read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListQuery: Send + Sync {
    /// Fetch one list, failing with `NotFound` when absent.
    async fn get_list(&self, request: GetListRequest) -> Result<ShoppingList, Error>;

    /// Enumerate matching lists, most recently updated first.
    ///
    /// An empty result set is a successful response.
    async fn list_lists(&self, request: ListListsRequest) -> Result<Vec<ShoppingList>, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureListQuery;

#[async_trait]
impl ListQuery for FixtureListQuery {
    async fn get_list(&self, request: GetListRequest) -> Result<ShoppingList, Error> {
        Err(Error::not_found(format!(
            "list {} not found",
            request.list_id
        )))
    }

    async fn list_lists(&self, _request: ListListsRequest) -> Result<Vec<ShoppingList>, Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[tokio::test]
    async fn fixture_get_reports_not_found() {
        let query = FixtureListQuery;
        let err = query
            .get_list(GetListRequest {
                list_id: "list-1".to_owned(),
            })
            .await
            .expect_err("fixture lookup misses");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_list_returns_empty() {
        let query = FixtureListQuery;
        let listed = query
            .list_lists(ListListsRequest::default())
            .await
            .expect("fixture list succeeds");
        assert!(listed.is_empty());
    }
}

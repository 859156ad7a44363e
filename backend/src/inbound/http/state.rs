//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ItemCommand, ListCommand, ListQuery, MemberCommand};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// List write operations.
    pub lists: Arc<dyn ListCommand>,
    /// List read operations.
    pub lists_query: Arc<dyn ListQuery>,
    /// Embedded item write operations.
    pub items: Arc<dyn ItemCommand>,
    /// Embedded member write operations.
    pub members: Arc<dyn MemberCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// List write operations.
    pub lists: Arc<dyn ListCommand>,
    /// List read operations.
    pub lists_query: Arc<dyn ListQuery>,
    /// Embedded item write operations.
    pub items: Arc<dyn ItemCommand>,
    /// Embedded member write operations.
    pub members: Arc<dyn MemberCommand>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{
    ///     FixtureItemCommand, FixtureListCommand, FixtureListQuery, FixtureMemberCommand,
    /// };
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     lists: Arc::new(FixtureListCommand),
    ///     lists_query: Arc::new(FixtureListQuery),
    ///     items: Arc::new(FixtureItemCommand),
    ///     members: Arc::new(FixtureMemberCommand),
    /// });
    /// let _lists = state.lists.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            lists,
            lists_query,
            items,
            members,
        } = ports;
        Self {
            lists,
            lists_query,
            items,
            members,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

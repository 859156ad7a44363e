//! HTTP server configuration and wiring.
//!
//! Builds the dependency graph (in-memory store, list service, handler
//! state) and mounts every REST route under the `/api/v1` scope so the
//! binary and the tests assemble the exact same application.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{Scope, web};
use mockable::DefaultClock;

use crate::domain::ListService;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::{items, lists, members};
use crate::outbound::persistence::InMemoryListStore;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Address used when `BIND_ADDR` is unset or unparseable.
    pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

    /// Read the configuration from the environment.
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(Self::DEFAULT_BIND_ADDR));
        Self { bind_addr }
    }
}

/// Wire the in-memory store and list service into handler state.
pub fn build_http_state() -> HttpState {
    let service = Arc::new(ListService::new(
        Arc::new(InMemoryListStore::new()),
        Arc::new(DefaultClock),
    ));
    HttpState::new(HttpStatePorts {
        lists: service.clone(),
        lists_query: service.clone(),
        items: service.clone(),
        members: service,
    })
}

/// Mount every REST route under the `/api/v1` scope.
pub fn api_scope(state: web::Data<HttpState>) -> Scope {
    web::scope("/api/v1")
        .app_data(state)
        .service(lists::create_list)
        .service(lists::list_lists)
        .service(lists::get_list)
        .service(lists::archive_list)
        .service(lists::delete_list)
        .service(items::add_item)
        .service(items::toggle_item)
        .service(items::delete_item)
        .service(members::add_member)
        .service(members::delete_member)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn default_bind_addr_is_every_interface_on_8080() {
        let addr = SocketAddr::from(ServerConfig::DEFAULT_BIND_ADDR);
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn build_http_state_shares_one_service_across_ports() {
        let state = build_http_state();
        // One service allocation backs all four ports, so commands and
        // queries observe the same store.
        assert_eq!(Arc::strong_count(&state.lists), 4);
    }
}

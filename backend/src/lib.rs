//! Shared shopping list backend.
//!
//! Hexagonal layout: `domain` holds the aggregate model, ports, and
//! services; `inbound` adapts HTTP onto the driving ports; `outbound`
//! implements the driven ports; `server` wires the pieces together.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware.
pub use middleware::Trace;

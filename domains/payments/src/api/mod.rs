//! API layer for the Payments domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::PaymentsState;
pub use routes::routes;

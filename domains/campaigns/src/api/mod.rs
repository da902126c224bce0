//! API layer for the Campaigns domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::CampaignsState;
pub use routes::routes;

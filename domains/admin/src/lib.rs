//! Admin domain: campaign review, KYC decisions, audit log access, and
//! platform statistics. Every route is admin-only.

pub mod api;
pub mod repository;

// Re-export repository types
pub use repository::{PlatformStats, StatsRepository};

// Re-export API types
pub use api::routes;
pub use api::AdminState;

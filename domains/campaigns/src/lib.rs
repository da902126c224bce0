//! Campaigns domain: fundraising campaigns, their approval lifecycle,
//! and the `/campaigns` API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Campaign, CampaignStatus};
pub use domain::state::{CampaignEvent, CampaignStateMachine};

// Re-export repository types
pub use repository::{CampaignFilter, CampaignRepository, CampaignsRepositories, UpdateCampaign};

// Re-export API types
pub use api::routes;
pub use api::CampaignsState;

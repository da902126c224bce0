//! Repository layer for the Campaigns domain

pub mod campaigns;

pub use campaigns::{CampaignFilter, CampaignRepository, UpdateCampaign};

use sqlx::PgPool;

/// All repositories for the Campaigns domain
#[derive(Clone)]
pub struct CampaignsRepositories {
    pub campaigns: CampaignRepository,
}

impl CampaignsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            campaigns: CampaignRepository::new(pool),
        }
    }
}

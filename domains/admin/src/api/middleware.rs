//! Admin domain state and auth backend integration
//!
//! The admin surface reads across domain boundaries, so its state holds
//! the other domains' repositories directly rather than duplicating
//! their queries.

use axum::extract::FromRef;
use fundlift_audit::AuditLogRepository;
use fundlift_auth::AuthBackend;
use fundlift_campaigns::CampaignRepository;
use fundlift_users::UserRepository;

use crate::repository::StatsRepository;

/// Application state for the Admin domain
#[derive(Clone)]
pub struct AdminState {
    pub users: UserRepository,
    pub campaigns: CampaignRepository,
    pub stats: StatsRepository,
    pub audit: AuditLogRepository,
    pub auth: AuthBackend,
}

impl FromRef<AdminState> for AuthBackend {
    fn from_ref(state: &AdminState) -> Self {
        state.auth.clone()
    }
}

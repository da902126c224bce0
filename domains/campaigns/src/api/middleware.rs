//! Campaigns domain state and auth backend integration

use axum::extract::FromRef;
use fundlift_audit::AuditLogRepository;
use fundlift_auth::AuthBackend;

use crate::CampaignsRepositories;

/// Application state for the Campaigns domain
#[derive(Clone)]
pub struct CampaignsState {
    pub repos: CampaignsRepositories,
    pub auth: AuthBackend,
    pub audit: AuditLogRepository,
}

impl FromRef<CampaignsState> for AuthBackend {
    fn from_ref(state: &CampaignsState) -> Self {
        state.auth.clone()
    }
}

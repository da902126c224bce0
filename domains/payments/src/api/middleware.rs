//! Payments domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use fundlift_audit::AuditLogRepository;
use fundlift_auth::AuthBackend;
use fundlift_campaigns::CampaignRepository;
use fundlift_gateway::PaymentGateway;

use crate::PaymentsRepositories;

/// Application state for the Payments domain
#[derive(Clone)]
pub struct PaymentsState {
    pub repos: PaymentsRepositories,
    /// Campaigns are read and credited across the domain boundary
    pub campaigns: CampaignRepository,
    pub gateway: Arc<dyn PaymentGateway>,
    pub auth: AuthBackend,
    pub audit: AuditLogRepository,
    /// Where the gateway sends the payer after checkout
    pub return_url: String,
}

impl FromRef<PaymentsState> for AuthBackend {
    fn from_ref(state: &PaymentsState) -> Self {
        state.auth.clone()
    }
}

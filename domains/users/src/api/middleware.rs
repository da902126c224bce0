//! Users domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use fundlift_audit::AuditLogRepository;
use fundlift_auth::AuthBackend;
use fundlift_identity::IdentityProvider;

use crate::UsersRepositories;

/// Application state for the Users domain
#[derive(Clone)]
pub struct UsersState {
    pub repos: UsersRepositories,
    pub auth: AuthBackend,
    pub identity: Arc<dyn IdentityProvider>,
    pub audit: AuditLogRepository,
}

impl FromRef<UsersState> for AuthBackend {
    fn from_ref(state: &UsersState) -> Self {
        state.auth.clone()
    }
}

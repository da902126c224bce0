//! Route definitions for the Admin domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{campaigns, system, users};
use super::middleware::AdminState;

/// Create all Admin domain API routes
pub fn routes() -> Router<AdminState> {
    Router::new()
        .route("/admin/campaigns/pending", get(campaigns::list_pending))
        .route("/admin/campaigns/all", get(campaigns::list_all))
        .route("/admin/campaigns/{id}/approve", post(campaigns::approve))
        .route("/admin/campaigns/{id}/reject", post(campaigns::reject))
        .route("/admin/users", get(users::list))
        .route("/admin/users/{id}/kyc", post(users::update_kyc))
        .route("/admin/audit-logs", get(system::audit_logs))
        .route("/admin/stats", get(system::stats))
}

//! Route definitions for the Campaigns domain API

use axum::{routing::get, Router};

use super::handlers::campaigns;
use super::middleware::CampaignsState;

/// Create all Campaigns domain API routes
pub fn routes() -> Router<CampaignsState> {
    Router::new()
        .route("/campaigns", get(campaigns::list).post(campaigns::create))
        .route("/campaigns/my", get(campaigns::my_campaigns))
        .route(
            "/campaigns/{id}",
            get(campaigns::get_by_id).put(campaigns::update),
        )
}

//! Campaign review handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use fundlift_audit::AuditAction;
use fundlift_auth::AdminUser;
use fundlift_campaigns::{Campaign, CampaignFilter, CampaignStatus};
use fundlift_common::{Pagination, Result, ValidatedJson};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AdminState;

#[derive(Debug, Deserialize)]
pub struct ListAllQuery {
    pub status: Option<CampaignStatus>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RejectCampaignRequest {
    #[validate(length(min = 1, max = 1000, message = "A rejection reason is required"))]
    pub reason: String,
}

/// GET /admin/campaigns/pending
///
/// The review queue: campaigns awaiting an approve/reject decision.
pub async fn list_pending(
    State(state): State<AdminState>,
    AdminUser(_): AdminUser,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Campaign>>> {
    let filter = CampaignFilter {
        status: Some(CampaignStatus::Pending),
        ..Default::default()
    };
    let campaigns = state
        .campaigns
        .list(&filter, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(campaigns))
}

/// GET /admin/campaigns/all?status=
pub async fn list_all(
    State(state): State<AdminState>,
    AdminUser(_): AdminUser,
    Query(query): Query<ListAllQuery>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Campaign>>> {
    let filter = CampaignFilter {
        status: query.status,
        ..Default::default()
    };
    let campaigns = state
        .campaigns
        .list(&filter, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(campaigns))
}

/// POST /admin/campaigns/{id}/approve
pub async fn approve(
    State(state): State<AdminState>,
    AdminUser(ctx): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>> {
    let campaign = state.campaigns.approve(id, ctx.user_id).await?;

    state
        .audit
        .record(
            AuditAction::CampaignApproved,
            ctx.user_id,
            json!({ "campaign_id": campaign.id, "owner_id": campaign.owner_id }),
        )
        .await;

    tracing::info!(campaign_id = %campaign.id, admin_id = %ctx.user_id, "Campaign approved");

    Ok(Json(campaign))
}

/// POST /admin/campaigns/{id}/reject
pub async fn reject(
    State(state): State<AdminState>,
    AdminUser(ctx): AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<RejectCampaignRequest>,
) -> Result<Json<Campaign>> {
    let campaign = state
        .campaigns
        .reject(id, ctx.user_id, &request.reason)
        .await?;

    state
        .audit
        .record(
            AuditAction::CampaignRejected,
            ctx.user_id,
            json!({
                "campaign_id": campaign.id,
                "owner_id": campaign.owner_id,
                "reason": request.reason,
            }),
        )
        .await;

    tracing::info!(campaign_id = %campaign.id, admin_id = %ctx.user_id, "Campaign rejected");

    Ok(Json(campaign))
}

//! Campaign marketplace and owner handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use fundlift_audit::AuditAction;
use fundlift_auth::{AuthUser, BusinessOwnerUser};
use fundlift_common::{Error, Pagination, Result, ValidatedJson};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::CampaignsState;
use crate::domain::entities::{Campaign, CampaignStatus};
use crate::repository::{CampaignFilter, UpdateCampaign};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<CampaignStatus>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCampaignRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    #[validate(length(equal = 2, message = "Country must be an ISO 3166-1 alpha-2 code"))]
    pub country: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub business_plan_url: Option<String>,
    pub target_amount: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCampaignRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub business_plan_url: Option<String>,
    pub target_amount: Option<Decimal>,
}

/// GET /campaigns
///
/// Public marketplace listing. Defaults to live campaigns so the
/// storefront never shows unreviewed submissions by accident.
pub async fn list(
    State(state): State<CampaignsState>,
    Query(query): Query<ListQuery>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Campaign>>> {
    let filter = CampaignFilter {
        status: Some(query.status.unwrap_or(CampaignStatus::Live)),
        country: query.country,
        owner_id: None,
    };
    let campaigns = state
        .repos
        .campaigns
        .list(&filter, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(campaigns))
}

/// GET /campaigns/my
///
/// Owner dashboard: every campaign of the caller, all statuses.
pub async fn my_campaigns(
    State(state): State<CampaignsState>,
    BusinessOwnerUser(ctx): BusinessOwnerUser,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Campaign>>> {
    let filter = CampaignFilter {
        owner_id: Some(ctx.user_id),
        ..Default::default()
    };
    let campaigns = state
        .repos
        .campaigns
        .list(&filter, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(campaigns))
}

/// GET /campaigns/{id}
pub async fn get_by_id(
    State(state): State<CampaignsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>> {
    let campaign = state
        .repos
        .campaigns
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Campaign not found".to_string()))?;

    Ok(Json(campaign))
}

/// POST /campaigns
///
/// Business owners submit campaigns; every submission starts pending
/// and goes through admin review before the marketplace lists it.
pub async fn create(
    State(state): State<CampaignsState>,
    BusinessOwnerUser(ctx): BusinessOwnerUser,
    ValidatedJson(request): ValidatedJson<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<Campaign>)> {
    let campaign = Campaign::new(
        ctx.user_id,
        request.title,
        request.description,
        request.country,
        request.category,
        request.image_url,
        request.business_plan_url,
        request.target_amount,
    )?;
    let campaign = state.repos.campaigns.create(&campaign).await?;

    state
        .audit
        .record(
            AuditAction::CampaignCreated,
            ctx.user_id,
            json!({ "campaign_id": campaign.id, "title": campaign.title }),
        )
        .await;

    tracing::info!(campaign_id = %campaign.id, owner_id = %ctx.user_id, "Campaign submitted");

    Ok((StatusCode::CREATED, Json(campaign)))
}

/// PUT /campaigns/{id}
///
/// Partial update by the owner. Only pending campaigns are editable.
pub async fn update(
    State(state): State<CampaignsState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateCampaignRequest>,
) -> Result<Json<Campaign>> {
    let campaign = state
        .repos
        .campaigns
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Campaign not found".to_string()))?;

    if campaign.owner_id != ctx.user_id {
        return Err(Error::Authorization(
            "Only the campaign owner can edit it".to_string(),
        ));
    }

    if !campaign.is_editable() {
        return Err(Error::Validation(format!(
            "Campaigns in {} status cannot be edited",
            campaign.status
        )));
    }

    if let Some(target) = request.target_amount {
        if target <= Decimal::ZERO {
            return Err(Error::Validation(
                "Target amount must be positive".to_string(),
            ));
        }
    }

    let update = UpdateCampaign {
        title: request.title,
        description: request.description,
        category: request.category,
        image_url: request.image_url,
        business_plan_url: request.business_plan_url,
        target_amount: request.target_amount,
    };
    let updated = state
        .repos
        .campaigns
        .update_details(id, &update)
        .await?
        .ok_or_else(|| Error::Conflict("Campaign was modified concurrently".to_string()))?;

    Ok(Json(updated))
}

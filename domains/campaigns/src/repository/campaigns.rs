//! Campaign repository

use fundlift_common::{Error, Result};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Campaign, CampaignStatus};
use crate::domain::state::{CampaignEvent, CampaignStateMachine};

/// All columns in the campaigns table, used for SELECT and RETURNING clauses.
const CAMPAIGN_COLUMNS: &str = "\
    id, owner_id, title, description, country, category, \
    image_url, business_plan_url, target_amount, raised_amount, \
    status, rejection_reason, \
    approved_at, approved_by, rejected_at, rejected_by, completed_at, \
    created_at, updated_at";

/// Filters for marketplace and admin campaign listings
#[derive(Debug, Clone, Default)]
pub struct CampaignFilter {
    pub status: Option<CampaignStatus>,
    pub country: Option<String>,
    pub owner_id: Option<Uuid>,
}

/// Partial update of an editable (pending) campaign
#[derive(Debug, Clone, Default)]
pub struct UpdateCampaign {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub business_plan_url: Option<String>,
    pub target_amount: Option<Decimal>,
}

#[derive(Clone)]
pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new campaign
    pub async fn create(&self, campaign: &Campaign) -> Result<Campaign> {
        let query = format!(
            "INSERT INTO campaigns ({CAMPAIGN_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, \
                     $13, $14, $15, $16, $17, $18, $19) \
             RETURNING {CAMPAIGN_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Campaign>(&query)
            .bind(campaign.id)
            .bind(campaign.owner_id)
            .bind(&campaign.title)
            .bind(&campaign.description)
            .bind(&campaign.country)
            .bind(&campaign.category)
            .bind(&campaign.image_url)
            .bind(&campaign.business_plan_url)
            .bind(campaign.target_amount)
            .bind(campaign.raised_amount)
            .bind(campaign.status)
            .bind(&campaign.rejection_reason)
            .bind(campaign.approved_at)
            .bind(campaign.approved_by)
            .bind(campaign.rejected_at)
            .bind(campaign.rejected_by)
            .bind(campaign.completed_at)
            .bind(campaign.created_at)
            .bind(campaign.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Get campaign by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Campaign>> {
        let query = format!("SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE id = $1");
        let campaign = sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(campaign)
    }

    /// List campaigns matching the filter, newest first
    pub async fn list(
        &self,
        filter: &CampaignFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Campaign>> {
        let query = format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns \
             WHERE ($1::campaign_status IS NULL OR status = $1) \
               AND ($2::TEXT IS NULL OR country = $2) \
               AND ($3::UUID IS NULL OR owner_id = $3) \
             ORDER BY created_at DESC LIMIT $4 OFFSET $5"
        );
        let campaigns = sqlx::query_as::<_, Campaign>(&query)
            .bind(filter.status)
            .bind(&filter.country)
            .bind(filter.owner_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(campaigns)
    }

    /// Apply a partial update to a pending campaign.
    ///
    /// The status guard is in the WHERE clause so a concurrent approval
    /// cannot race the edit; `None` means the campaign is missing or no
    /// longer editable.
    pub async fn update_details(
        &self,
        id: Uuid,
        update: &UpdateCampaign,
    ) -> Result<Option<Campaign>> {
        let query = format!(
            "UPDATE campaigns SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                category = COALESCE($4, category), \
                image_url = COALESCE($5, image_url), \
                business_plan_url = COALESCE($6, business_plan_url), \
                target_amount = COALESCE($7, target_amount), \
                updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' \
             RETURNING {CAMPAIGN_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(&update.title)
            .bind(&update.description)
            .bind(&update.category)
            .bind(&update.image_url)
            .bind(&update.business_plan_url)
            .bind(update.target_amount)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    /// Approve a pending campaign, recording the approving admin.
    ///
    /// Runs the state machine against the stored status first so a
    /// duplicate approval fails with 400 instead of rewriting history.
    pub async fn approve(&self, id: Uuid, admin_id: Uuid) -> Result<Campaign> {
        let campaign = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("Campaign not found".to_string()))?;

        CampaignStateMachine::transition(campaign.status, CampaignEvent::Approve)
            .map_err(|e| Error::Validation(e.to_string()))?;

        let query = format!(
            "UPDATE campaigns SET \
                status = 'live', \
                approved_at = NOW(), \
                approved_by = $2, \
                updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' \
             RETURNING {CAMPAIGN_COLUMNS}"
        );
        let approved = sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::Conflict("Campaign was modified concurrently".to_string()))?;

        Ok(approved)
    }

    /// Reject a pending campaign with a reason, recording the rejecting admin.
    pub async fn reject(&self, id: Uuid, admin_id: Uuid, reason: &str) -> Result<Campaign> {
        let campaign = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("Campaign not found".to_string()))?;

        CampaignStateMachine::transition(campaign.status, CampaignEvent::Reject)
            .map_err(|e| Error::Validation(e.to_string()))?;

        let query = format!(
            "UPDATE campaigns SET \
                status = 'rejected', \
                rejection_reason = $3, \
                rejected_at = NOW(), \
                rejected_by = $2, \
                updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' \
             RETURNING {CAMPAIGN_COLUMNS}"
        );
        let rejected = sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(admin_id)
            .bind(reason)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::Conflict("Campaign was modified concurrently".to_string()))?;

        Ok(rejected)
    }

    /// Add a completed contribution to the campaign's raised amount.
    ///
    /// Single-statement so two concurrent confirmations cannot lose an
    /// increment; the same statement flips the campaign to completed the
    /// moment the target is reached. Only live campaigns are touched.
    pub async fn apply_contribution(&self, id: Uuid, amount: Decimal) -> Result<Option<Campaign>> {
        let query = format!(
            "UPDATE campaigns SET \
                raised_amount = raised_amount + $2, \
                status = CASE \
                    WHEN raised_amount + $2 >= target_amount THEN 'completed'::campaign_status \
                    ELSE status \
                END, \
                completed_at = CASE \
                    WHEN raised_amount + $2 >= target_amount THEN NOW() \
                    ELSE completed_at \
                END, \
                updated_at = NOW() \
             WHERE id = $1 AND status = 'live' \
             RETURNING {CAMPAIGN_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(amount)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    /// Subtract a refunded contribution from the campaign's raised amount.
    ///
    /// The campaign's status is left alone: a completed campaign stays
    /// completed, the refund only corrects the reported total. Clamped at
    /// zero so a stray refund cannot drive the amount negative.
    pub async fn reverse_contribution(
        &self,
        id: Uuid,
        amount: Decimal,
    ) -> Result<Option<Campaign>> {
        let query = format!(
            "UPDATE campaigns SET \
                raised_amount = GREATEST(raised_amount - $2, 0), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {CAMPAIGN_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(amount)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }
}

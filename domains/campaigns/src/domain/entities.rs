//! Domain entities for the Campaigns domain

use chrono::{DateTime, Utc};
use fundlift_common::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Campaign lifecycle status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default,
)]
#[sqlx(type_name = "campaign_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Pending,
    Live,
    Rejected,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Live => write!(f, "live"),
            Self::Rejected => write!(f, "rejected"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Campaign entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Campaign {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub country: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub business_plan_url: Option<String>,
    pub target_amount: Decimal,
    pub raised_amount: Decimal,
    pub status: CampaignStatus,
    pub rejection_reason: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<Uuid>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub rejected_by: Option<Uuid>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Create a new campaign in pending status, awaiting admin review.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner_id: Uuid,
        title: String,
        description: String,
        country: String,
        category: Option<String>,
        image_url: Option<String>,
        business_plan_url: Option<String>,
        target_amount: Decimal,
    ) -> Result<Self> {
        if title.is_empty() || title.len() > 200 {
            return Err(Error::Validation(
                "Title must be 1-200 characters".to_string(),
            ));
        }

        if description.is_empty() || description.len() > 5000 {
            return Err(Error::Validation(
                "Description must be 1-5000 characters".to_string(),
            ));
        }

        if target_amount <= Decimal::ZERO {
            return Err(Error::Validation(
                "Target amount must be positive".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Campaign {
            id: Uuid::new_v4(),
            owner_id,
            title,
            description,
            country,
            category,
            image_url,
            business_plan_url,
            target_amount,
            raised_amount: Decimal::ZERO,
            status: CampaignStatus::default(),
            rejection_reason: None,
            approved_at: None,
            approved_by: None,
            rejected_at: None,
            rejected_by: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check whether the campaign currently accepts contributions
    pub fn is_live(&self) -> bool {
        self.status == CampaignStatus::Live
    }

    /// Check whether the owner may still edit the campaign.
    ///
    /// Only pending campaigns are editable; once a campaign goes live
    /// its listing is frozen for investors.
    pub fn is_editable(&self) -> bool {
        self.status == CampaignStatus::Pending
    }

    /// Funding progress as a fraction of the target, capped at 1.0
    pub fn funding_progress(&self) -> Decimal {
        if self.target_amount.is_zero() {
            return Decimal::ZERO;
        }
        (self.raised_amount / self.target_amount).min(Decimal::ONE)
    }
}

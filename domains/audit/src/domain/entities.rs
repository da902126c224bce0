//! Audit log entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// Actions recorded in the audit log.
///
/// Stored as text so new actions never require a migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    UserSignup,
    UserLogin,
    CampaignCreated,
    CampaignApproved,
    CampaignRejected,
    KycStatusUpdated,
    PaymentInitiated,
    PaymentConfirmed,
    PaymentRefunded,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::UserSignup => "USER_SIGNUP",
            AuditAction::UserLogin => "USER_LOGIN",
            AuditAction::CampaignCreated => "CAMPAIGN_CREATED",
            AuditAction::CampaignApproved => "CAMPAIGN_APPROVED",
            AuditAction::CampaignRejected => "CAMPAIGN_REJECTED",
            AuditAction::KycStatusUpdated => "KYC_STATUS_UPDATED",
            AuditAction::PaymentInitiated => "PAYMENT_INITIATED",
            AuditAction::PaymentConfirmed => "PAYMENT_CONFIRMED",
            AuditAction::PaymentRefunded => "PAYMENT_REFUNDED",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub action: String,
    pub actor_id: Uuid,
    pub details: Json<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

//! Domain entities for the Fundlift users domain

use chrono::{DateTime, Utc};
use fundlift_auth::UserRole;
use fundlift_common::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateEmail;

use crate::domain::validation::validate_country_code;

/// KYC verification status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default,
)]
#[sqlx(type_name = "kyc_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KycStatus::Pending => write!(f, "pending"),
            KycStatus::Verified => write!(f, "verified"),
            KycStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub country: String,
    pub kyc_status: KycStatus,
    pub kyc_updated_at: Option<DateTime<Utc>>,
    pub kyc_updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user profile with validation.
    ///
    /// The id comes from the external identity provider; every new
    /// profile starts with pending KYC.
    pub fn new(
        id: Uuid,
        email: String,
        role: UserRole,
        country: String,
        full_name: Option<String>,
    ) -> Result<Self> {
        if !email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        if !validate_country_code(&country) {
            return Err(Error::Validation(
                "Country must be an ISO 3166-1 alpha-2 code".to_string(),
            ));
        }

        if let Some(ref name) = full_name {
            if name.is_empty() || name.len() > 100 {
                return Err(Error::Validation(
                    "Name must be 1-100 characters".to_string(),
                ));
            }
        }

        let now = Utc::now();
        Ok(User {
            id,
            email,
            full_name,
            role,
            country,
            kyc_status: KycStatus::default(),
            kyc_updated_at: None,
            kyc_updated_by: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a KYC review decision
    pub fn update_kyc(&mut self, status: KycStatus, reviewer: Uuid) {
        let now = Utc::now();
        self.kyc_status = status;
        self.kyc_updated_at = Some(now);
        self.kyc_updated_by = Some(reviewer);
        self.updated_at = now;
    }

    /// Check if this user has passed KYC verification
    pub fn is_kyc_verified(&self) -> bool {
        self.kyc_status == KycStatus::Verified
    }
}

//! Role and token response types shared across the platform

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User roles enforced by the backend.
///
/// Stored on the user row and carried in the custom JWT; every
/// authorization decision is an equality/membership check on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Investor,
    BusinessOwner,
    Admin,
}

impl UserRole {
    /// Check if this role can moderate campaigns and manage users
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role can participate in the marketplace
    /// (create campaigns or invest)
    pub fn is_participant(&self) -> bool {
        matches!(self, UserRole::Investor | UserRole::BusinessOwner)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Investor => write!(f, "investor"),
            UserRole::BusinessOwner => write!(f, "business_owner"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// Response body for token-issuing endpoints (signup, login, refresh)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    pub user_id: Uuid,
    pub role: UserRole,
}

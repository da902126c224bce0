//! Authorization context for authenticated users

use uuid::Uuid;

use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::types::UserRole;

/// Represents an authenticated user context, built entirely from the
/// validated JWT (no database round-trip per request).
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl AuthContext {
    /// Build a context from validated token claims
    pub fn from_claims(claims: TokenClaims) -> Result<Self, AuthError> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        Ok(Self {
            user_id,
            email: claims.email,
            role: claims.role,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_investor(&self) -> bool {
        self.role == UserRole::Investor
    }

    pub fn is_business_owner(&self) -> bool {
        self.role == UserRole::BusinessOwner
    }
}

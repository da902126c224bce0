//! JWT claims types

use serde::{Deserialize, Serialize};

use crate::types::UserRole;

/// Claims carried by the custom JWT issued by this backend.
///
/// This is the only token handed to clients; identity-provider tokens
/// never leave the backend.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email
    pub email: String,
    /// Role claim driving authorization decisions
    pub role: UserRole,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}

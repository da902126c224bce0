//! JWT issuance, validation, and token extraction helpers

use axum::http::HeaderValue;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::TokenClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::types::{TokenResponse, UserRole};

/// Issue a custom JWT for an authenticated user.
///
/// This is the only token sent to clients; identity-provider credentials
/// stay backend-side.
pub fn issue_token(
    config: &AuthConfig,
    user_id: Uuid,
    email: &str,
    role: UserRole,
) -> Result<TokenResponse, AuthError> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(config.token_ttl_minutes);

    let claims = TokenClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        iat: now.timestamp() as u64,
        exp: expires_at.timestamp() as u64,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    let access_token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to encode JWT");
            AuthError::TokenCreation
        })?;

    Ok(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: config.token_ttl_minutes * 60,
        user_id,
        role,
    })
}

/// Validate a custom JWT and return its claims
pub(crate) fn validate_token(token: &str, config: &AuthConfig) -> Result<TokenClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<TokenClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}

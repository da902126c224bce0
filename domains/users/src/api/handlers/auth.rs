//! Authentication handlers
//!
//! Signup and login delegate credentials to the external identity
//! provider; the platform only ever issues its own JWT.

use axum::{extract::State, http::StatusCode, Json};
use fundlift_audit::AuditAction;
use fundlift_auth::{issue_token, AuthError, AuthUser, TokenResponse, UserRole};
use fundlift_common::{Error, Result, ValidatedJson};
use fundlift_identity::IdentityError;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::api::middleware::UsersState;
use crate::domain::entities::User;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub role: UserRole,
    pub country: String,
    #[validate(length(min = 1, max = 100))]
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

fn identity_error(e: IdentityError) -> Error {
    match e {
        IdentityError::EmailTaken => Error::Conflict("Email already registered".to_string()),
        IdentityError::InvalidCredentials => {
            Error::Authentication("Invalid email or password".to_string())
        }
        other => Error::Internal(format!("Identity provider error: {}", other)),
    }
}

fn token_error(e: AuthError) -> Error {
    Error::Internal(format!("Failed to issue token: {}", e))
}

/// POST /auth/signup
///
/// Registers the credential with the identity provider, creates the
/// platform profile, and returns a fresh token.
pub async fn signup(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<TokenResponse>)> {
    let provider_user = state
        .identity
        .create_user(
            &request.email,
            &request.password,
            request.full_name.as_deref(),
        )
        .await
        .map_err(identity_error)?;

    let user = User::new(
        provider_user.id,
        request.email,
        request.role,
        request.country,
        request.full_name,
    )?;
    let user = state.repos.users.create(&user).await?;

    state
        .audit
        .record(
            AuditAction::UserSignup,
            user.id,
            json!({ "email": user.email, "role": user.role }),
        )
        .await;

    tracing::info!(user_id = %user.id, role = %user.role, "User signed up");

    let token = issue_token(state.auth.config(), user.id, &user.email, user.role)
        .map_err(token_error)?;

    Ok((StatusCode::CREATED, Json(token)))
}

/// POST /auth/login
pub async fn login(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let provider_user = state
        .identity
        .verify_password(&request.email, &request.password)
        .await
        .map_err(identity_error)?;

    // A provider identity without a platform profile cannot log in
    let user = state
        .repos
        .users
        .get_by_id(provider_user.id)
        .await?
        .ok_or_else(|| Error::Authentication("Invalid email or password".to_string()))?;

    state
        .audit
        .record(AuditAction::UserLogin, user.id, json!({ "email": user.email }))
        .await;

    let token = issue_token(state.auth.config(), user.id, &user.email, user.role)
        .map_err(token_error)?;

    Ok(Json(token))
}

/// GET /auth/me
pub async fn me(State(state): State<UsersState>, AuthUser(ctx): AuthUser) -> Result<Json<User>> {
    let user = state
        .repos
        .users
        .get_by_id(ctx.user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User profile not found".to_string()))?;

    Ok(Json(user))
}

/// POST /auth/refresh
///
/// Issues a new token from a still-valid one. No database round trip;
/// the current token already carries the role.
pub async fn refresh(
    State(state): State<UsersState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<TokenResponse>> {
    let token = issue_token(state.auth.config(), ctx.user_id, &ctx.email, ctx.role)
        .map_err(token_error)?;

    Ok(Json(token))
}

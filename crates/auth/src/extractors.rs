//! Axum extractors for authentication and role enforcement
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::extract_bearer_token;
use crate::types::UserRole;

/// Authenticated user extractor (any role)
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let auth_context = backend.authenticate(&token)?;

        Ok(AuthUser(auth_context))
    }
}

/// Investor-only extractor.
///
/// Like `AuthUser` but rejects other roles with 403 FORBIDDEN.
/// Used for payment initiation.
#[derive(Debug)]
pub struct InvestorUser(pub AuthContext);

impl<S> FromRequestParts<S> for InvestorUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(ctx) = AuthUser::from_request_parts(parts, state).await?;

        if ctx.role != UserRole::Investor {
            return Err(AuthError::InsufficientRole("Investor"));
        }

        Ok(InvestorUser(ctx))
    }
}

/// Business-owner-only extractor.
///
/// Used for campaign creation and owner dashboards.
#[derive(Debug)]
pub struct BusinessOwnerUser(pub AuthContext);

impl<S> FromRequestParts<S> for BusinessOwnerUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(ctx) = AuthUser::from_request_parts(parts, state).await?;

        if ctx.role != UserRole::BusinessOwner {
            return Err(AuthError::InsufficientRole("Business owner"));
        }

        Ok(BusinessOwnerUser(ctx))
    }
}

/// Admin-only extractor.
///
/// Guards every `/admin/*` route.
#[derive(Debug)]
pub struct AdminUser(pub AuthContext);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(ctx) = AuthUser::from_request_parts(parts, state).await?;

        if ctx.role != UserRole::Admin {
            return Err(AuthError::InsufficientRole("Admin"));
        }

        Ok(AdminUser(ctx))
    }
}

/// Marketplace-participant extractor: investor or business owner.
#[derive(Debug)]
pub struct ParticipantUser(pub AuthContext);

impl<S> FromRequestParts<S> for ParticipantUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(ctx) = AuthUser::from_request_parts(parts, state).await?;

        if !ctx.role.is_participant() {
            return Err(AuthError::InsufficientRole("Investor or business owner"));
        }

        Ok(ParticipantUser(ctx))
    }
}

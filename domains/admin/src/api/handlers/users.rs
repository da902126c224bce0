//! User administration handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use fundlift_audit::AuditAction;
use fundlift_auth::AdminUser;
use fundlift_common::{Error, Pagination, Result, ValidatedJson};
use fundlift_users::{KycStatus, User, UserRole};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AdminState;

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<UserRole>,
    pub kyc_status: Option<KycStatus>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateKycRequest {
    pub status: KycStatus,
}

/// GET /admin/users?role=&kyc_status=
pub async fn list(
    State(state): State<AdminState>,
    AdminUser(_): AdminUser,
    Query(query): Query<ListUsersQuery>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<User>>> {
    let users = state
        .users
        .list(
            query.role,
            query.kyc_status,
            pagination.limit(),
            pagination.offset(),
        )
        .await?;

    Ok(Json(users))
}

/// POST /admin/users/{id}/kyc
pub async fn update_kyc(
    State(state): State<AdminState>,
    AdminUser(ctx): AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateKycRequest>,
) -> Result<Json<User>> {
    let user = state
        .users
        .update_kyc_status(id, request.status, ctx.user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    state
        .audit
        .record(
            AuditAction::KycStatusUpdated,
            ctx.user_id,
            json!({ "user_id": user.id, "kyc_status": user.kyc_status }),
        )
        .await;

    tracing::info!(user_id = %user.id, kyc_status = %user.kyc_status, "KYC status updated");

    Ok(Json(user))
}

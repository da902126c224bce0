//! Audit log and platform statistics handlers

use axum::{
    extract::{Query, State},
    Json,
};
use fundlift_audit::AuditLogEntry;
use fundlift_auth::AdminUser;
use fundlift_common::Result;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::AdminState;
use crate::repository::PlatformStats;

const DEFAULT_AUDIT_LIMIT: i64 = 100;
const MAX_AUDIT_LIMIT: i64 = 500;

#[derive(Debug, Deserialize)]
pub struct AuditLogQuery {
    pub action: Option<String>,
    pub actor_id: Option<Uuid>,
    pub limit: Option<i64>,
}

/// GET /admin/audit-logs?action=&actor_id=&limit=
pub async fn audit_logs(
    State(state): State<AdminState>,
    AdminUser(_): AdminUser,
    Query(query): Query<AuditLogQuery>,
) -> Result<Json<Vec<AuditLogEntry>>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_AUDIT_LIMIT)
        .clamp(1, MAX_AUDIT_LIMIT);
    let entries = state
        .audit
        .list(query.action.as_deref(), query.actor_id, limit)
        .await?;

    Ok(Json(entries))
}

/// GET /admin/stats
pub async fn stats(
    State(state): State<AdminState>,
    AdminUser(_): AdminUser,
) -> Result<Json<PlatformStats>> {
    let stats = state.stats.collect().await?;
    Ok(Json(stats))
}

//! Audit log repository

use fundlift_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{AuditAction, AuditLogEntry};

/// All columns in the audit_logs table, used for SELECT and RETURNING clauses.
const AUDIT_LOG_COLUMNS: &str = "id, action, actor_id, details, created_at";

#[derive(Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record an audit event.
    ///
    /// Best-effort: failures are logged and swallowed so auditing never
    /// fails the request that triggered it.
    pub async fn record(&self, action: AuditAction, actor_id: Uuid, details: serde_json::Value) {
        let result = sqlx::query(
            "INSERT INTO audit_logs (action, actor_id, details) VALUES ($1, $2, $3)",
        )
        .bind(action.as_str())
        .bind(actor_id)
        .bind(&details)
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            tracing::warn!(error = %e, action = %action, actor_id = %actor_id, "Failed to record audit event");
        }
    }

    /// List audit entries, newest first, with optional action/actor filters
    pub async fn list(
        &self,
        action: Option<&str>,
        actor_id: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<AuditLogEntry>> {
        let query = format!(
            "SELECT {AUDIT_LOG_COLUMNS} FROM audit_logs \
             WHERE ($1::TEXT IS NULL OR action = $1) \
               AND ($2::UUID IS NULL OR actor_id = $2) \
             ORDER BY created_at DESC LIMIT $3"
        );
        let entries = sqlx::query_as::<_, AuditLogEntry>(&query)
            .bind(action)
            .bind(actor_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(entries)
    }
}

//! Transaction repository

use fundlift_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Transaction, TransactionStatus};

/// All columns in the transactions table, used for SELECT and RETURNING clauses.
const TRANSACTION_COLUMNS: &str = "\
    id, user_id, campaign_id, amount, currency, payment_method, \
    status, gateway_session_id, gateway_reference, completed_at, \
    created_at, updated_at";

#[derive(Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new transaction
    pub async fn create(&self, txn: &Transaction) -> Result<Transaction> {
        let query = format!(
            "INSERT INTO transactions ({TRANSACTION_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {TRANSACTION_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Transaction>(&query)
            .bind(txn.id)
            .bind(txn.user_id)
            .bind(txn.campaign_id)
            .bind(txn.amount)
            .bind(&txn.currency)
            .bind(txn.payment_method)
            .bind(txn.status)
            .bind(&txn.gateway_session_id)
            .bind(&txn.gateway_reference)
            .bind(txn.completed_at)
            .bind(txn.created_at)
            .bind(txn.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Get transaction by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Transaction>> {
        let query = format!("SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = $1");
        let txn = sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(txn)
    }

    /// List a user's transactions, newest first
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transaction>> {
        let query = format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions \
             WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        );
        let txns = sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(txns)
    }

    /// Attach the gateway session and move the transaction to processing.
    ///
    /// Guarded to pending in the WHERE clause; `None` means the row is
    /// missing or already past this step.
    pub async fn mark_processing(
        &self,
        id: Uuid,
        session_id: &str,
    ) -> Result<Option<Transaction>> {
        let query = format!(
            "UPDATE transactions SET \
                status = 'processing', \
                gateway_session_id = $2, \
                updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' \
             RETURNING {TRANSACTION_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(session_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    /// Record the gateway's verdict.
    ///
    /// Guarded to the status the caller observed, so a concurrent
    /// callback loses the race instead of overwriting; completed
    /// transactions also get their completion timestamp here.
    pub async fn record_gateway_verdict(
        &self,
        id: Uuid,
        from: TransactionStatus,
        status: TransactionStatus,
        gateway_reference: &str,
    ) -> Result<Option<Transaction>> {
        let query = format!(
            "UPDATE transactions SET \
                status = $3, \
                gateway_reference = $4, \
                completed_at = CASE WHEN $3 = 'completed'::transaction_status \
                    THEN NOW() ELSE completed_at END, \
                updated_at = NOW() \
             WHERE id = $1 AND status = $2 \
             RETURNING {TRANSACTION_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(from)
            .bind(status)
            .bind(gateway_reference)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }
}

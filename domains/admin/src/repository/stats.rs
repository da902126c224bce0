//! Platform statistics repository

use fundlift_common::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

/// Headline numbers for the admin dashboard
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PlatformStats {
    pub total_users: i64,
    pub total_campaigns: i64,
    pub live_campaigns: i64,
    pub pending_campaigns: i64,
    pub total_raised: Decimal,
    pub total_transactions: i64,
}

#[derive(Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Collect platform totals in a single round trip
    pub async fn collect(&self) -> Result<PlatformStats> {
        let stats = sqlx::query_as::<_, PlatformStats>(
            "SELECT \
                (SELECT COUNT(*) FROM users) AS total_users, \
                (SELECT COUNT(*) FROM campaigns) AS total_campaigns, \
                (SELECT COUNT(*) FROM campaigns WHERE status = 'live') AS live_campaigns, \
                (SELECT COUNT(*) FROM campaigns WHERE status = 'pending') AS pending_campaigns, \
                (SELECT COALESCE(SUM(raised_amount), 0) FROM campaigns) AS total_raised, \
                (SELECT COUNT(*) FROM transactions) AS total_transactions",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }
}

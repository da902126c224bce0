//! User repository

use fundlift_auth::UserRole;
use fundlift_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{KycStatus, User};

/// All columns in the users table, used for SELECT and RETURNING clauses.
const USER_COLUMNS: &str = "\
    id, email, full_name, role, country, \
    kyc_status, kyc_updated_at, kyc_updated_by, \
    created_at, updated_at";

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user profile
    pub async fn create(&self, user: &User) -> Result<User> {
        let query = format!(
            "INSERT INTO users ({USER_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {USER_COLUMNS}"
        );
        let created = sqlx::query_as::<_, User>(&query)
            .bind(user.id)
            .bind(&user.email)
            .bind(&user.full_name)
            .bind(user.role)
            .bind(&user.country)
            .bind(user.kyc_status)
            .bind(user.kyc_updated_at)
            .bind(user.kyc_updated_by)
            .bind(user.created_at)
            .bind(user.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// List users with optional role and KYC filters (admin view)
    pub async fn list(
        &self,
        role: Option<UserRole>,
        kyc_status: Option<KycStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE ($1::user_role IS NULL OR role = $1) \
               AND ($2::kyc_status IS NULL OR kyc_status = $2) \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4"
        );
        let users = sqlx::query_as::<_, User>(&query)
            .bind(role)
            .bind(kyc_status)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    /// Update a user's KYC status, recording the reviewing admin
    pub async fn update_kyc_status(
        &self,
        user_id: Uuid,
        status: KycStatus,
        reviewer: Uuid,
    ) -> Result<Option<User>> {
        let query = format!(
            "UPDATE users SET \
                kyc_status = $2, \
                kyc_updated_at = NOW(), \
                kyc_updated_by = $3, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(status)
            .bind(reviewer)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }
}

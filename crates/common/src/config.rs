//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Default JWT lifetime in minutes
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// JWT signing
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,

    /// External identity provider (rest, mock)
    pub identity_provider: String,
    pub identity_base_url: String,
    pub identity_api_key: String,

    /// Payment gateway (stub)
    pub payment_provider: String,
    pub payment_checkout_base_url: String,
    pub payment_return_url: String,

    /// Runtime configuration
    pub log_level: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,
            token_ttl_minutes: env::var("JWT_EXPIRE_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES),

            identity_provider: env::var("IDENTITY_PROVIDER")
                .unwrap_or_else(|_| "mock".to_string()),
            identity_base_url: env::var("IDENTITY_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:9099".to_string()),
            identity_api_key: env::var("IDENTITY_API_KEY").unwrap_or_default(),

            payment_provider: env::var("PAYMENT_PROVIDER").unwrap_or_else(|_| "stub".to_string()),
            payment_checkout_base_url: env::var("PAYMENT_CHECKOUT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            payment_return_url: env::var("PAYMENT_RETURN_URL")
                .unwrap_or_else(|_| "http://localhost:3000/payment-complete".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}

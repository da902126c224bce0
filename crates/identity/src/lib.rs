//! Fundlift Identity Service
//!
//! Delegates user identity to a managed external auth provider:
//! - REST client for a hosted identity API in production
//! - Mock identity provider for testing and development
//! - Configurable provider, base URL, and API key

pub mod client;
pub mod mock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity configuration error: {0}")]
    Configuration(String),

    #[error("Identity request error: {0}")]
    Request(String),

    #[error("Identity response error: {0}")]
    Response(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// User record held by the external identity provider.
///
/// Only the fields the platform needs; credentials stay provider-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderUser {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
}

/// Identity service configuration
#[derive(Clone)]
pub struct IdentityConfig {
    /// Identity provider (rest, mock)
    pub provider: String,
    /// Base URL for the hosted identity API
    pub base_url: String,
    /// API key for authenticating with the identity API
    pub api_key: String,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Identity provider trait for external auth backends
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a user with the provider. The provider owns the credential;
    /// only the resulting identity comes back.
    async fn create_user(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<ProviderUser, IdentityError>;

    /// Look up a user by email. Returns `None` when unknown.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<ProviderUser>, IdentityError>;

    /// Check a credential with the provider. Returns the identity on
    /// success, `InvalidCredentials` on a wrong email or password.
    async fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, IdentityError>;
}

/// Factory for creating IdentityProvider implementations
pub struct IdentityProviderFactory;

impl IdentityProviderFactory {
    pub fn create(config: IdentityConfig) -> Result<Box<dyn IdentityProvider>, IdentityError> {
        match config.provider.as_str() {
            "rest" => {
                tracing::info!("Creating REST identity provider");
                Ok(Box::new(client::RestIdentityProvider::new(config)?))
            }
            "mock" => {
                tracing::info!("Creating mock identity provider");
                Ok(Box::new(mock::MockIdentityProvider::new()))
            }
            provider => Err(IdentityError::Configuration(format!(
                "Unknown identity provider: {}. Supported providers: rest, mock",
                provider
            ))),
        }
    }
}

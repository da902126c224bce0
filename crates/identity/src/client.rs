//! REST identity provider client
//!
//! HTTP client for a hosted identity API exposing `POST {base}/v1/users`
//! and `GET {base}/v1/users?email=` with bearer-key authentication.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{IdentityConfig, IdentityError, IdentityProvider, ProviderUser};

/// Real HTTP client for the hosted identity provider.
pub struct RestIdentityProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct CreateUserBody<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
}

#[derive(Serialize)]
struct VerifyPasswordBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ProviderUserBody {
    id: Uuid,
    email: String,
    display_name: Option<String>,
}

impl From<ProviderUserBody> for ProviderUser {
    fn from(body: ProviderUserBody) -> Self {
        ProviderUser {
            id: body.id,
            email: body.email,
            display_name: body.display_name,
        }
    }
}

impl RestIdentityProvider {
    /// Create a new REST identity provider from configuration.
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        if config.api_key.is_empty() {
            return Err(IdentityError::Configuration(
                "IDENTITY_API_KEY is required for the rest provider".to_string(),
            ));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    fn users_url(&self) -> String {
        format!("{}/v1/users", self.base_url)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn create_user(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<ProviderUser, IdentityError> {
        let response = self
            .http
            .post(self.users_url())
            .bearer_auth(&self.api_key)
            .json(&CreateUserBody {
                email,
                password,
                display_name,
            })
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        if response.status() == reqwest::StatusCode::CONFLICT {
            return Err(IdentityError::EmailTaken);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(IdentityError::Response(format!(
                "Identity API returned {}: {}",
                status, body
            )));
        }

        let user: ProviderUserBody = response
            .json()
            .await
            .map_err(|e| IdentityError::Response(e.to_string()))?;

        tracing::debug!(user_id = %user.id, "Identity provider user created");
        Ok(user.into())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<ProviderUser>, IdentityError> {
        let response = self
            .http
            .get(self.users_url())
            .bearer_auth(&self.api_key)
            .query(&[("email", email)])
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(IdentityError::Response(format!(
                "Identity API returned {}: {}",
                status, body
            )));
        }

        let user: ProviderUserBody = response
            .json()
            .await
            .map_err(|e| IdentityError::Response(e.to_string()))?;

        Ok(Some(user.into()))
    }

    async fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, IdentityError> {
        let response = self
            .http
            .post(format!("{}/verify", self.users_url()))
            .bearer_auth(&self.api_key)
            .json(&VerifyPasswordBody { email, password })
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        // The provider answers 401 for a bad password and 404 for an
        // unknown email; both look the same to callers.
        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::NOT_FOUND
        {
            return Err(IdentityError::InvalidCredentials);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(IdentityError::Response(format!(
                "Identity API returned {}: {}",
                status, body
            )));
        }

        let user: ProviderUserBody = response
            .json()
            .await
            .map_err(|e| IdentityError::Response(e.to_string()))?;

        Ok(user.into())
    }
}

//! Concrete authentication backend
//!
//! Wraps `AuthConfig` and performs token validation. The custom JWT
//! carries the role claim, so authentication is a pure signature/expiry
//! check with no database lookup.

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Validate a bearer token and build the request's auth context
    pub(crate) fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_token(token, &self.config)?;
        AuthContext::from_claims(claims)
    }
}

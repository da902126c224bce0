//! Mock Identity Provider Implementation
//!
//! In-memory provider for testing and development:
//! - `MockIdentityProvider`: stores users keyed by email, records calls
//! - Duplicate emails are rejected like the real provider (409 → EmailTaken)

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::{IdentityError, IdentityProvider, ProviderUser};

/// A recorded create-user call, for test assertions
#[derive(Debug, Clone)]
pub struct RecordedSignup {
    pub email: String,
    pub display_name: Option<String>,
}

/// In-memory identity provider.
#[derive(Default)]
pub struct MockIdentityProvider {
    users: Arc<RwLock<HashMap<String, (ProviderUser, String)>>>,
    signups: Arc<RwLock<Vec<RecordedSignup>>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user directly, bypassing create_user
    pub fn seed_user(&self, id: Uuid, email: &str, password: &str, display_name: Option<&str>) {
        let user = ProviderUser {
            id,
            email: email.to_string(),
            display_name: display_name.map(str::to_string),
        };
        self.users
            .write()
            .unwrap()
            .insert(email.to_string(), (user, password.to_string()));
    }

    /// Signup calls recorded so far
    pub fn recorded_signups(&self) -> Vec<RecordedSignup> {
        self.signups.read().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn create_user(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<ProviderUser, IdentityError> {
        let mut users = self.users.write().unwrap();
        if users.contains_key(email) {
            return Err(IdentityError::EmailTaken);
        }

        let user = ProviderUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            display_name: display_name.map(str::to_string),
        };
        users.insert(email.to_string(), (user.clone(), password.to_string()));

        self.signups.write().unwrap().push(RecordedSignup {
            email: email.to_string(),
            display_name: display_name.map(str::to_string),
        });

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<ProviderUser>, IdentityError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .get(email)
            .map(|(user, _)| user.clone()))
    }

    async fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, IdentityError> {
        match self.users.read().unwrap().get(email) {
            Some((user, stored)) if stored == password => Ok(user.clone()),
            _ => Err(IdentityError::InvalidCredentials),
        }
    }
}

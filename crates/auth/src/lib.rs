//! Authentication middleware for the Fundlift API
//!
//! Issues and validates the platform's custom JWT (HS256, shared secret)
//! and provides axum extractors that work with any domain state
//! implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod types;

pub use backend::AuthBackend;
pub use claims::TokenClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::{AdminUser, AuthUser, BusinessOwnerUser, InvestorUser, ParticipantUser};
pub use jwt::issue_token;
pub use types::{TokenResponse, UserRole};

//! Users domain: accounts, roles, KYC status, and the `/auth` API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{KycStatus, User};
pub use domain::validation::validate_country_code;

// Re-export repository types
pub use repository::{UserRepository, UsersRepositories};

// Re-export API types
pub use api::routes;
pub use api::UsersState;

// Re-export auth types from fundlift-auth for convenience
pub use fundlift_auth::{AuthBackend, AuthConfig, AuthContext, AuthUser, TokenResponse, UserRole};

//! Route definitions for the Users domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::auth;
use super::middleware::UsersState;

/// Create authentication routes
fn auth_routes() -> Router<UsersState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/auth/refresh", post(auth::refresh))
}

/// Create all Users domain API routes
pub fn routes() -> Router<UsersState> {
    Router::new().merge(auth_routes())
}

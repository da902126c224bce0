//! Fundlift application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use fundlift_admin::{AdminState, StatsRepository};
use fundlift_audit::AuditLogRepository;
use fundlift_auth::{AuthBackend, AuthConfig};
use fundlift_campaigns::{CampaignRepository, CampaignsRepositories, CampaignsState};
use fundlift_common::Config;
use fundlift_gateway::{GatewayConfig, PaymentGatewayFactory};
use fundlift_identity::{IdentityConfig, IdentityProvider, IdentityProviderFactory};
use fundlift_payments::{PaymentsRepositories, PaymentsState};
use fundlift_users::{UserRepository, UsersRepositories, UsersState};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Maximum request body size (1 MiB); campaign media lives elsewhere,
/// so the JSON API never needs more.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Shared infrastructure: JWT backend and the audit log
    let auth = AuthBackend::new(AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        token_ttl_minutes: config.token_ttl_minutes,
    });
    let audit = AuditLogRepository::new(pool.clone());

    // External services
    let identity_config = IdentityConfig {
        provider: config.identity_provider.clone(),
        base_url: config.identity_base_url.clone(),
        api_key: config.identity_api_key.clone(),
    };
    let identity: Arc<dyn IdentityProvider> =
        Arc::from(IdentityProviderFactory::create(identity_config)?);

    let gateway_config = GatewayConfig {
        provider: config.payment_provider.clone(),
        checkout_base_url: config.payment_checkout_base_url.clone(),
    };
    let gateway = Arc::from(PaymentGatewayFactory::create(gateway_config)?);

    // Domain states
    let users_state = UsersState {
        repos: UsersRepositories::new(pool.clone()),
        auth: auth.clone(),
        identity,
        audit: audit.clone(),
    };

    let campaigns_state = CampaignsState {
        repos: CampaignsRepositories::new(pool.clone()),
        auth: auth.clone(),
        audit: audit.clone(),
    };

    let payments_state = PaymentsState {
        repos: PaymentsRepositories::new(pool.clone()),
        campaigns: CampaignRepository::new(pool.clone()),
        gateway,
        auth: auth.clone(),
        audit: audit.clone(),
        return_url: config.payment_return_url.clone(),
    };

    let admin_state = AdminState {
        users: UserRepository::new(pool.clone()),
        campaigns: CampaignRepository::new(pool.clone()),
        stats: StatsRepository::new(pool.clone()),
        audit,
        auth,
    };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Fundlift API v0.1.0" }))
        .merge(fundlift_users::routes().with_state(users_state))
        .merge(fundlift_campaigns::routes().with_state(campaigns_state))
        .merge(fundlift_payments::routes().with_state(payments_state))
        .merge(fundlift_admin::routes().with_state(admin_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// CORS layer from a comma-separated origin list; `*` opens everything
/// for local development.
pub fn build_cors_layer(allowed_origins: &str) -> CorsLayer {
    if allowed_origins.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Request body size cap for the JSON API
pub fn body_limit_layer() -> DefaultBodyLimit {
    DefaultBodyLimit::max(MAX_BODY_BYTES)
}

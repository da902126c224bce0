//! Fundlift Payment Gateway Service
//!
//! Abstracts the external payment processor behind a trait so a real
//! provider can replace the development stub without touching the
//! payments domain:
//! - Stub gateway with deterministic sessions for development and tests
//! - Configurable provider and checkout base URL

pub mod stub;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Gateway configuration error: {0}")]
    Configuration(String),

    #[error("Gateway request error: {0}")]
    Request(String),

    #[error("Gateway response error: {0}")]
    Response(String),
}

/// Checkout session created with the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub checkout_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Result of verifying a payment with the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayVerification {
    pub succeeded: bool,
    pub gateway_reference: String,
}

/// Gateway service configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Payment provider (stub)
    pub provider: String,
    /// Base URL used to build stub checkout links
    pub checkout_base_url: String,
}

/// Payment gateway trait for external processors
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a checkout session for the given transaction reference.
    /// The caller redirects the payer to `checkout_url`.
    async fn create_session(
        &self,
        amount: Decimal,
        currency: &str,
        reference: &str,
        return_url: &str,
    ) -> Result<CheckoutSession, GatewayError>;

    /// Verify a payment session's outcome with the gateway.
    async fn verify_payment(&self, session_id: &str) -> Result<GatewayVerification, GatewayError>;
}

/// Factory for creating PaymentGateway implementations
pub struct PaymentGatewayFactory;

impl PaymentGatewayFactory {
    pub fn create(config: GatewayConfig) -> Result<Box<dyn PaymentGateway>, GatewayError> {
        match config.provider.as_str() {
            "stub" => {
                tracing::info!("Creating stub payment gateway");
                Ok(Box::new(stub::StubPaymentGateway::new(
                    config.checkout_base_url,
                )))
            }
            provider => Err(GatewayError::Configuration(format!(
                "Unknown payment provider: {}. Supported providers: stub",
                provider
            ))),
        }
    }
}

//! Stub Payment Gateway Implementation
//!
//! Development gateway with deterministic session ids and a local
//! checkout page. Records created sessions for test assertions.
//! Replace with a real processor (Stripe, Paystack, Flutterwave) in
//! production.

use std::sync::{Arc, RwLock};

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::{CheckoutSession, GatewayError, GatewayVerification, PaymentGateway};

/// A recorded checkout session, for test assertions
#[derive(Debug, Clone)]
pub struct RecordedSession {
    pub reference: String,
    pub amount: Decimal,
    pub currency: String,
    pub return_url: String,
}

/// Stub gateway: sessions succeed immediately on verification.
pub struct StubPaymentGateway {
    checkout_base_url: String,
    sessions: Arc<RwLock<Vec<RecordedSession>>>,
}

impl StubPaymentGateway {
    pub fn new(checkout_base_url: String) -> Self {
        Self {
            checkout_base_url: checkout_base_url.trim_end_matches('/').to_string(),
            sessions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Sessions created so far
    pub fn recorded_sessions(&self) -> Vec<RecordedSession> {
        self.sessions.read().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PaymentGateway for StubPaymentGateway {
    async fn create_session(
        &self,
        amount: Decimal,
        currency: &str,
        reference: &str,
        return_url: &str,
    ) -> Result<CheckoutSession, GatewayError> {
        self.sessions.write().unwrap().push(RecordedSession {
            reference: reference.to_string(),
            amount,
            currency: currency.to_string(),
            return_url: return_url.to_string(),
        });

        tracing::debug!(reference = %reference, %amount, "Stub checkout session created");

        Ok(CheckoutSession {
            session_id: format!("stub_session_{}", reference),
            checkout_url: format!(
                "{}/payments/stub-checkout?ref={}",
                self.checkout_base_url, reference
            ),
            expires_at: Some(Utc::now() + Duration::minutes(30)),
        })
    }

    async fn verify_payment(&self, session_id: &str) -> Result<GatewayVerification, GatewayError> {
        // Stub verification always reports success
        Ok(GatewayVerification {
            succeeded: true,
            gateway_reference: format!("stub_ref_{}", session_id),
        })
    }
}

//! Route definitions for the Payments domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::payments;
use super::middleware::PaymentsState;

/// Create all Payments domain API routes
pub fn routes() -> Router<PaymentsState> {
    Router::new()
        .route("/payments/initiate", post(payments::initiate))
        .route("/payments/confirm", post(payments::confirm))
        .route("/payments/my", get(payments::my_payments))
        .route("/payments/stub-checkout", get(payments::stub_checkout))
        .route("/payments/{id}", get(payments::get_by_id))
}

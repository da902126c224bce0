//! Payment initiation, confirmation, and lookup handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{DateTime, Utc};
use fundlift_audit::AuditAction;
use fundlift_auth::{AuthUser, InvestorUser};
use fundlift_common::{Error, Pagination, Result, ValidatedJson};
use fundlift_gateway::GatewayError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::PaymentsState;
use crate::domain::entities::{PaymentMethod, Transaction, TransactionStatus};
use crate::domain::state::{TransactionEvent, TransactionStateMachine};

#[derive(Debug, Deserialize, Validate)]
pub struct InitiatePaymentRequest {
    pub campaign_id: Uuid,
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// What the investor needs to complete checkout
#[derive(Debug, Serialize)]
pub struct PaymentSessionResponse {
    pub transaction_id: Uuid,
    pub status: TransactionStatus,
    pub session_id: String,
    pub checkout_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Gateway verdict carried by the confirmation callback
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayOutcome {
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ConfirmPaymentRequest {
    pub transaction_id: Uuid,
    #[validate(length(min = 1))]
    pub gateway_reference: String,
    pub status: GatewayOutcome,
}

#[derive(Debug, Deserialize)]
pub struct StubCheckoutQuery {
    #[serde(rename = "ref")]
    pub reference: String,
}

fn gateway_error(e: GatewayError) -> Error {
    Error::Internal(format!("Payment gateway error: {}", e))
}

/// POST /payments/initiate
///
/// Creates the transaction row before the gateway session, so there is
/// always a record to reconcile against even if the gateway call fails.
pub async fn initiate(
    State(state): State<PaymentsState>,
    InvestorUser(ctx): InvestorUser,
    ValidatedJson(request): ValidatedJson<InitiatePaymentRequest>,
) -> Result<(StatusCode, Json<PaymentSessionResponse>)> {
    let campaign = state
        .campaigns
        .get_by_id(request.campaign_id)
        .await?
        .ok_or_else(|| Error::NotFound("Campaign not found".to_string()))?;

    if !campaign.is_live() {
        return Err(Error::Validation(format!(
            "Campaign in {} status is not accepting contributions",
            campaign.status
        )));
    }

    let txn = Transaction::new(
        ctx.user_id,
        campaign.id,
        request.amount,
        request.currency,
        request.payment_method,
    )?;
    let txn = state.repos.transactions.create(&txn).await?;

    let session = state
        .gateway
        .create_session(
            txn.amount,
            &txn.currency,
            &txn.id.to_string(),
            &state.return_url,
        )
        .await
        .map_err(gateway_error)?;

    let txn = state
        .repos
        .transactions
        .mark_processing(txn.id, &session.session_id)
        .await?
        .ok_or_else(|| Error::Conflict("Transaction was modified concurrently".to_string()))?;

    state
        .audit
        .record(
            AuditAction::PaymentInitiated,
            ctx.user_id,
            json!({
                "transaction_id": txn.id,
                "campaign_id": campaign.id,
                "amount": txn.amount,
            }),
        )
        .await;

    tracing::info!(transaction_id = %txn.id, campaign_id = %campaign.id, "Payment initiated");

    Ok((
        StatusCode::CREATED,
        Json(PaymentSessionResponse {
            transaction_id: txn.id,
            status: txn.status,
            session_id: session.session_id,
            checkout_url: session.checkout_url,
            expires_at: session.expires_at,
        }),
    ))
}

/// POST /payments/confirm
///
/// Unauthenticated gateway callback. Idempotency comes from the state
/// machine: a replayed callback finds the transaction already past
/// processing and gets a 400 without touching the campaign. Refund
/// callbacks move a completed transaction to refunded and debit the
/// campaign's raised amount.
pub async fn confirm(
    State(state): State<PaymentsState>,
    ValidatedJson(request): ValidatedJson<ConfirmPaymentRequest>,
) -> Result<Json<Transaction>> {
    let txn = state
        .repos
        .transactions
        .get_by_id(request.transaction_id)
        .await?
        .ok_or_else(|| Error::NotFound("Transaction not found".to_string()))?;

    let event = match request.status {
        GatewayOutcome::Completed => TransactionEvent::GatewaySuccess,
        GatewayOutcome::Failed => TransactionEvent::GatewayFailure,
        GatewayOutcome::Refunded => TransactionEvent::Refund,
    };
    let next = TransactionStateMachine::transition(txn.status, event)
        .map_err(|e| Error::Validation(e.to_string()))?;

    // Never credit a campaign on the callback's word alone; check the
    // session outcome with the gateway first.
    if request.status == GatewayOutcome::Completed {
        let session_id = txn.gateway_session_id.as_deref().ok_or_else(|| {
            Error::Validation("Transaction has no gateway session".to_string())
        })?;
        let verification = state
            .gateway
            .verify_payment(session_id)
            .await
            .map_err(gateway_error)?;
        if !verification.succeeded {
            return Err(Error::Validation(
                "Gateway did not confirm the payment".to_string(),
            ));
        }
    }

    let txn = state
        .repos
        .transactions
        .record_gateway_verdict(txn.id, txn.status, next, &request.gateway_reference)
        .await?
        .ok_or_else(|| Error::Conflict("Transaction was modified concurrently".to_string()))?;

    if txn.status == TransactionStatus::Refunded {
        // Refunds correct the campaign's total; its status is untouched,
        // so a completed campaign stays completed.
        let debited = state
            .campaigns
            .reverse_contribution(txn.campaign_id, txn.amount)
            .await?;
        if debited.is_none() {
            tracing::warn!(
                transaction_id = %txn.id,
                campaign_id = %txn.campaign_id,
                "Refunded payment for a campaign that no longer exists"
            );
        }

        state
            .audit
            .record(
                AuditAction::PaymentRefunded,
                txn.user_id,
                json!({
                    "transaction_id": txn.id,
                    "campaign_id": txn.campaign_id,
                    "amount": txn.amount,
                    "gateway_reference": txn.gateway_reference,
                }),
            )
            .await;
    }

    if txn.status == TransactionStatus::Completed {
        let credited = state
            .campaigns
            .apply_contribution(txn.campaign_id, txn.amount)
            .await?;
        if credited.is_none() {
            // Payment landed after the campaign left live; keep the money
            // on the transaction and flag it for reconciliation.
            tracing::warn!(
                transaction_id = %txn.id,
                campaign_id = %txn.campaign_id,
                "Completed payment for a campaign that is no longer live"
            );
        }

        state
            .audit
            .record(
                AuditAction::PaymentConfirmed,
                txn.user_id,
                json!({
                    "transaction_id": txn.id,
                    "campaign_id": txn.campaign_id,
                    "amount": txn.amount,
                    "gateway_reference": txn.gateway_reference,
                }),
            )
            .await;
    }

    tracing::info!(transaction_id = %txn.id, status = %txn.status, "Payment confirmed");

    Ok(Json(txn))
}

/// GET /payments/my
pub async fn my_payments(
    State(state): State<PaymentsState>,
    AuthUser(ctx): AuthUser,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Transaction>>> {
    let txns = state
        .repos
        .transactions
        .list_by_user(ctx.user_id, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(txns))
}

/// GET /payments/{id}
///
/// Visible to the transaction owner and to admins.
pub async fn get_by_id(
    State(state): State<PaymentsState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Transaction>> {
    let txn = state
        .repos
        .transactions
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Transaction not found".to_string()))?;

    if txn.user_id != ctx.user_id && !ctx.role.is_admin() {
        return Err(Error::Authorization(
            "Not allowed to view this transaction".to_string(),
        ));
    }

    Ok(Json(txn))
}

/// GET /payments/stub-checkout?ref=
///
/// Development-only checkout page for the stub gateway. Shows the
/// transaction reference and the confirmation payloads to replay.
pub async fn stub_checkout(Query(query): Query<StubCheckoutQuery>) -> Html<String> {
    let reference = &query.reference;
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Stub Checkout</title></head>\n<body>\n\
         <h1>Stub Checkout</h1>\n\
         <p>Transaction reference: <code>{reference}</code></p>\n\
         <p>This is a development gateway. Confirm the payment by POSTing to\n\
         <code>/payments/confirm</code> with\n\
         <code>{{\"transaction_id\": \"{reference}\", \"gateway_reference\": \"stub_ref_{reference}\", \"status\": \"completed\"}}</code>\n\
         or <code>\"status\": \"failed\"</code>.</p>\n\
         </body>\n</html>\n"
    ))
}

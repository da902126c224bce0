//! Transaction lifecycle state machine
//!
//! The gateway callback drives these transitions, so a replayed or
//! out-of-order callback fails here instead of double-counting money.

use fundlift_common::StateError;

use crate::domain::entities::TransactionStatus;

/// Events that trigger transaction state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionEvent {
    /// Checkout session created with the gateway
    SessionCreated,
    /// Gateway reports the payment succeeded
    GatewaySuccess,
    /// Gateway reports the payment failed
    GatewayFailure,
    /// A completed payment is refunded
    Refund,
}

impl std::fmt::Display for TransactionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionCreated => write!(f, "session_created"),
            Self::GatewaySuccess => write!(f, "gateway_success"),
            Self::GatewayFailure => write!(f, "gateway_failure"),
            Self::Refund => write!(f, "refund"),
        }
    }
}

/// Transaction state machine
pub struct TransactionStateMachine;

impl TransactionStateMachine {
    /// Attempt a state transition
    ///
    /// Returns the new state if the transition is valid, or an error otherwise.
    pub fn transition(
        current: TransactionStatus,
        event: TransactionEvent,
    ) -> Result<TransactionStatus, StateError> {
        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        let next = match (&current, &event) {
            // From Pending: transaction row exists, no gateway session yet
            (TransactionStatus::Pending, TransactionEvent::SessionCreated) => {
                TransactionStatus::Processing
            }

            // From Processing: awaiting the gateway's verdict
            (TransactionStatus::Processing, TransactionEvent::GatewaySuccess) => {
                TransactionStatus::Completed
            }
            (TransactionStatus::Processing, TransactionEvent::GatewayFailure) => {
                TransactionStatus::Failed
            }

            // From Completed: money can only leave via refund
            (TransactionStatus::Completed, TransactionEvent::Refund) => {
                TransactionStatus::Refunded
            }

            // Invalid transitions
            (state, event) => {
                return Err(StateError::InvalidTransition {
                    from: state.to_string(),
                    to: "unknown".to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }
}

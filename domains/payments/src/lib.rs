//! Payments domain: investment transactions, gateway checkout, and the
//! `/payments` API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{PaymentMethod, Transaction, TransactionStatus};
pub use domain::state::{TransactionEvent, TransactionStateMachine};

// Re-export repository types
pub use repository::{PaymentsRepositories, TransactionRepository};

// Re-export API types
pub use api::routes;
pub use api::PaymentsState;

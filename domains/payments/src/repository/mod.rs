//! Repository layer for the Payments domain

pub mod transactions;

pub use transactions::TransactionRepository;

use sqlx::PgPool;

/// All repositories for the Payments domain
#[derive(Clone)]
pub struct PaymentsRepositories {
    pub transactions: TransactionRepository,
}

impl PaymentsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            transactions: TransactionRepository::new(pool),
        }
    }
}

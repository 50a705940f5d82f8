//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use crate::domain::models::payment::Payment;
use anyhow::Result;

/// Trait defining the interface for payment ledger persistence
///
/// The ledger is persisted as one whole document: every save replaces the
/// previous snapshot, and partial updates do not exist.
pub trait PaymentStore: Send + Sync {
    /// Load the full payment collection.
    ///
    /// An absent document is not an error; it yields an empty collection.
    fn load_payments(&self) -> Result<Vec<Payment>>;

    /// Replace the persisted collection with the given snapshot.
    fn save_payments(&self, payments: &[Payment]) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// Abstracts away the specific connection type and provides factory methods
/// for creating repositories, so services can be constructed against any
/// backend. Tests use this to spin up independent ledgers.
pub trait Connection: Send + Sync + Clone {
    /// The type of PaymentStore this connection creates
    type PaymentRepository: PaymentStore;

    /// Create a new payment repository for this connection
    fn create_payment_repository(&self) -> Self::PaymentRepository;
}

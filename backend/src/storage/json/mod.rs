//! JSON-document storage backend.
//!
//! Persists the whole ledger as one JSON file under a base directory,
//! replaced atomically on every save.

pub mod connection;
pub mod payment_repository;

pub use connection::JsonConnection;
pub use payment_repository::PaymentRepository;

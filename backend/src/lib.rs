//! # Payment Tracker Backend
//!
//! Engine for a vendor payment ledger. The backend is UI-agnostic and is
//! organized in two layers:
//!
//! - **Domain**: Validation, ledger mutations, summaries, and calendar views
//! - **Storage**: Persistence behind small traits, shipped with a JSON
//!   document backend
//!
//! Consumers construct a [`storage::Connection`], build a
//! [`domain::LedgerService`] on top of it, and talk to the service through
//! the request/response types in the `shared` crate.

pub mod domain;
pub mod storage;

pub use domain::LedgerService;
pub use storage::json::JsonConnection;

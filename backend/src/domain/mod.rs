//! # Domain Module
//!
//! Contains all business logic for the payment tracker.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how vendor payments are validated, stored, and summarized. It
//! operates independently of any specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **ledger_service**: Ledger mutations (add, import, delete, clear) and reads
//! - **ingestion_service**: Manual entry and bulk text validation
//! - **summary_service**: Per-day spending totals
//! - **calendar**: Calendar view generation, heat classification, and focus navigation
//! - **payment_table**: Payment table formatting and display logic
//! - **models**: Domain entities
//! - **config**: Tracker-wide configuration
//!
//! ## Business Rules
//!
//! - Payments must name a vendor and carry a strictly positive amount
//! - Vendor categories and payment types come from closed, case-sensitive sets
//! - Dates are YYYY-MM-DD strings; only the shape is enforced
//! - Cheque details are kept only for Cheque payments
//! - Bulk imports are all-or-nothing
//! - Records are immutable once stored; corrections are delete-and-re-add

pub mod calendar;
pub mod config;
pub mod ingestion_service;
pub mod ledger_service;
pub mod models;
pub mod payment_table;
pub mod summary_service;

pub use calendar::CalendarService;
pub use config::TrackerConfig;
pub use ingestion_service::{BulkImportError, IngestionService, ManualEntryError, RowError, RowErrorKind};
pub use ledger_service::LedgerService;
pub use payment_table::PaymentTableService;
pub use summary_service::SummaryService;

//! # Storage Module
//!
//! Persistence layer for the payment tracker. The domain layer talks to
//! storage exclusively through the traits defined here, so backends can be
//! swapped without touching business logic. The shipped backend keeps the
//! whole ledger in a single JSON document.

pub mod json;
pub mod traits;

pub use traits::*;

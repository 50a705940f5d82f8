//! Display formatting for the payment table.
//!
//! Turns domain records into ready-to-render rows. Amounts keep full
//! precision in the ledger and are rounded to two decimals only here.

use shared::{FormattedPayment, PaymentTableResponse};

use crate::domain::config::TrackerConfig;
use crate::domain::models::payment::Payment;

/// Service producing the formatted payment table
#[derive(Clone)]
pub struct PaymentTableService {
    config: TrackerConfig,
}

impl PaymentTableService {
    /// Create a new PaymentTableService with the default configuration
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    /// Create a new PaymentTableService with an explicit configuration
    pub fn with_config(config: TrackerConfig) -> Self {
        Self { config }
    }

    /// Format an amount with the configured currency symbol and two
    /// decimal places
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.config.currency_symbol, amount)
    }

    /// Format a single payment into a table row
    pub fn format_payment(&self, payment: &Payment) -> FormattedPayment {
        FormattedPayment {
            id: payment.id.clone(),
            vendor_name: payment.vendor_name.clone(),
            vendor_category: payment.vendor_category.to_string(),
            payment_type: payment.payment_type.to_string(),
            formatted_amount: self.format_amount(payment.amount),
            date: payment.date.clone(),
            cheque_number: payment.cheque_number.clone(),
            bank_name: payment.bank_name.clone(),
            raw_amount: payment.amount,
        }
    }

    /// Format the whole ledger, preserving insertion order
    pub fn format_table(&self, payments: &[Payment]) -> PaymentTableResponse {
        PaymentTableResponse {
            formatted_payments: payments.iter().map(|p| self.format_payment(p)).collect(),
        }
    }
}

impl Default for PaymentTableService {
    fn default() -> Self {
        Self::new()
    }
}

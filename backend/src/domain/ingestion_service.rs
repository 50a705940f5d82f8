//! Ingestion and validation logic for the payment tracker.
//!
//! Both entry paths into the ledger live here: single manual entries and
//! bulk comma-separated text imports. All validation rules are applied
//! before anything reaches the ledger, so stored records are trusted
//! downstream.

use crate::domain::models::payment::{is_date_shaped, Payment};
use log::warn;
use shared::{AddPaymentRequest, PaymentType, VendorCategory};
use thiserror::Error;

/// Validation failure for a single manual entry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManualEntryError {
    #[error("Vendor name must not be empty")]
    EmptyVendorName,
    #[error("Invalid payment amount '{0}'.")]
    InvalidAmount(String),
    #[error("Invalid payment date format '{0}'. Expected YYYY-MM-DD.")]
    InvalidDateFormat(String),
}

/// Why a single import row was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowErrorKind {
    #[error("Insufficient data. Expected at least 5 fields.")]
    InsufficientData,
    #[error("Invalid payment amount '{0}'.")]
    InvalidAmount(String),
    #[error("Invalid vendor category '{0}'. Must be FMCG or Homeware.")]
    InvalidVendorCategory(String),
    #[error("Invalid payment type '{0}'. Must be Cheque, Bank Transfer, or Cheque Pending.")]
    InvalidPaymentType(String),
    #[error("Invalid payment date format '{0}'. Expected YYYY-MM-DD.")]
    InvalidDateFormat(String),
}

/// A rejected import row. Row numbers are 1-based and count non-blank
/// lines only.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Row {row}: {kind}")]
pub struct RowError {
    pub row: usize,
    pub kind: RowErrorKind,
}

/// Outcome of a failed bulk import. The batch is all-or-nothing: any row
/// error means zero records are produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BulkImportError {
    #[error("CSV file is empty.")]
    EmptyInput,
    #[error("Errors found in CSV upload: {}", format_row_errors(.0))]
    InvalidRows(Vec<RowError>),
}

fn format_row_errors(errors: &[RowError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Ingestion service that validates payments before they enter the ledger
#[derive(Clone, Default)]
pub struct IngestionService;

impl IngestionService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a manual entry and produce exactly one payment record.
    ///
    /// The amount arrives as raw text. Cheque detail fields are silently
    /// discarded when the payment type is not Cheque.
    pub fn validate_manual_entry(
        &self,
        request: &AddPaymentRequest,
    ) -> Result<Payment, ManualEntryError> {
        let vendor_name = request.vendor_name.trim();
        if vendor_name.is_empty() {
            return Err(ManualEntryError::EmptyVendorName);
        }

        let amount = parse_positive_amount(&request.amount_input)
            .ok_or_else(|| ManualEntryError::InvalidAmount(request.amount_input.clone()))?;

        let date = request.date.trim();
        if !is_date_shaped(date) {
            return Err(ManualEntryError::InvalidDateFormat(request.date.clone()));
        }

        let (cheque_number, bank_name) = if request.payment_type.carries_cheque_details() {
            (
                request.cheque_number.trim().to_string(),
                request.bank_name.trim().to_string(),
            )
        } else {
            (String::new(), String::new())
        };

        Ok(Payment {
            id: Payment::generate_id(),
            vendor_name: vendor_name.to_string(),
            vendor_category: request.vendor_category,
            payment_type: request.payment_type,
            amount,
            date: date.to_string(),
            cheque_number,
            bank_name,
        })
    }

    /// Parse bulk comma-separated text into payment records.
    ///
    /// Expected field order per row:
    /// vendor name, vendor category, payment type, amount, date,
    /// cheque number, bank name. The last two are optional.
    ///
    /// Rows are validated independently and the first failing check per
    /// row wins. The batch only succeeds when every row does.
    pub fn parse_bulk_text(&self, text: &str) -> Result<Vec<Payment>, BulkImportError> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        if rows.is_empty() {
            return Err(BulkImportError::EmptyInput);
        }

        let mut new_payments = Vec::new();
        let mut errors = Vec::new();

        for (index, line) in rows.iter().enumerate() {
            match self.parse_row(line) {
                Ok(payment) => new_payments.push(payment),
                Err(kind) => errors.push(RowError {
                    row: index + 1,
                    kind,
                }),
            }
        }

        if !errors.is_empty() {
            warn!(
                "Bulk import rejected: {} of {} rows failed validation",
                errors.len(),
                rows.len()
            );
            return Err(BulkImportError::InvalidRows(errors));
        }

        Ok(new_payments)
    }

    fn parse_row(&self, line: &str) -> Result<Payment, RowErrorKind> {
        let values: Vec<&str> = line.split(',').map(|v| v.trim()).collect();
        if values.len() < 5 {
            return Err(RowErrorKind::InsufficientData);
        }

        let vendor_name = values[0];
        let category_str = values[1];
        let type_str = values[2];
        let amount_str = values[3];
        let date_str = values[4];
        let cheque_number = values.get(5).copied().unwrap_or("");
        let bank_name = values.get(6).copied().unwrap_or("");

        let amount = parse_positive_amount(amount_str)
            .ok_or_else(|| RowErrorKind::InvalidAmount(amount_str.to_string()))?;

        let vendor_category: VendorCategory = category_str
            .parse()
            .map_err(|_| RowErrorKind::InvalidVendorCategory(category_str.to_string()))?;

        let payment_type: PaymentType = type_str
            .parse()
            .map_err(|_| RowErrorKind::InvalidPaymentType(type_str.to_string()))?;

        if !is_date_shaped(date_str) {
            return Err(RowErrorKind::InvalidDateFormat(date_str.to_string()));
        }

        let (cheque_number, bank_name) = if payment_type.carries_cheque_details() {
            (cheque_number.to_string(), bank_name.to_string())
        } else {
            (String::new(), String::new())
        };

        Ok(Payment {
            id: Payment::generate_id(),
            vendor_name: vendor_name.to_string(),
            vendor_category,
            payment_type,
            amount,
            date: date_str.to_string(),
            cheque_number,
            bank_name,
        })
    }
}

/// Parse an amount string, accepting only finite values strictly above zero.
fn parse_positive_amount(input: &str) -> Option<f64> {
    let amount: f64 = input.trim().parse().ok()?;
    if amount.is_finite() && amount > 0.0 {
        Some(amount)
    } else {
        None
    }
}

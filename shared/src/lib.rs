use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scheduled vendor payment.
///
/// Records are immutable once stored; corrections are delete-and-re-add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Opaque unique ID (UUID v4), assigned at ingestion and never reused
    pub id: String,
    /// Vendor the payment is owed to (non-empty)
    pub vendor_name: String,
    pub vendor_category: VendorCategory,
    pub payment_type: PaymentType,
    /// Payment amount, strictly positive; full precision is kept here and
    /// rounded only for display
    pub amount: f64,
    /// Scheduled date as a YYYY-MM-DD string
    pub date: String,
    /// Cheque number, empty unless payment_type is Cheque
    pub cheque_number: String,
    /// Issuing bank, empty unless payment_type is Cheque
    pub bank_name: String,
}

impl Payment {
    /// Generate a fresh payment ID
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Vendor category. The set is closed; anything else is rejected at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorCategory {
    #[serde(rename = "FMCG")]
    Fmcg,
    Homeware,
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorCategory::Fmcg => write!(f, "FMCG"),
            VendorCategory::Homeware => write!(f, "Homeware"),
        }
    }
}

impl FromStr for VendorCategory {
    type Err = UnknownVendorCategory;

    /// Case-sensitive match against the canonical spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FMCG" => Ok(VendorCategory::Fmcg),
            "Homeware" => Ok(VendorCategory::Homeware),
            other => Err(UnknownVendorCategory(other.to_string())),
        }
    }
}

/// Error returned when a vendor category string is not one of the known values
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVendorCategory(pub String);

impl fmt::Display for UnknownVendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown vendor category: {}", self.0)
    }
}

impl std::error::Error for UnknownVendorCategory {}

/// How the payment is made. The set is closed; the canonical spellings
/// ("Cheque", "Bank Transfer", "Cheque Pending") are the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    Cheque,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Cheque Pending")]
    ChequePending,
}

impl PaymentType {
    /// Whether cheque detail fields (number, bank) are meaningful for this type
    pub fn carries_cheque_details(&self) -> bool {
        matches!(self, PaymentType::Cheque)
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Cheque => write!(f, "Cheque"),
            PaymentType::BankTransfer => write!(f, "Bank Transfer"),
            PaymentType::ChequePending => write!(f, "Cheque Pending"),
        }
    }
}

impl FromStr for PaymentType {
    type Err = UnknownPaymentType;

    /// Case-sensitive match against the canonical spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cheque" => Ok(PaymentType::Cheque),
            "Bank Transfer" => Ok(PaymentType::BankTransfer),
            "Cheque Pending" => Ok(PaymentType::ChequePending),
            other => Err(UnknownPaymentType(other.to_string())),
        }
    }
}

/// Error returned when a payment type string is not one of the known values
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownPaymentType(pub String);

impl fmt::Display for UnknownPaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown payment type: {}", self.0)
    }
}

impl std::error::Error for UnknownPaymentType {}

/// Request for adding a single payment from manual entry.
///
/// The amount arrives as raw text and is parsed during validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddPaymentRequest {
    pub vendor_name: String,
    pub vendor_category: VendorCategory,
    pub payment_type: PaymentType,
    pub amount_input: String,
    /// Scheduled date as a YYYY-MM-DD string
    pub date: String,
    pub cheque_number: String,
    pub bank_name: String,
}

/// Response after adding a single payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddPaymentResponse {
    pub payment: Payment,
    pub success_message: String,
    pub views: LedgerViews,
}

/// Request for bulk-importing payments from comma-separated text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportPaymentsRequest {
    pub text: String,
}

/// Response after a fully successful bulk import
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportPaymentsResponse {
    pub added_count: usize,
    pub success_message: String,
    pub views: LedgerViews,
}

/// Request for deleting a single payment by ID
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeletePaymentRequest {
    pub payment_id: String,
}

/// Response after a delete attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeletePaymentResponse {
    /// False when the ID was not present (still a success, nothing changed)
    pub deleted: bool,
    pub success_message: String,
    pub views: LedgerViews,
}

/// Response after clearing the whole ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClearPaymentsResponse {
    pub cleared_count: usize,
    pub success_message: String,
    pub views: LedgerViews,
}

/// Response containing the full ledger in insertion order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentListResponse {
    pub payments: Vec<Payment>,
}

/// Derived views recomputed after every mutation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerViews {
    pub daily_summary: Vec<DailySummaryEntry>,
    pub calendar_month: CalendarMonth,
}

/// One row of the per-day summary: all payments sharing an exact date string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummaryEntry {
    /// YYYY-MM-DD date string the row groups on
    pub date: String,
    pub total: f64,
}

/// A calendar month with per-day category totals and heat levels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: u32,
    /// Weekday of the 1st of the month, 0 = Sunday
    pub first_day_of_week: u32,
    /// Header string such as "March 2024"
    pub header: String,
    /// Exactly one cell per real day of the month, day 1 first
    pub days: Vec<CalendarDayCell>,
}

/// A single day cell in the calendar view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDayCell {
    pub day: u32,
    pub fmcg: f64,
    pub homeware: f64,
    pub total: f64,
    /// Heat classification 0..=7 relative to the month's busiest day
    pub heat_level: u8,
}

/// Current focus month for calendar navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: u32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year() as u32,
        }
    }
}

/// Request to move the calendar focus to an explicit month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusRequest {
    pub month: u32,
    pub year: u32,
}

/// Response after the calendar focus changes (explicitly or by navigation)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusResponse {
    pub focus_date: CalendarFocusDate,
    pub calendar_month: CalendarMonth,
    pub success_message: String,
}

/// A payment formatted for table display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedPayment {
    pub id: String,
    pub vendor_name: String,
    pub vendor_category: String,
    pub payment_type: String,
    /// Currency symbol plus the amount rounded to two decimals
    pub formatted_amount: String,
    pub date: String,
    pub cheque_number: String,
    pub bank_name: String,
    pub raw_amount: f64,
}

/// Response containing the formatted payment table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentTableResponse {
    pub formatted_payments: Vec<FormattedPayment>,
}

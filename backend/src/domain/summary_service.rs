//! Per-day spending summary.
//!
//! Groups payments by their exact date string and sums amounts per group.
//! Grouping is textual: two records share a row only when their date
//! strings are byte-identical.

use shared::DailySummaryEntry;
use std::collections::HashMap;

use crate::domain::models::payment::Payment;

/// Service producing the daily summary view
#[derive(Clone, Default)]
pub struct SummaryService;

impl SummaryService {
    /// Create a new SummaryService instance
    pub fn new() -> Self {
        Self
    }

    /// Compute one row per distinct date, ordered by ascending date string.
    ///
    /// Lexicographic order on YYYY-MM-DD strings is chronological order, so
    /// no date parsing is needed here.
    pub fn daily_totals(&self, payments: &[Payment]) -> Vec<DailySummaryEntry> {
        let mut totals_by_date: HashMap<String, f64> = HashMap::new();

        for payment in payments {
            *totals_by_date.entry(payment.date.clone()).or_insert(0.0) += payment.amount;
        }

        let mut entries: Vec<DailySummaryEntry> = totals_by_date
            .into_iter()
            .map(|(date, total)| DailySummaryEntry { date, total })
            .collect();
        entries.sort_by(|a, b| a.date.cmp(&b.date));

        entries
    }
}

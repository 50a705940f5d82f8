//! Ledger service domain logic for the payment tracker.
//!
//! The service owns the in-memory payment collection and is the only
//! mutation path into it. Every mutation persists the whole snapshot
//! before the in-memory state is updated, so a failed save leaves the
//! ledger exactly as it was. Responses carry freshly recomputed derived
//! views so callers never render stale data.

use crate::domain::calendar::CalendarService;
use crate::domain::ingestion_service::IngestionService;
use crate::domain::models::payment::Payment;
use crate::domain::summary_service::SummaryService;
use crate::storage::{Connection, PaymentStore};
use anyhow::Result;
use log::info;
use shared::{
    AddPaymentRequest, AddPaymentResponse, ClearPaymentsResponse, DeletePaymentRequest,
    DeletePaymentResponse, ImportPaymentsRequest, ImportPaymentsResponse, LedgerViews,
    PaymentListResponse, UpdateCalendarFocusRequest, UpdateCalendarFocusResponse,
};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct LedgerService<C: Connection> {
    payment_repository: Arc<C::PaymentRepository>,
    /// In-memory ledger, rehydrated from storage at construction.
    /// Insertion order is storage order and is never re-sorted.
    payments: Arc<Mutex<Vec<Payment>>>,
    ingestion_service: IngestionService,
    calendar_service: CalendarService,
    summary_service: SummaryService,
}

impl<C: Connection> LedgerService<C> {
    /// Create a ledger service bound to a storage connection.
    ///
    /// The persisted snapshot is loaded eagerly; an absent document yields
    /// an empty ledger, while an unreadable one is a hard error.
    pub fn new(connection: &C) -> Result<Self> {
        let payment_repository = connection.create_payment_repository();
        let payments = payment_repository.load_payments()?;

        info!("Ledger service started with {} payments", payments.len());

        Ok(Self {
            payment_repository: Arc::new(payment_repository),
            payments: Arc::new(Mutex::new(payments)),
            ingestion_service: IngestionService::new(),
            calendar_service: CalendarService::new(),
            summary_service: SummaryService::new(),
        })
    }

    /// Validate and add a single manually entered payment.
    pub fn add_payment(&self, request: AddPaymentRequest) -> Result<AddPaymentResponse> {
        let payment = self.ingestion_service.validate_manual_entry(&request)?;

        let mut payments = self.payments.lock().unwrap();
        let mut next = payments.clone();
        next.push(payment.clone());
        self.payment_repository.save_payments(&next)?;
        *payments = next;

        info!(
            "Added payment {} to '{}' for {}",
            payment.id, payment.vendor_name, payment.amount
        );

        let views = self.compute_views(&payments);
        Ok(AddPaymentResponse {
            success_message: format!("Payment to {} recorded successfully", payment.vendor_name),
            payment: payment.into(),
            views,
        })
    }

    /// Bulk-import payments from comma-separated text.
    ///
    /// The batch is all-or-nothing: if any row fails validation, the
    /// ledger is untouched and the error lists every rejected row.
    pub fn import_payments(&self, request: ImportPaymentsRequest) -> Result<ImportPaymentsResponse> {
        let new_payments = self.ingestion_service.parse_bulk_text(&request.text)?;
        let added_count = new_payments.len();

        let mut payments = self.payments.lock().unwrap();
        let mut next = payments.clone();
        next.extend(new_payments);
        self.payment_repository.save_payments(&next)?;
        *payments = next;

        info!("Imported {} payments from bulk text", added_count);

        let views = self.compute_views(&payments);
        Ok(ImportPaymentsResponse {
            added_count,
            success_message: format!("{} payments successfully added from CSV!", added_count),
            views,
        })
    }

    /// Delete a payment by ID. Deleting an absent ID is not an error;
    /// the response reports whether anything was removed.
    pub fn delete_payment(&self, request: DeletePaymentRequest) -> Result<DeletePaymentResponse> {
        let mut payments = self.payments.lock().unwrap();
        let mut next = payments.clone();
        let before = next.len();
        next.retain(|p| p.id != request.payment_id);
        let deleted = next.len() < before;

        if deleted {
            self.payment_repository.save_payments(&next)?;
            *payments = next;
            info!("Deleted payment {}", request.payment_id);
        }

        let views = self.compute_views(&payments);
        Ok(DeletePaymentResponse {
            deleted,
            success_message: if deleted {
                "Payment deleted successfully".to_string()
            } else {
                "No payment matched the given ID".to_string()
            },
            views,
        })
    }

    /// Remove every payment from the ledger.
    pub fn clear_all(&self) -> Result<ClearPaymentsResponse> {
        let mut payments = self.payments.lock().unwrap();
        let cleared_count = payments.len();
        self.payment_repository.save_payments(&[])?;
        payments.clear();

        info!("Cleared the ledger ({} payments removed)", cleared_count);

        let views = self.compute_views(&payments);
        Ok(ClearPaymentsResponse {
            cleared_count,
            success_message: format!("{} payments cleared successfully", cleared_count),
            views,
        })
    }

    /// Full ledger in insertion order.
    pub fn list_payments(&self) -> PaymentListResponse {
        let payments = self.payments.lock().unwrap();
        PaymentListResponse {
            payments: payments.iter().cloned().map(Into::into).collect(),
        }
    }

    /// Read-only copy of the domain records, in insertion order.
    pub fn snapshot(&self) -> Vec<Payment> {
        self.payments.lock().unwrap().clone()
    }

    /// Derived views for the current calendar focus.
    pub fn current_views(&self) -> LedgerViews {
        let payments = self.payments.lock().unwrap();
        self.compute_views(&payments)
    }

    /// Move the calendar focus to an explicit month and year.
    pub fn set_calendar_focus(
        &self,
        request: UpdateCalendarFocusRequest,
    ) -> Result<UpdateCalendarFocusResponse> {
        let focus_date = self
            .calendar_service
            .set_focus_date(request.month, request.year)?;
        Ok(self.focus_response(focus_date))
    }

    /// Move the calendar focus one month back.
    pub fn navigate_previous_month(&self) -> UpdateCalendarFocusResponse {
        let focus_date = self.calendar_service.navigate_previous_month();
        self.focus_response(focus_date)
    }

    /// Move the calendar focus one month forward.
    pub fn navigate_next_month(&self) -> UpdateCalendarFocusResponse {
        let focus_date = self.calendar_service.navigate_next_month();
        self.focus_response(focus_date)
    }

    /// Current calendar focus without changing it.
    pub fn calendar_focus(&self) -> shared::CalendarFocusDate {
        self.calendar_service.get_focus_date()
    }

    fn focus_response(&self, focus_date: shared::CalendarFocusDate) -> UpdateCalendarFocusResponse {
        let payments = self.payments.lock().unwrap();
        let calendar_month = self.calendar_service.generate_calendar_month(
            focus_date.month,
            focus_date.year,
            &payments,
        );
        UpdateCalendarFocusResponse {
            success_message: format!("Calendar focused on {}", calendar_month.header),
            focus_date,
            calendar_month,
        }
    }

    fn compute_views(&self, payments: &[Payment]) -> LedgerViews {
        let focus = self.calendar_service.get_focus_date();
        LedgerViews {
            daily_summary: self.summary_service.daily_totals(payments),
            calendar_month: self.calendar_service.generate_calendar_month(
                focus.month,
                focus.year,
                payments,
            ),
        }
    }
}

//! End-to-end tests driving the ledger through its public surface:
//! connection, ledger service, derived views, and persistence.

use payment_tracker_backend::domain::payment_table::PaymentTableService;
use payment_tracker_backend::{JsonConnection, LedgerService};
use shared::{
    AddPaymentRequest, DeletePaymentRequest, ImportPaymentsRequest, PaymentType,
    UpdateCalendarFocusRequest, VendorCategory,
};
use tempfile::TempDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn new_service(temp_dir: &TempDir) -> (LedgerService<JsonConnection>, JsonConnection) {
    let connection = JsonConnection::new(temp_dir.path()).unwrap();
    let service = LedgerService::new(&connection).unwrap();
    (service, connection)
}

#[test]
fn import_then_derive_views() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let (service, _connection) = new_service(&temp_dir);

    service
        .set_calendar_focus(UpdateCalendarFocusRequest {
            month: 3,
            year: 2024,
        })
        .unwrap();

    let response = service
        .import_payments(ImportPaymentsRequest {
            text: "Acme,FMCG,Cheque,100.50,2024-03-05,CHQ1,HDFC\n\
                   Beta,Homeware,Bank Transfer,50,2024-03-05,,"
                .to_string(),
        })
        .unwrap();

    assert_eq!(response.added_count, 2);
    assert_eq!(
        response.success_message,
        "2 payments successfully added from CSV!"
    );

    let summary = &response.views.daily_summary;
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].date, "2024-03-05");
    assert_eq!(summary[0].total, 150.50);

    let calendar = &response.views.calendar_month;
    assert_eq!(calendar.days.len(), 31);
    let day_5 = &calendar.days[4];
    assert_eq!(day_5.fmcg, 100.50);
    assert_eq!(day_5.homeware, 50.0);
    assert_eq!(day_5.total, 150.50);
    assert_eq!(day_5.heat_level, 7);
}

#[test]
fn ledger_survives_process_restart() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let (service, connection) = new_service(&temp_dir);

    service
        .import_payments(ImportPaymentsRequest {
            text: "Acme,FMCG,Cheque,100.50,2024-03-05,CHQ1,HDFC\n\
                   Beta,Homeware,Bank Transfer,50,2024-03-06,,"
                .to_string(),
        })
        .unwrap();
    let before = service.snapshot();

    // A fresh service over the same connection stands in for a restart
    let reloaded = LedgerService::new(&connection).unwrap();
    let after = reloaded.snapshot();

    assert_eq!(after, before);
    assert_eq!(after[0].vendor_name, "Acme");
    assert_eq!(after[1].vendor_name, "Beta");
}

#[test]
fn daily_totals_ignore_insertion_order() {
    init_logging();
    let temp_a = TempDir::new().unwrap();
    let temp_b = TempDir::new().unwrap();
    let (forward, _) = new_service(&temp_a);
    let (backward, _) = new_service(&temp_b);

    let rows = [
        "Acme,FMCG,Cheque,10,2024-03-05,CHQ1,HDFC",
        "Beta,Homeware,Bank Transfer,20,2024-03-06",
        "Gamma,FMCG,Cheque Pending,30,2024-03-05",
    ];

    forward
        .import_payments(ImportPaymentsRequest {
            text: rows.join("\n"),
        })
        .unwrap();
    backward
        .import_payments(ImportPaymentsRequest {
            text: rows.iter().rev().cloned().collect::<Vec<_>>().join("\n"),
        })
        .unwrap();

    assert_eq!(
        forward.current_views().daily_summary,
        backward.current_views().daily_summary
    );
}

#[test]
fn add_delete_clear_lifecycle() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let (service, connection) = new_service(&temp_dir);

    let added = service
        .add_payment(AddPaymentRequest {
            vendor_name: "Acme Traders".to_string(),
            vendor_category: VendorCategory::Fmcg,
            payment_type: PaymentType::Cheque,
            amount_input: "250".to_string(),
            date: "2024-03-05".to_string(),
            cheque_number: "CHQ42".to_string(),
            bank_name: "HDFC".to_string(),
        })
        .unwrap();
    assert_eq!(added.payment.cheque_number, "CHQ42");

    let table = PaymentTableService::new().format_table(&service.snapshot());
    assert_eq!(table.formatted_payments.len(), 1);
    assert_eq!(table.formatted_payments[0].formatted_amount, "₹250.00");
    assert_eq!(table.formatted_payments[0].payment_type, "Cheque");

    let missing = service
        .delete_payment(DeletePaymentRequest {
            payment_id: "not-a-real-id".to_string(),
        })
        .unwrap();
    assert!(!missing.deleted);
    assert_eq!(service.snapshot().len(), 1);

    let deleted = service
        .delete_payment(DeletePaymentRequest {
            payment_id: added.payment.id.clone(),
        })
        .unwrap();
    assert!(deleted.deleted);
    assert!(service.snapshot().is_empty());

    service
        .add_payment(AddPaymentRequest {
            vendor_name: "Beta".to_string(),
            vendor_category: VendorCategory::Homeware,
            payment_type: PaymentType::BankTransfer,
            amount_input: "10".to_string(),
            date: "2024-03-06".to_string(),
            cheque_number: String::new(),
            bank_name: String::new(),
        })
        .unwrap();
    let cleared = service.clear_all().unwrap();
    assert_eq!(cleared.cleared_count, 1);

    let reloaded = LedgerService::new(&connection).unwrap();
    assert!(reloaded.snapshot().is_empty());
}

#[test]
fn rejected_import_leaves_persisted_ledger_untouched() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let (service, connection) = new_service(&temp_dir);

    service
        .import_payments(ImportPaymentsRequest {
            text: "Acme,FMCG,Cheque,100.50,2024-03-05,CHQ1,HDFC".to_string(),
        })
        .unwrap();

    let result = service.import_payments(ImportPaymentsRequest {
        text: "Beta,Homeware,Bank Transfer,50,2024-03-06\n\
               Gamma,Grocery,Cheque,5,2024-03-07"
            .to_string(),
    });
    assert!(result.is_err());

    let reloaded = LedgerService::new(&connection).unwrap();
    assert_eq!(reloaded.snapshot().len(), 1);
    assert_eq!(reloaded.snapshot()[0].vendor_name, "Acme");
}

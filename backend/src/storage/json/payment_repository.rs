use super::connection::JsonConnection;
use crate::domain::models::payment::Payment;
use crate::storage::traits::PaymentStore;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;

/// JSON-document payment repository.
///
/// The entire ledger lives in one file. Loads read the whole document;
/// saves replace it via a temp file and an atomic rename, so a crash
/// mid-write never leaves a truncated document behind.
#[derive(Clone)]
pub struct PaymentRepository {
    connection: JsonConnection,
}

impl PaymentRepository {
    /// Create a new JSON payment repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_document(&self) -> Result<Vec<Payment>> {
        let file_path = self.connection.get_payments_file_path();

        if !file_path.exists() {
            info!(
                "No ledger document at {}, starting with an empty ledger",
                file_path.display()
            );
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read ledger document {}", file_path.display()))?;
        let payments: Vec<Payment> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse ledger document {}", file_path.display()))?;

        debug!(
            "Loaded {} payments from {}",
            payments.len(),
            file_path.display()
        );
        Ok(payments)
    }

    fn write_document(&self, payments: &[Payment]) -> Result<()> {
        let file_path = self.connection.get_payments_file_path();
        let temp_path = file_path.with_extension("tmp");

        let json = serde_json::to_string_pretty(payments)?;
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;

        // Atomic move from temp to final file
        fs::rename(&temp_path, &file_path)
            .with_context(|| format!("Failed to replace {}", file_path.display()))?;

        debug!(
            "Saved {} payments to {}",
            payments.len(),
            file_path.display()
        );
        Ok(())
    }
}

impl PaymentStore for PaymentRepository {
    fn load_payments(&self) -> Result<Vec<Payment>> {
        self.read_document()
    }

    fn save_payments(&self, payments: &[Payment]) -> Result<()> {
        self.write_document(payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::Connection;
    use shared::{PaymentType, VendorCategory};
    use tempfile::TempDir;

    fn create_test_repository() -> (PaymentRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (connection.create_payment_repository(), temp_dir)
    }

    fn create_test_payment(vendor: &str, amount: f64, date: &str) -> Payment {
        Payment {
            id: Payment::generate_id(),
            vendor_name: vendor.to_string(),
            vendor_category: VendorCategory::Fmcg,
            payment_type: PaymentType::BankTransfer,
            amount,
            date: date.to_string(),
            cheque_number: String::new(),
            bank_name: String::new(),
        }
    }

    #[test]
    fn test_load_from_absent_document_is_empty() {
        let (repository, _temp_dir) = create_test_repository();
        assert!(repository.load_payments().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (repository, _temp_dir) = create_test_repository();
        let payments = vec![
            create_test_payment("Acme", 100.50, "2024-03-05"),
            create_test_payment("Beta", 50.0, "2024-03-06"),
        ];

        repository.save_payments(&payments).unwrap();
        let loaded = repository.load_payments().unwrap();
        assert_eq!(loaded, payments);
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let (repository, _temp_dir) = create_test_repository();

        repository
            .save_payments(&[create_test_payment("Acme", 100.0, "2024-03-05")])
            .unwrap();
        repository
            .save_payments(&[create_test_payment("Beta", 25.0, "2024-04-01")])
            .unwrap();

        let loaded = repository.load_payments().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].vendor_name, "Beta");
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind(){
        let (repository, temp_dir) = create_test_repository();
        repository
            .save_payments(&[create_test_payment("Acme", 100.0, "2024-03-05")])
            .unwrap();

        assert!(temp_dir.path().join("payments.json").exists());
        assert!(!temp_dir.path().join("payments.tmp").exists());
    }

    #[test]
    fn test_load_rejects_corrupt_document() {
        let (repository, temp_dir) = create_test_repository();
        fs::write(temp_dir.path().join("payments.json"), "not json at all").unwrap();

        assert!(repository.load_payments().is_err());
    }

    #[test]
    fn test_empty_snapshot_persists_as_empty_ledger() {
        let (repository, _temp_dir) = create_test_repository();
        repository
            .save_payments(&[create_test_payment("Acme", 100.0, "2024-03-05")])
            .unwrap();
        repository.save_payments(&[]).unwrap();

        assert!(repository.load_payments().unwrap().is_empty());
    }
}

use crate::domain::config::TrackerConfig;
use crate::storage::traits::Connection;
use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection manages the base directory that holds the persisted
/// ledger document.
///
/// Cloning a connection is cheap; clones share the same directory, so
/// repositories created from clones all see the same ledger.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
    data_file_name: String,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        Self::with_config(base_directory, &TrackerConfig::default())
    }

    /// Create a new JSON connection using the data file name from config
    pub fn with_config<P: AsRef<Path>>(base_directory: P, config: &TrackerConfig) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            data_file_name: config.data_file_name.clone(),
        })
    }

    /// Create a new JSON connection for testing with a unique directory
    pub fn new_for_testing() -> Result<Self> {
        let timestamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let test_dir = std::env::temp_dir().join(format!("payment_tracker_test_{}", timestamp));
        Self::new(test_dir)
    }

    /// Get the path of the persisted ledger document
    pub fn get_payments_file_path(&self) -> PathBuf {
        self.base_directory.join(&self.data_file_name)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Clean up test data (useful for tests)
    #[cfg(test)]
    pub fn cleanup(&self) -> Result<()> {
        if self.base_directory.exists() {
            fs::remove_dir_all(&self.base_directory)?;
        }
        Ok(())
    }
}

impl Connection for JsonConnection {
    type PaymentRepository = super::payment_repository::PaymentRepository;

    fn create_payment_repository(&self) -> Self::PaymentRepository {
        super::payment_repository::PaymentRepository::new(self.clone())
    }
}

//! Configuration for the payment tracker engine.
use serde::{Deserialize, Serialize};

/// Tracker-wide configuration with sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    /// Symbol prefixed to formatted amounts
    pub currency_symbol: String,
    /// Name of the persisted ledger document inside the data directory
    pub data_file_name: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            data_file_name: "payments.json".to_string(),
        }
    }
}

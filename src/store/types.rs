//! Document records and store error definitions.
//!
//! Field names serialize in camelCase to match the store's existing
//! document schema.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected a write.
    #[error("store write failed: {0}")]
    Write(String),

    /// The store could not be reached.
    #[error("store request failed: {0}")]
    Transport(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A user document, keyed by wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub address: String,
    pub user_name: String,
}

/// A transaction document, keyed by on-chain transaction hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub tx_hash: String,
    pub from_address: String,
    pub to_address: String,
    /// Decimal amount as entered, not base units.
    pub amount: f64,
    /// ISO-8601 instant of the record write.
    pub timestamp: String,
}

/// A reference entry appended to a user's transaction list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// List entry key.
    #[serde(rename = "_key")]
    pub key: String,
    /// Id of the referenced transaction document.
    #[serde(rename = "_ref")]
    pub reference: String,
}

//! Persistence recording.
//!
//! Writes transfer metadata into the document store after on-chain
//! confirmation, and provisions user documents on account changes.

use std::sync::Arc;

use alloy::primitives::{Address, TxHash};
use chrono::{SecondsFormat, Utc};

use crate::observability::metrics;
use crate::store::client::DocumentStore;
use crate::store::types::{ReferenceEntry, StoreResult, TransactionRecord, UserRecord};

/// Display name for freshly provisioned users.
const DEFAULT_DISPLAY_NAME: &str = "Unnamed";

/// Records transfers and users into a document store.
#[derive(Clone)]
pub struct TransferRecorder {
    store: Arc<dyn DocumentStore>,
}

impl TransferRecorder {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist a confirmed transfer.
    ///
    /// Upserts the transaction document, then appends a reference to the
    /// sender's transaction list. The two writes are sequential; if the
    /// second fails the transaction document stays behind unreferenced.
    pub async fn record(
        &self,
        tx_hash: TxHash,
        amount: f64,
        from: Address,
        to: Address,
    ) -> StoreResult<()> {
        let hash = tx_hash.to_string();
        let record = TransactionRecord {
            tx_hash: hash.clone(),
            from_address: from.to_string(),
            to_address: to.to_string(),
            amount,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        self.store.upsert_transaction(record).await.inspect_err(|_| {
            metrics::record_store_write("transaction", false);
        })?;
        metrics::record_store_write("transaction", true);

        let entry = ReferenceEntry {
            key: hash.clone(),
            reference: hash.clone(),
        };
        self.store
            .append_transaction_ref(&from.to_string(), entry)
            .await
            .inspect_err(|_| metrics::record_store_write("reference", false))?;
        metrics::record_store_write("reference", true);

        tracing::info!(tx_hash = %hash, "Transfer recorded");
        Ok(())
    }

    /// Idempotently create the user document for an account.
    pub async fn provision_user(&self, account: Address) -> StoreResult<()> {
        self.store
            .upsert_user(UserRecord {
                address: account.to_string(),
                user_name: DEFAULT_DISPLAY_NAME.to_string(),
            })
            .await
    }
}

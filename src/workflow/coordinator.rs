//! Transfer workflow coordination.
//!
//! # Responsibilities
//! - Drive wallet connection and detection
//! - Run the send workflow as strict sequential steps
//! - Own the session's account and loading transitions
//! - Surface every failure as a typed result

use std::sync::Arc;

use alloy::primitives::{Address, TxHash};

use crate::config::CoordinatorConfig;
use crate::observability::metrics;
use crate::registry::{Publication, TransferRegistry};
use crate::session::Session;
use crate::store::{DocumentStore, TransferRecorder};
use crate::wallet::{TransferParams, WalletConnector, WalletProvider};
use crate::workflow::amount::parse_amount;
use crate::workflow::types::WorkflowError;

/// Coordinates one page-session's transfer workflow across the wallet,
/// registry, and document store collaborators.
pub struct TransferCoordinator {
    wallet: Option<Arc<dyn WalletProvider>>,
    registry: Arc<dyn TransferRegistry>,
    recorder: TransferRecorder,
    connector: WalletConnector,
    session: Arc<Session>,
    gas_limit: u64,
    keyword: String,
}

impl TransferCoordinator {
    /// Wire the coordinator to its collaborators.
    ///
    /// `wallet` is `None` when no provider was detected; connect and send
    /// then fail with the install prompt.
    pub fn new(
        wallet: Option<Arc<dyn WalletProvider>>,
        registry: Arc<dyn TransferRegistry>,
        store: Arc<dyn DocumentStore>,
        config: &CoordinatorConfig,
    ) -> Self {
        let session = Arc::new(Session::new());
        let connector = WalletConnector::new(wallet.clone(), session.clone());

        Self {
            wallet,
            registry,
            recorder: TransferRecorder::new(store),
            connector,
            session,
            gas_limit: config.chain.gas_limit,
            keyword: config.registry.keyword.clone(),
        }
    }

    /// The session observers subscribe to.
    pub fn session(&self) -> Arc<Session> {
        self.session.clone()
    }

    /// Request wallet access and activate the first authorized account.
    pub async fn connect(&self) -> Result<Address, WorkflowError> {
        let account = self.connector.connect().await?;
        metrics::record_wallet_connected();
        self.provision(account).await;
        Ok(account)
    }

    /// Adopt an already-authorized account, if any, without prompting.
    ///
    /// Called once at session start, mirroring a page-mount check.
    pub async fn detect_existing_connection(&self) -> Result<Option<Address>, WorkflowError> {
        let detected = self.connector.detect_existing_connection().await?;
        if let Some(account) = detected {
            metrics::record_wallet_connected();
            self.provision(account).await;
        }
        Ok(detected)
    }

    /// Upsert the user document for a newly active account.
    ///
    /// A store failure leaves the account active; the upsert runs again on
    /// the next account change.
    async fn provision(&self, account: Address) {
        match self.recorder.provision_user(account).await {
            Ok(()) => metrics::record_store_write("user", true),
            Err(e) => {
                metrics::record_store_write("user", false);
                tracing::error!(error = %e, account = %account, "User provisioning failed");
            }
        }
    }

    /// Run the send workflow against the current form state.
    ///
    /// Steps, in strict sequence: claim the send slot, validate form
    /// state, submit the native transfer through the wallet, publish the
    /// record through the registry, flag loading, await confirmation,
    /// persist, clear loading. No step begins until the previous resolved
    /// and no retry is attempted.
    pub async fn send(&self) -> Result<TxHash, WorkflowError> {
        let _slot = self
            .session
            .try_begin_send()
            .ok_or(WorkflowError::TransferInFlight)?;

        let wallet = self.wallet.as_ref().ok_or_else(|| {
            tracing::warn!("No wallet provider detected; prompting install");
            WorkflowError::WalletUnavailable
        })?;

        let state = self.session.snapshot();
        let from = state.account.ok_or(WorkflowError::NotConnected)?;
        let to: Address = state
            .form
            .recipient
            .trim()
            .parse()
            .map_err(|_| WorkflowError::InvalidRecipient(state.form.recipient.clone()))?;
        let amount = parse_amount(&state.form.amount)?;

        wallet
            .send_transfer(TransferParams {
                from,
                to,
                gas_limit: self.gas_limit,
                value: amount.base_units,
            })
            .await
            .map_err(|e| {
                metrics::record_transfer_failed("wallet");
                tracing::error!(error = %e, "Native transfer failed");
                e
            })?;
        metrics::record_transfer_submitted();

        let pending = self
            .registry
            .publish(Publication {
                receiver: to,
                amount: amount.base_units,
                message: format!("Transferring ETH {} to {}", state.form.amount.trim(), to),
                keyword: self.keyword.clone(),
            })
            .await
            .map_err(|e| {
                metrics::record_transfer_failed("publish");
                tracing::error!(error = %e, "Registry publish failed");
                e
            })?;
        let tx_hash = pending.tx_hash();

        self.session.set_loading(true);

        // From here on a failure returns with the loading flag still set;
        // only a fresh session clears it.
        pending.wait().await.map_err(|e| {
            metrics::record_transfer_failed("confirmation");
            tracing::error!(error = %e, tx_hash = %tx_hash, "Confirmation wait failed");
            e
        })?;

        self.recorder
            .record(tx_hash, amount.decimal, from, to)
            .await
            .map_err(|e| {
                metrics::record_transfer_failed("persistence");
                tracing::error!(error = %e, tx_hash = %tx_hash, "Persisting transfer failed");
                e
            })?;

        self.session.set_loading(false);
        metrics::record_transfer_confirmed();
        tracing::info!(tx_hash = %tx_hash, to = %to, "Transfer workflow complete");
        Ok(tx_hash)
    }
}

impl std::fmt::Debug for TransferCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferCoordinator")
            .field("gas_limit", &self.gas_limit)
            .field("keyword", &self.keyword)
            .field("wallet_present", &self.wallet.is_some())
            .finish()
    }
}

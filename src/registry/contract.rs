//! Alloy-backed registry proxy.
//!
//! Encodes `publishTransaction` calldata against the fixed contract
//! address and confirms publications by polling for receipts.

use std::sync::Arc;
use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use tokio::time::{interval, timeout};

use crate::config::{ChainConfig, RegistryConfig};
use crate::registry::proxy::{PendingPublication, Publication, RegistryError, TransferRegistry};

sol! {
    /// Records a transfer's metadata on-chain.
    function publishTransaction(address receiver, uint256 amount, string message, string keyword);
}

/// Registry proxy bound to a fixed contract address and a signer-backed
/// provider.
pub struct AlloyRegistry {
    provider: Arc<dyn Provider + Send + Sync>,
    contract_address: Address,
    poll_interval: Duration,
    confirmation_deadline: Option<Duration>,
}

impl AlloyRegistry {
    /// Bind the proxy to the configured contract.
    pub fn new(
        provider: Arc<dyn Provider + Send + Sync>,
        registry: &RegistryConfig,
        chain: &ChainConfig,
    ) -> Result<Self, RegistryError> {
        let contract_address: Address = registry
            .contract_address
            .parse()
            .map_err(|e| RegistryError::Publish(format!("Invalid contract address: {}", e)))?;

        Ok(Self {
            provider,
            contract_address,
            poll_interval: Duration::from_millis(chain.poll_interval_ms),
            confirmation_deadline: chain.confirmation_timeout_secs.map(Duration::from_secs),
        })
    }

    /// The contract address this proxy is bound to.
    pub fn contract_address(&self) -> Address {
        self.contract_address
    }
}

#[async_trait]
impl TransferRegistry for AlloyRegistry {
    async fn publish(
        &self,
        publication: Publication,
    ) -> Result<Box<dyn PendingPublication>, RegistryError> {
        let call = publishTransactionCall {
            receiver: publication.receiver,
            amount: publication.amount,
            message: publication.message,
            keyword: publication.keyword,
        };

        let tx = TransactionRequest::default()
            .with_to(self.contract_address)
            .with_input(Bytes::from(call.abi_encode()));

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| RegistryError::Publish(e.to_string()))?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(
            tx_hash = %tx_hash,
            contract = %self.contract_address,
            "Publication submitted"
        );

        Ok(Box::new(AlloyPending {
            provider: self.provider.clone(),
            tx_hash,
            poll_interval: self.poll_interval,
            deadline: self.confirmation_deadline,
        }))
    }
}

impl std::fmt::Debug for AlloyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlloyRegistry")
            .field("contract_address", &self.contract_address)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

/// Pending publication confirmed by receipt polling.
struct AlloyPending {
    provider: Arc<dyn Provider + Send + Sync>,
    tx_hash: TxHash,
    poll_interval: Duration,
    deadline: Option<Duration>,
}

impl AlloyPending {
    async fn poll_until_confirmed(&self) -> Result<(), RegistryError> {
        let mut ticker = interval(self.poll_interval);

        loop {
            ticker.tick().await;

            let receipt = self
                .provider
                .get_transaction_receipt(self.tx_hash)
                .await
                .map_err(|e| RegistryError::Rpc(e.to_string()))?;

            let receipt = match receipt {
                Some(r) => r,
                None => {
                    tracing::debug!(tx_hash = %self.tx_hash, "Publication pending");
                    continue;
                }
            };

            if !receipt.status() {
                return Err(RegistryError::Reverted(self.tx_hash.to_string()));
            }

            tracing::info!(
                tx_hash = %self.tx_hash,
                block = receipt.block_number.unwrap_or_default(),
                "Publication confirmed"
            );
            return Ok(());
        }
    }
}

#[async_trait]
impl PendingPublication for AlloyPending {
    fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    async fn wait(self: Box<Self>) -> Result<(), RegistryError> {
        match self.deadline {
            Some(deadline) => timeout(deadline, self.poll_until_confirmed())
                .await
                .map_err(|_| RegistryError::ConfirmationTimeout(deadline.as_secs()))?,
            None => self.poll_until_confirmed().await,
        }
    }
}

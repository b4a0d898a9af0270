//! Transfer registry seam.
//!
//! The registry is the on-chain contract that records transfer metadata.
//! Publishing returns a pending handle; the workflow awaits its
//! confirmation before persisting anything.

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the registry proxy.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The publish call could not be submitted.
    #[error("registry publish failed: {0}")]
    Publish(String),

    /// RPC failure while awaiting confirmation.
    #[error("registry RPC error: {0}")]
    Rpc(String),

    /// The publication was included but reverted.
    #[error("registry transaction reverted: {0}")]
    Reverted(String),

    /// The configured confirmation deadline elapsed.
    #[error("publication not confirmed after {0} seconds")]
    ConfirmationTimeout(u64),
}

/// A transfer record to publish on-chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    /// Transfer recipient.
    pub receiver: Address,
    /// Transfer amount in base units.
    pub amount: U256,
    /// Human-readable description.
    pub message: String,
    /// Category tag, `"TRANSFER"` for this workflow.
    pub keyword: String,
}

/// A submitted but unconfirmed publication.
#[async_trait]
pub trait PendingPublication: Send {
    /// Hash of the publication transaction.
    fn tx_hash(&self) -> TxHash;

    /// Block until the chain confirms the publication.
    ///
    /// Without a configured deadline this waits indefinitely.
    async fn wait(self: Box<Self>) -> Result<(), RegistryError>;
}

/// The contract proxy collaborator.
#[async_trait]
pub trait TransferRegistry: Send + Sync {
    /// Invoke the contract's record-publishing operation.
    async fn publish(
        &self,
        publication: Publication,
    ) -> Result<Box<dyn PendingPublication>, RegistryError>;
}

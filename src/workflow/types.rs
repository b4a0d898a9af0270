//! Workflow error definitions.

use thiserror::Error;

use crate::registry::RegistryError;
use crate::store::StoreError;
use crate::wallet::{ConnectError, WalletError};

/// Errors surfaced by the transfer workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// No wallet provider is available; the caller should surface an
    /// install prompt.
    #[error("no wallet provider available; please install a wallet")]
    WalletUnavailable,

    /// No active account; connect a wallet first.
    #[error("no active account; connect a wallet first")]
    NotConnected,

    /// Another transfer holds the send slot.
    #[error("another transfer is already in flight")]
    TransferInFlight,

    /// The destination address does not parse.
    #[error("invalid recipient address: {0}")]
    InvalidRecipient(String),

    /// The amount is not a parseable decimal value.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ConnectError> for WorkflowError {
    fn from(err: ConnectError) -> Self {
        match err {
            ConnectError::WalletUnavailable => WorkflowError::WalletUnavailable,
            ConnectError::NoAccounts => {
                WorkflowError::Wallet(WalletError::Rejected("wallet authorized no accounts".into()))
            }
            ConnectError::Wallet(e) => WorkflowError::Wallet(e),
        }
    }
}

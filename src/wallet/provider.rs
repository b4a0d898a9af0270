//! Wallet provider seam.
//!
//! Models the external wallet object the coordinator talks to: account
//! discovery, account authorization, and raw native-transfer submission.
//! Implementations may suspend indefinitely while awaiting out-of-process
//! approval; there is no cancellation once a transfer is requested.

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a wallet provider.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The user or provider declined the request.
    #[error("wallet request rejected: {0}")]
    Rejected(String),

    /// Provider-side failure (transport, signing, malformed response).
    #[error("wallet provider error: {0}")]
    Provider(String),

    /// The request did not complete within the configured timeout.
    #[error("wallet request timed out after {0} seconds")]
    Timeout(u64),
}

/// Parameters of a native value transfer.
///
/// Mirrors the `eth_sendTransaction` request shape: sender, recipient, a
/// gas-limit hint, and the value in base units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferParams {
    pub from: Address,
    pub to: Address,
    pub gas_limit: u64,
    pub value: U256,
}

/// The injected wallet collaborator.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request account access, prompting for permission if needed
    /// (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Query already-authorized accounts without prompting
    /// (`eth_accounts`).
    async fn authorized_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Submit a native value transfer (`eth_sendTransaction`).
    ///
    /// Resolves with the transaction hash once the wallet has accepted
    /// and broadcast the transfer.
    async fn send_transfer(&self, transfer: TransferParams) -> Result<TxHash, WalletError>;
}

//! Wallet connection handling.
//!
//! Two entry points with the same contract: `connect` prompts for account
//! access, `detect_existing_connection` only queries what is already
//! authorized. Both store the first account as the session's active
//! account.

use std::sync::Arc;

use alloy::primitives::Address;
use thiserror::Error;

use crate::session::Session;
use crate::wallet::provider::{WalletError, WalletProvider};

/// Errors from the connect operations.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// No wallet provider is available; the caller should surface an
    /// install prompt.
    #[error("no wallet provider available; please install a wallet")]
    WalletUnavailable,

    /// The provider responded but authorized no accounts for a
    /// permission-prompting request.
    #[error("wallet authorized no accounts")]
    NoAccounts,

    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// Connects a wallet provider to a session.
pub struct WalletConnector {
    wallet: Option<Arc<dyn WalletProvider>>,
    session: Arc<Session>,
}

impl WalletConnector {
    pub fn new(wallet: Option<Arc<dyn WalletProvider>>, session: Arc<Session>) -> Self {
        Self { wallet, session }
    }

    fn wallet(&self) -> Result<&Arc<dyn WalletProvider>, ConnectError> {
        self.wallet.as_ref().ok_or_else(|| {
            tracing::warn!("No wallet provider detected; prompting install");
            ConnectError::WalletUnavailable
        })
    }

    /// Request account access and store the first authorized address.
    pub async fn connect(&self) -> Result<Address, ConnectError> {
        let wallet = self.wallet()?;

        let accounts = wallet.request_accounts().await.map_err(|e| {
            tracing::error!(error = %e, "Account request failed");
            e
        })?;

        let account = *accounts.first().ok_or(ConnectError::NoAccounts)?;
        self.session.set_account(account);
        tracing::info!(account = %account, "Wallet connected");
        Ok(account)
    }

    /// Check for an already-authorized account without prompting.
    ///
    /// An empty answer is not an error; the session is left untouched.
    pub async fn detect_existing_connection(&self) -> Result<Option<Address>, ConnectError> {
        let wallet = self.wallet()?;

        let accounts = wallet.authorized_accounts().await.map_err(|e| {
            tracing::error!(error = %e, "Authorized-accounts query failed");
            e
        })?;

        match accounts.first() {
            Some(&account) => {
                self.session.set_account(account);
                tracing::info!(account = %account, "Existing wallet connection detected");
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }
}

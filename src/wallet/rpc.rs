//! Signer-backed wallet provider over JSON-RPC.
//!
//! Headless stand-in for a browser-injected wallet: a local signer loaded
//! from the environment, submitting transactions through an alloy provider.
//!
//! # Security
//! - The signer key is loaded ONLY from an environment variable
//! - Keys are never logged or serialized

use std::sync::Arc;
use std::time::Duration;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use tokio::time::timeout;

use crate::config::ChainConfig;
use crate::wallet::provider::{TransferParams, WalletError, WalletProvider};

/// Environment variable name for the signer key.
pub const SIGNER_KEY_ENV_VAR: &str = "COORDINATOR_SIGNER_KEY";

/// Wallet provider backed by a local signer and an RPC endpoint.
pub struct AlloyWallet {
    provider: Arc<dyn Provider + Send + Sync>,
    address: Address,
    timeout_duration: Duration,
}

impl AlloyWallet {
    /// Create a wallet from a hex-encoded private key string.
    pub fn from_private_key(private_key_hex: &str, config: &ChainConfig) -> Result<Self, WalletError> {
        // Strip 0x prefix if present
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| WalletError::Provider(format!("Invalid signer key format: {}", e)))?;
        let address = signer.address();

        let rpc_url: url::Url = config
            .rpc_url
            .parse()
            .map_err(|e| WalletError::Provider(format!("Invalid RPC URL '{}': {}", config.rpc_url, e)))?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(rpc_url);

        tracing::info!(
            address = %address,
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            "Wallet provider initialized"
        );

        Ok(Self {
            provider: Arc::new(provider),
            address,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
        })
    }

    /// Load the signer key from the environment.
    ///
    /// Reads `COORDINATOR_SIGNER_KEY`.
    pub fn from_env(config: &ChainConfig) -> Result<Self, WalletError> {
        let private_key = std::env::var(SIGNER_KEY_ENV_VAR).map_err(|_| {
            WalletError::Provider(format!("Environment variable {} not set", SIGNER_KEY_ENV_VAR))
        })?;

        Self::from_private_key(&private_key, config)
    }

    /// The signer's address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Share the underlying provider, e.g. with a registry proxy bound to
    /// the same signer.
    pub fn provider(&self) -> Arc<dyn Provider + Send + Sync> {
        self.provider.clone()
    }
}

#[async_trait]
impl WalletProvider for AlloyWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        // A local signer needs no permission prompt.
        Ok(vec![self.address])
    }

    async fn authorized_accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(vec![self.address])
    }

    async fn send_transfer(&self, transfer: TransferParams) -> Result<TxHash, WalletError> {
        let tx = TransactionRequest::default()
            .with_from(transfer.from)
            .with_to(transfer.to)
            .with_value(transfer.value)
            .with_gas_limit(transfer.gas_limit);

        let pending = timeout(self.timeout_duration, self.provider.send_transaction(tx))
            .await
            .map_err(|_| WalletError::Timeout(self.timeout_duration.as_secs()))?
            .map_err(|e| WalletError::Provider(format!("Transfer submission failed: {}", e)))?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(tx_hash = %tx_hash, to = %transfer.to, "Native transfer submitted");
        Ok(tx_hash)
    }
}

impl std::fmt::Debug for AlloyWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlloyWallet")
            .field("address", &self.address)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_wallet_from_private_key() {
        let wallet = AlloyWallet::from_private_key(TEST_PRIVATE_KEY, &ChainConfig::default()).unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_wallet_with_0x_prefix() {
        let wallet = AlloyWallet::from_private_key(
            &format!("0x{}", TEST_PRIVATE_KEY),
            &ChainConfig::default(),
        )
        .unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_invalid_private_key() {
        let result = AlloyWallet::from_private_key("invalid_key", &ChainConfig::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid signer key"));
    }

    #[tokio::test]
    async fn test_accounts_report_signer_address() {
        let wallet = AlloyWallet::from_private_key(TEST_PRIVATE_KEY, &ChainConfig::default()).unwrap();
        let accounts = wallet.authorized_accounts().await.unwrap();
        assert_eq!(accounts, vec![wallet.address()]);
    }
}

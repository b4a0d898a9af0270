//! Wallet integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment variable (signer key)
//!     → rpc.rs (signer-backed provider implementation)
//!     → provider.rs (the WalletProvider seam)
//!     → connector.rs (connect / detect, session account)
//! ```
//!
//! # Security Constraints
//! - Signer keys ONLY from environment variables
//! - Never log keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod connector;
pub mod provider;
pub mod rpc;

pub use connector::{ConnectError, WalletConnector};
pub use provider::{TransferParams, WalletError, WalletProvider};
pub use rpc::AlloyWallet;

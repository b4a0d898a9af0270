//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! coordinator. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the transfer coordinator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Chain connectivity (RPC endpoint, gas, confirmation polling).
    pub chain: ChainConfig,

    /// On-chain transfer registry contract settings.
    pub registry: RegistryConfig,

    /// Document store settings.
    pub store: StoreConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Chain connectivity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Expected chain ID.
    pub chain_id: u64,

    /// Timeout for individual RPC requests in seconds.
    pub rpc_timeout_secs: u64,

    /// Gas limit hint attached to native transfers.
    pub gas_limit: u64,

    /// Interval between confirmation polls in milliseconds.
    pub poll_interval_ms: u64,

    /// Optional upper bound on the confirmation wait in seconds.
    ///
    /// `None` waits indefinitely; an unconfirmed transaction stalls the
    /// workflow.
    pub confirmation_timeout_secs: Option<u64>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 1,
            rpc_timeout_secs: 10,
            // 0x7EF40, the hint the transfer page always attached.
            gas_limit: 520_000,
            poll_interval_ms: 2_000,
            confirmation_timeout_secs: None,
        }
    }
}

/// Transfer registry contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Address of the registry contract.
    pub contract_address: String,

    /// Category tag recorded with every publication.
    pub keyword: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            contract_address: String::new(),
            keyword: "TRANSFER".to_string(),
        }
    }
}

/// Document store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base endpoint URL of the document store API.
    pub endpoint: String,

    /// Dataset name mutations are scoped to.
    pub dataset: String,

    /// Environment variable holding the API token, if the store requires
    /// authentication. The token itself never appears in config files.
    pub token_env_var: Option<String>,

    /// Timeout for store requests in seconds.
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3333".to_string(),
            dataset: "production".to_string(),
            token_env_var: None,
            request_timeout_secs: 15,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter (overridden by `RUST_LOG`).
    pub log_filter: String,

    /// Emit JSON logs instead of the pretty format.
    pub log_json: bool,

    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Bind address for the metrics exporter.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "transfer_coordinator=info".to_string(),
            log_json: false,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

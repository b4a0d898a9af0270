//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses and URLs actually parse
//! - Validate value ranges (timeouts > 0, gas covers intrinsic cost)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CoordinatorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;

use crate::config::schema::CoordinatorConfig;

/// Intrinsic gas cost of a plain value transfer.
const TRANSFER_INTRINSIC_GAS: u64 = 21_000;

/// A single semantic violation found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &CoordinatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.chain.rpc_url.parse::<url::Url>() {
        errors.push(invalid("chain.rpc_url", format!("not a valid URL: {}", e)));
    }
    if config.chain.rpc_timeout_secs == 0 {
        errors.push(invalid("chain.rpc_timeout_secs", "must be greater than zero"));
    }
    if config.chain.gas_limit < TRANSFER_INTRINSIC_GAS {
        errors.push(invalid(
            "chain.gas_limit",
            format!("must cover the {} intrinsic transfer cost", TRANSFER_INTRINSIC_GAS),
        ));
    }
    if config.chain.poll_interval_ms == 0 {
        errors.push(invalid("chain.poll_interval_ms", "must be greater than zero"));
    }

    if config.registry.contract_address.is_empty() {
        errors.push(invalid("registry.contract_address", "must be set"));
    } else if config.registry.contract_address.parse::<Address>().is_err() {
        errors.push(invalid(
            "registry.contract_address",
            "not a valid contract address",
        ));
    }
    if config.registry.keyword.is_empty() {
        errors.push(invalid("registry.keyword", "must be set"));
    }

    if let Err(e) = config.store.endpoint.parse::<url::Url>() {
        errors.push(invalid("store.endpoint", format!("not a valid URL: {}", e)));
    }
    if config.store.dataset.is_empty() {
        errors.push(invalid("store.dataset", "must be set"));
    }
    if config.store.request_timeout_secs == 0 {
        errors.push(invalid("store.request_timeout_secs", "must be greater than zero"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::CoordinatorConfig;

    fn valid_config() -> CoordinatorConfig {
        let mut config = CoordinatorConfig::default();
        config.registry.contract_address =
            "0x2e983a1ba5e8b38aaaec4b440b9ddcfbf72e15d1".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_default_config_missing_contract() {
        let errors = validate_config(&CoordinatorConfig::default()).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "registry.contract_address"));
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = valid_config();
        config.chain.rpc_url = "not a url".to_string();
        config.chain.gas_limit = 100;
        config.store.dataset = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.field == "chain.rpc_url"));
        assert!(errors.iter().any(|e| e.field == "chain.gas_limit"));
        assert!(errors.iter().any(|e| e.field == "store.dataset"));
    }

    #[test]
    fn test_malformed_contract_address() {
        let mut config = valid_config();
        config.registry.contract_address = "0x123".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("contract address"));
    }
}

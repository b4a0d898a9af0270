//! Amount conversion.
//!
//! The form carries a human-entered decimal string; the chain wants the
//! 18-decimal base-unit integer and the store wants the decimal value.

use alloy::primitives::utils::parse_ether;
use alloy::primitives::U256;

use crate::workflow::types::WorkflowError;

/// A form amount in both representations the workflow needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedAmount {
    /// 18-decimal fixed-point base units.
    pub base_units: U256,
    /// The decimal value as entered, for the persisted record.
    pub decimal: f64,
}

/// Convert a decimal string into base units.
pub fn parse_amount(input: &str) -> Result<ParsedAmount, WorkflowError> {
    let trimmed = input.trim();

    let base_units = parse_ether(trimmed)
        .map_err(|e| WorkflowError::InvalidAmount(format!("{}: {}", trimmed, e)))?;
    let decimal: f64 = trimmed
        .parse()
        .map_err(|_| WorkflowError::InvalidAmount(trimmed.to_string()))?;

    Ok(ParsedAmount {
        base_units,
        decimal,
    })
}

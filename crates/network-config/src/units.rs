//! Conversions between human-readable ether amounts and wei.
//!
//! The same 18-decimal scale applies to LINK, so these are also used for the
//! mock coordinator's fees.

use crate::ConfigError;
use alloy::primitives::U256;
use alloy::primitives::utils::{format_units, parse_units};

pub const DECIMALS: u8 = 18;

/// Parse a decimal amount such as `"0.25"` into its smallest unit.
pub fn parse_ether(value: &str) -> Result<U256, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidAmount {
        value: value.to_string(),
        reason,
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("amount is empty".to_string()));
    }
    if trimmed.starts_with('-') {
        return Err(invalid("amount cannot be negative".to_string()));
    }
    if let Some((_, fraction)) = trimmed.split_once('.') {
        if fraction.len() > DECIMALS as usize {
            return Err(invalid(format!(
                "more than {DECIMALS} decimal places would be truncated"
            )));
        }
    }

    parse_units(trimmed, DECIMALS)
        .map(|units| units.get_absolute())
        .map_err(|err| invalid(err.to_string()))
}

/// Render an amount in its shortest decimal form, e.g. `"0.25"` or `"1"`.
pub fn format_ether(amount: U256) -> String {
    let full = match format_units(amount, DECIMALS) {
        Ok(full) => full,
        // 18 decimals is always within range
        Err(_) => return amount.to_string(),
    };

    match full.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => full,
    }
}

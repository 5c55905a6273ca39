//! Format checks on user supplied text, run before any codec or policy logic.

use alloy_primitives::Address;

use crate::{constants::PUBKEY_HEX_LENGTH, error::AmountInputError};

const ADDRESS_HEX_LENGTH: usize = 40;

fn is_hex_of_length(s: &str, length: usize) -> bool {
    s.len() == length && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// A `0x`-prefixed 20-byte hex address. Mixed-case input must carry a valid EIP-55 checksum.
pub fn validate_address(address: &str) -> bool {
    let Some(address_hex) = address.strip_prefix("0x") else {
        return false;
    };
    if !is_hex_of_length(address_hex, ADDRESS_HEX_LENGTH) {
        return false;
    }

    let has_lowercase = address_hex.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = address_hex.chars().any(|c| c.is_ascii_uppercase());
    if has_lowercase && has_uppercase {
        return Address::parse_checksummed(address, None).is_ok();
    }
    true
}

/// 96 hex characters, optionally `0x`-prefixed.
pub fn validate_pubkey(pubkey: &str) -> bool {
    is_hex_of_length(pubkey.strip_prefix("0x").unwrap_or(pubkey), PUBKEY_HEX_LENGTH)
}

/// Parses a withdrawal amount in ETH as typed by the user.
pub fn parse_amount_input(input: &str) -> Result<f64, AmountInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "NaN" {
        return Err(AmountInputError::AmountRequired);
    }

    let amount = match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => {
            return Err(AmountInputError::UnparseableAmount {
                input: input.to_string(),
            });
        }
    };

    if amount <= 0.0 {
        return Err(AmountInputError::NonPositiveAmount {
            input: input.to_string(),
        });
    }

    Ok(amount)
}

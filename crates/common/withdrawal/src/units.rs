//! Conversions between ETH, Gwei and wei.
//!
//! ETH amounts are floats supplied by users. They are scaled to whole units in decimal, from the
//! shortest representation that reads back as the same float, so `0.0157` ETH is exactly
//! 15_700_000 Gwei. Digits beyond the target unit are truncated. Gwei is carried as `u64` (the
//! on-chain width of a withdrawal amount) and wei as [U256].

use alloy_primitives::{
    U256,
    utils::{ParseUnits, Unit},
};

use crate::{
    constants::{GWEI_PER_ETH, WEI_PER_ETH},
    error::UnitError,
};

fn check_amount(eth: f64) -> Result<f64, UnitError> {
    if !eth.is_finite() {
        return Err(UnitError::NonFinite(eth));
    }
    if eth < 0.0 {
        return Err(UnitError::Negative(eth));
    }
    Ok(eth)
}

/// `eth` expressed in `unit`, rounded down.
fn scale_eth(eth: f64, unit: Unit, unit_name: &'static str) -> Result<U256, UnitError> {
    let eth = check_amount(eth)?;
    // f64 Display never uses exponent notation.
    ParseUnits::parse_units(&eth.to_string(), unit)
        .map(ParseUnits::get_absolute)
        .map_err(|_| UnitError::Overflow {
            value: eth.to_string(),
            unit: unit_name,
        })
}

/// `floor(eth * 10^9)`. Anything below one Gwei is discarded.
pub fn eth_to_gwei(eth: f64) -> Result<u64, UnitError> {
    let gwei = scale_eth(eth, Unit::GWEI, "u64 Gwei")?;
    u64::try_from(gwei).map_err(|_| UnitError::Overflow {
        value: eth.to_string(),
        unit: "u64 Gwei",
    })
}

/// `floor(eth * 10^18)`.
pub fn eth_to_wei(eth: f64) -> Result<U256, UnitError> {
    scale_eth(eth, Unit::ETHER, "U256 wei")
}

/// Display approximation of a wei amount in ETH. Never use the result to gate a withdrawal.
pub fn wei_to_eth(wei: U256) -> f64 {
    match u128::try_from(wei) {
        Ok(wei) => wei as f64 / WEI_PER_ETH as f64,
        Err(_) => f64::INFINITY,
    }
}

pub fn gwei_to_eth(gwei: u64) -> f64 {
    gwei as f64 / GWEI_PER_ETH as f64
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0)]
    #[case(1.0, 1_000_000_000)]
    #[case(32.0, 32_000_000_000)]
    #[case(1.23456789, 1_234_567_890)]
    #[case(0.0000000015, 1)]
    #[case(0.0000000009, 0)]
    fn test_eth_to_gwei_floors(#[case] eth: f64, #[case] expected: u64) {
        assert_eq!(eth_to_gwei(eth), Ok(expected));
    }

    #[test]
    fn test_eth_to_gwei_rejects_bad_input() {
        assert!(matches!(eth_to_gwei(f64::NAN), Err(UnitError::NonFinite(_))));
        assert!(matches!(
            eth_to_gwei(f64::INFINITY),
            Err(UnitError::NonFinite(_))
        ));
        assert_eq!(eth_to_gwei(-1.0), Err(UnitError::Negative(-1.0)));
        assert!(matches!(
            eth_to_gwei(2e10),
            Err(UnitError::Overflow { .. })
        ));
    }

    #[rstest]
    #[case(0.0157, 15_700_000)]
    #[case(0.000000015, 15)]
    #[case(0.000000063, 63)]
    #[case(0.1 + 0.2, 300_000_000)]
    #[case(2.01, 2_010_000_000)]
    fn test_eth_to_gwei_is_exact_in_decimal(#[case] eth: f64, #[case] expected: u64) {
        assert_eq!(eth_to_gwei(eth), Ok(expected));
    }

    #[test]
    fn test_eth_to_wei() {
        assert_eq!(
            eth_to_wei(32.0),
            Ok(U256::from(32_000_000_000_000_000_000u128))
        );
        assert_eq!(eth_to_wei(0.5), Ok(U256::from(500_000_000_000_000_000u128)));
        assert_eq!(eth_to_wei(0.0157), Ok(U256::from(15_700_000_000_000_000u128)));
        assert_eq!(eth_to_wei(0.0), Ok(U256::ZERO));
        assert!(matches!(eth_to_wei(1e300), Err(UnitError::Overflow { .. })));
        assert_eq!(eth_to_wei(-0.5), Err(UnitError::Negative(-0.5)));
    }

    #[test]
    fn test_wei_to_eth() {
        assert_eq!(wei_to_eth(U256::from(32_000_000_000_000_000_000u128)), 32.0);
        assert_eq!(wei_to_eth(U256::from(1_500_000_000_000_000_000u128)), 1.5);
        assert_eq!(wei_to_eth(U256::ZERO), 0.0);
        assert_eq!(wei_to_eth(U256::MAX), f64::INFINITY);
        assert_eq!(gwei_to_eth(1_500_000_000), 1.5);
    }
}

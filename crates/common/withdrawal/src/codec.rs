//! Calldata for the EIP-7002 withdrawal request predeploy.
//!
//! The predeploy takes exactly 56 bytes of input: the 48-byte validator public key followed by
//! the requested amount in Gwei as an 8-byte big-endian integer. An amount of zero asks for a
//! full exit.

use std::{fmt, str::FromStr};

use alloy_primitives::{FixedBytes, hex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::{
    constants::{
        AMOUNT_LENGTH, FULL_EXIT_REQUEST_AMOUNT, PUBKEY_HEX_LENGTH, PUBKEY_LENGTH,
        WITHDRAWAL_PAYLOAD_HEX_LENGTH, WITHDRAWAL_PAYLOAD_LENGTH,
    },
    error::CodecError,
    units::{eth_to_gwei, gwei_to_eth},
    validator::ValidatorPubkey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalPayload(FixedBytes<WITHDRAWAL_PAYLOAD_LENGTH>);

impl WithdrawalPayload {
    pub fn new(pubkey: &ValidatorPubkey, amount_gwei: u64) -> Self {
        let mut bytes = [0u8; WITHDRAWAL_PAYLOAD_LENGTH];
        bytes[..PUBKEY_LENGTH].copy_from_slice(pubkey.as_slice());
        bytes[PUBKEY_LENGTH..].copy_from_slice(&amount_gwei.to_be_bytes());
        Self(FixedBytes(bytes))
    }

    pub fn full_exit(pubkey: &ValidatorPubkey) -> Self {
        Self::new(pubkey, FULL_EXIT_REQUEST_AMOUNT)
    }

    pub fn pubkey(&self) -> ValidatorPubkey {
        FixedBytes::from_slice(&self.0[..PUBKEY_LENGTH])
    }

    pub fn amount_gwei(&self) -> u64 {
        let mut amount = [0u8; AMOUNT_LENGTH];
        amount.copy_from_slice(&self.0[PUBKEY_LENGTH..]);
        u64::from_be_bytes(amount)
    }

    pub fn is_full_exit(&self) -> bool {
        self.amount_gwei() == FULL_EXIT_REQUEST_AMOUNT
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Display for WithdrawalPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_prefixed(self.0))
    }
}

impl FromStr for WithdrawalPayload {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let payload_hex = strip_hex_prefix(s);
        if payload_hex.len() != WITHDRAWAL_PAYLOAD_HEX_LENGTH {
            return Err(CodecError::InvalidPayloadLength {
                actual: payload_hex.len(),
                expected: WITHDRAWAL_PAYLOAD_HEX_LENGTH,
            });
        }
        let bytes = FixedBytes::<WITHDRAWAL_PAYLOAD_LENGTH>::from_str(payload_hex)
            .map_err(|err| CodecError::InvalidHex(err.to_string()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for WithdrawalPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WithdrawalPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Decoded view of a [WithdrawalPayload].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedWithdrawal {
    pub pubkey: ValidatorPubkey,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount_gwei: u64,
    #[serde(rename = "amountETH")]
    pub amount_eth: f64,
}

impl From<WithdrawalPayload> for DecodedWithdrawal {
    fn from(payload: WithdrawalPayload) -> Self {
        let amount_gwei = payload.amount_gwei();
        Self {
            pubkey: payload.pubkey(),
            amount_gwei,
            amount_eth: gwei_to_eth(amount_gwei),
        }
    }
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

/// Parses a validator public key given as hex, with or without a `0x` prefix.
pub fn parse_pubkey(pubkey: &str) -> Result<ValidatorPubkey, CodecError> {
    let pubkey_hex = strip_hex_prefix(pubkey);
    if pubkey_hex.len() != PUBKEY_HEX_LENGTH {
        return Err(CodecError::InvalidPubkeyLength {
            actual: pubkey_hex.len(),
            expected: PUBKEY_HEX_LENGTH,
        });
    }
    FixedBytes::<PUBKEY_LENGTH>::from_str(pubkey_hex)
        .map_err(|err| CodecError::InvalidHex(err.to_string()))
}

/// Encodes a withdrawal of `amount_eth` from the validator `pubkey`.
///
/// The amount is truncated to whole Gwei in decimal. Zero requests a full exit.
pub fn encode_withdrawal_data(
    pubkey: &str,
    amount_eth: f64,
) -> Result<WithdrawalPayload, CodecError> {
    let pubkey = parse_pubkey(pubkey)?;
    let amount_gwei = eth_to_gwei(amount_eth)?;
    debug!("Encoding withdrawal of {amount_gwei} Gwei for validator {pubkey}");
    Ok(WithdrawalPayload::new(&pubkey, amount_gwei))
}

pub fn decode_withdrawal_data(data: &str) -> Result<DecodedWithdrawal, CodecError> {
    Ok(data.parse::<WithdrawalPayload>()?.into())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn pubkey_hex(c: char) -> String {
        std::iter::repeat_n(c, PUBKEY_HEX_LENGTH).collect()
    }

    #[test]
    fn test_full_exit_example() {
        let pubkey = format!("0x{}", pubkey_hex('a'));
        let payload = encode_withdrawal_data(&pubkey, 0.0).expect("valid pubkey");
        let encoded = payload.to_string();

        let body = encoded.strip_prefix("0x").expect("prefixed");
        assert_eq!(body.len(), WITHDRAWAL_PAYLOAD_HEX_LENGTH);
        assert_eq!(body, format!("{}{}", pubkey_hex('a'), "0".repeat(16)));
        assert!(payload.is_full_exit());
    }

    #[test]
    fn test_prefix_is_optional() {
        let with_prefix = encode_withdrawal_data(&format!("0x{}", pubkey_hex('b')), 1.0)
            .expect("valid pubkey");
        let without_prefix =
            encode_withdrawal_data(&pubkey_hex('b'), 1.0).expect("valid pubkey");
        assert_eq!(with_prefix, without_prefix);
    }

    #[test]
    fn test_amount_is_big_endian_gwei() {
        let payload = encode_withdrawal_data(&pubkey_hex('c'), 1.5).expect("valid pubkey");
        let encoded = payload.to_string();
        // 1.5 ETH = 1_500_000_000 Gwei = 0x59682f00
        assert!(encoded.ends_with("0000000059682f00"));
        assert_eq!(payload.amount_gwei(), 1_500_000_000);
        assert_eq!(payload.as_slice().len(), WITHDRAWAL_PAYLOAD_LENGTH);
    }

    #[test]
    fn test_sub_gwei_amount_is_floored() {
        let payload =
            encode_withdrawal_data(&pubkey_hex('d'), 0.0000000015).expect("valid pubkey");
        assert_eq!(payload.amount_gwei(), 1);
    }

    #[rstest]
    #[case(95)]
    #[case(97)]
    #[case(0)]
    fn test_invalid_pubkey_length(#[case] length: usize) {
        let pubkey = format!("0x{}", "a".repeat(length));
        assert_eq!(
            encode_withdrawal_data(&pubkey, 1.0),
            Err(CodecError::InvalidPubkeyLength {
                actual: length,
                expected: PUBKEY_HEX_LENGTH,
            })
        );
    }

    #[test]
    fn test_invalid_pubkey_hex() {
        assert!(matches!(
            encode_withdrawal_data(&pubkey_hex('z'), 1.0),
            Err(CodecError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_non_finite_amount() {
        assert!(matches!(
            encode_withdrawal_data(&pubkey_hex('a'), f64::NAN),
            Err(CodecError::Unit(_))
        ));
    }

    #[rstest]
    #[case(111)]
    #[case(113)]
    fn test_invalid_payload_length(#[case] length: usize) {
        let data = format!("0x{}", "0".repeat(length));
        assert_eq!(
            decode_withdrawal_data(&data),
            Err(CodecError::InvalidPayloadLength {
                actual: length,
                expected: WITHDRAWAL_PAYLOAD_HEX_LENGTH,
            })
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(32_000_000_000)]
    #[case(u64::MAX)]
    fn test_decode_recovers_encoded_request(#[case] amount_gwei: u64) {
        let pubkey = parse_pubkey(&pubkey_hex('e')).expect("valid pubkey");
        let payload = WithdrawalPayload::new(&pubkey, amount_gwei);

        let decoded = decode_withdrawal_data(&payload.to_string()).expect("valid payload");
        assert_eq!(decoded.pubkey, pubkey);
        assert_eq!(decoded.amount_gwei, amount_gwei);
        assert_eq!(decoded.amount_eth, gwei_to_eth(amount_gwei));
    }

    #[rstest]
    #[case(15)]
    #[case(63)]
    #[case(15_700_000)]
    #[case(1_234_567_890)]
    #[case(32_000_000_001)]
    fn test_decode_recovers_eth_amount(#[case] amount_gwei: u64) {
        let amount_eth = amount_gwei as f64 / 1e9;
        let payload = encode_withdrawal_data(&pubkey_hex('e'), amount_eth).expect("valid pubkey");

        let decoded = decode_withdrawal_data(&payload.to_string()).expect("valid payload");
        assert_eq!(decoded.amount_gwei, amount_gwei);
        assert_eq!(decoded.amount_eth, amount_eth);
    }

    #[test]
    fn test_decode_without_prefix() {
        let data = format!("{}{}", pubkey_hex('f'), "00000000000003e8");
        let decoded = decode_withdrawal_data(&data).expect("valid payload");
        assert_eq!(decoded.amount_gwei, 1000);
        assert_eq!(decoded.amount_eth, 0.000001);
    }

    #[test]
    fn test_decoded_withdrawal_json() {
        let pubkey = parse_pubkey(&pubkey_hex('1')).expect("valid pubkey");
        let decoded = DecodedWithdrawal::from(WithdrawalPayload::new(&pubkey, 2_000_000_000));
        let json = serde_json::to_value(&decoded).expect("serialize");
        assert_eq!(json["amountGwei"], "2000000000");
        assert_eq!(json["amountETH"], 2.0);
        assert_eq!(json["pubkey"], format!("0x{}", pubkey_hex('1')));
    }

    #[test]
    fn test_payload_serde() {
        let pubkey = parse_pubkey(&pubkey_hex('2')).expect("valid pubkey");
        let payload = WithdrawalPayload::new(&pubkey, 7);
        let json = serde_json::to_string(&payload).expect("serialize");
        let parsed: WithdrawalPayload = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, payload);
    }
}

// Unit conversions
pub const GWEI_PER_ETH: u64 = 1_000_000_000;
pub const WEI_PER_ETH: u64 = 1_000_000_000_000_000_000;

// EIP-7002 request layout
pub const PUBKEY_LENGTH: usize = 48;
pub const AMOUNT_LENGTH: usize = 8;
pub const WITHDRAWAL_PAYLOAD_LENGTH: usize = PUBKEY_LENGTH + AMOUNT_LENGTH;
pub const PUBKEY_HEX_LENGTH: usize = PUBKEY_LENGTH * 2;
pub const WITHDRAWAL_PAYLOAD_HEX_LENGTH: usize = WITHDRAWAL_PAYLOAD_LENGTH * 2;

/// An amount of zero requests a full exit of the validator.
pub const FULL_EXIT_REQUEST_AMOUNT: u64 = 0;

/// Balance above which a validator's stake is considered withdrawable.
pub const WITHDRAWABLE_BALANCE_FLOOR_ETH: f64 = 32.0;

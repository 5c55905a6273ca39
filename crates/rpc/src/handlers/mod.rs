pub mod transactions;
pub mod validators;
pub mod withdrawals;

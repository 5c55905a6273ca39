pub mod codec;
pub mod constants;
pub mod error;
pub mod input;
pub mod misc;
pub mod policy;
pub mod units;
pub mod validator;
pub mod withdrawal;

pub mod client;
pub mod error;
pub mod http_client;
pub mod kiln;
pub mod normalize;

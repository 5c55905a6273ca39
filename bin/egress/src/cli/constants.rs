use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_HTTP_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
pub const DEFAULT_HTTP_ALLOW_ORIGIN: bool = false;
pub const DEFAULT_HTTP_PORT: u16 = 5173;
pub const DEFAULT_NETWORK: &str = "mainnet";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "30";
pub const DEFAULT_VERBOSITY: &str = "3";

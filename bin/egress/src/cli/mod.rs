pub mod constants;
pub mod decode;
pub mod encode;
pub mod server;
pub mod validate;
pub mod validators;
pub mod verbosity;

use clap::{Parser, Subcommand};

use crate::cli::{
    constants::DEFAULT_VERBOSITY,
    decode::DecodeConfig,
    encode::EncodeConfig,
    server::ServerConfig,
    validate::ValidateConfig,
    validators::ValidatorsConfig,
    verbosity::{Verbosity, verbosity_parser},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (1=error, 2=warn, 3=info, 4=debug, 5=trace)
    #[arg(short, long, global = true, default_value = DEFAULT_VERBOSITY, value_parser = verbosity_parser)]
    pub verbosity: Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the withdrawal API
    #[command(name = "server")]
    Server(ServerConfig),

    /// Encode withdrawal request calldata
    #[command(name = "encode")]
    Encode(EncodeConfig),

    /// Decode withdrawal request calldata
    #[command(name = "decode")]
    Decode(DecodeConfig),

    /// Check a partial withdrawal against the minimum balance rule
    #[command(name = "validate")]
    Validate(ValidateConfig),

    /// List the validators a wallet owns
    #[command(name = "validators")]
    Validators(ValidatorsConfig),
}

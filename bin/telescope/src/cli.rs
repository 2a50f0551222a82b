use std::path::PathBuf;

use alloy_core::primitives::Address;
use clap::Parser;
use telescope_deploy::DEFAULT_CONFIRMATION_TIMEOUT_SECS;
use tracing::level_filters::LevelFilter;

/// The default JSON-RPC endpoint (local development node).
const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default sale start time (2024-01-08 06:00:00 UTC).
const DEFAULT_SALE_START_TIME: u64 = 1704693600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Chain {
    Mainnet,
    Sepolia,
    Dev,
}

impl Chain {
    pub fn to_chain_id(&self) -> u64 {
        match self {
            Chain::Mainnet => 1,
            Chain::Sepolia => 11155111,
            Chain::Dev => 31337,
        }
    }
}

#[derive(Parser)]
#[command(name = "telescope")]
#[command(
    author,
    version,
    about = "Deploy the Telescope sale contract and report the gas spent"
)]
pub struct Cli {
    /// The verbosity level.
    #[arg(short, long, env = "TELESCOPE_VERBOSITY", default_value_t = LevelFilter::INFO)]
    pub verbosity: LevelFilter,

    /// The URL of the target JSON-RPC endpoint.
    ///
    /// The endpoint must hold at least one configured signer account; the
    /// first account authorizes and pays for the deployment.
    #[arg(long, alias = "rpc", env = "TELESCOPE_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// The chain the endpoint is expected to serve.
    ///
    /// When provided, the deployment aborts before submitting anything if
    /// the endpoint reports a different chain ID.
    #[arg(long, env = "TELESCOPE_CHAIN")]
    pub chain: Option<Chain>,

    /// Unix timestamp at which the Telescope sale opens.
    #[arg(long, env = "TELESCOPE_SALE_START_TIME", default_value_t = DEFAULT_SALE_START_TIME)]
    pub sale_start_time: u64,

    /// Address of the inventory contract, in hex.
    #[arg(long, env = "TELESCOPE_INVENTORY", required_unless_present = "config")]
    pub inventory: Option<Address>,

    /// Address of the sale signer authority, in hex.
    #[arg(long, env = "TELESCOPE_SIGNER", required_unless_present = "config")]
    pub signer: Option<Address>,

    /// Seconds to wait for the deployment transaction to be mined.
    #[arg(
        long,
        env = "TELESCOPE_CONFIRMATION_TIMEOUT",
        default_value_t = DEFAULT_CONFIRMATION_TIMEOUT_SECS
    )]
    pub confirmation_timeout_secs: u64,

    /// Path to an existing Telescope.toml configuration file to load.
    ///
    /// When provided, the deployment uses the configuration from this file
    /// instead of the other command-line arguments.
    #[arg(long, alias = "conf", env = "TELESCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the effective configuration to this path before deploying.
    #[arg(long, env = "TELESCOPE_SAVE_CONFIG")]
    pub save_config: Option<PathBuf>,
}

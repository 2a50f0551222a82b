//! telescope is a CLI tool that deploys the Telescope sale contract and
//! reports what the deployment cost.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use telescope_deploy::Deployer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger. Diagnostics go to stderr; stdout carries only
    // the deployment report.
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(std::io::stderr)
        .init();

    // If a config file is provided, load it; otherwise build the
    // configuration from CLI arguments.
    let deployer = if let Some(config_path) = &cli.config {
        let deployer = Deployer::load_from_file(config_path)?;

        tracing::info!(
            config_path = %config_path.display(),
            rpc_url = %deployer.rpc_url,
            "Loading deployment from config file..."
        );

        deployer
    } else {
        Deployer {
            rpc_url: cli.rpc_url,
            expected_chain_id: cli.chain.map(|chain| chain.to_chain_id()),
            sale_start_time: cli.sale_start_time,
            inventory: cli
                .inventory
                .context("--inventory is required unless --config is given")?,
            signer: cli
                .signer
                .context("--signer is required unless --config is given")?,
            confirmation_timeout_secs: cli.confirmation_timeout_secs,
        }
    };

    // Save the configuration before deploying, if requested.
    if let Some(path) = &cli.save_config {
        deployer.save_to_file(path)?;
    }

    let report = deployer.deploy().await?;

    println!("{}", report);

    Ok(())
}

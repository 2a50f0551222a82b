use std::path::Path;
use std::time::Duration;

use alloy_core::primitives::{Address, utils::format_ether};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{DeployReport, contract, rpc::RpcClient};

/// The default name for the telescope configuration file.
pub const TELESCOPE_CONF_FILENAME: &str = "Telescope.toml";

/// Default number of seconds to wait for the deployment to be mined.
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 120;

fn default_confirmation_timeout() -> u64 {
    DEFAULT_CONFIRMATION_TIMEOUT_SECS
}

/// Deployer for the Telescope sale contract.
///
/// This struct contains all the configuration needed to deploy one Telescope
/// instance and can be serialized to/from TOML format. The three constructor
/// arguments (`sale_start_time`, `inventory`, `signer`) are the only values
/// that influence the deployed contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployer {
    /// URL of the target JSON-RPC endpoint.
    pub rpc_url: String,
    /// Chain ID the endpoint is expected to report. When set, a mismatch
    /// aborts the deployment before any transaction is submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_chain_id: Option<u64>,
    /// Unix timestamp at which the Telescope sale opens.
    pub sale_start_time: u64,
    /// Address of the inventory contract.
    pub inventory: Address,
    /// Address of the sale signer authority.
    pub signer: Address,
    /// Seconds to wait for the deployment transaction to be mined.
    #[serde(default = "default_confirmation_timeout")]
    pub confirmation_timeout_secs: u64,
}

impl Deployer {
    /// Save the configuration to a TOML file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize deployer config to TOML")?;
        std::fs::write(path, content)
            .context(format!("Failed to write config to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Load the configuration from a TOML file.
    ///
    /// `path` may also name a directory holding a `Telescope.toml`.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "Configuration file or directory not found: {}",
                path.display()
            ));
        }

        let config_path = if path.is_dir() {
            path.join(TELESCOPE_CONF_FILENAME)
        } else {
            path.to_path_buf()
        };

        let content = std::fs::read_to_string(config_path)
            .context(format!("Failed to read config from {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).context("Failed to parse config file as TOML")?;
        tracing::info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }
}

impl Deployer {
    /// Run the deployment pipeline.
    ///
    /// Resolves the endpoint's first signer account, records its balance,
    /// submits the Telescope deployment, waits for it to be mined, records
    /// the balance again, and returns the collected [`DeployReport`].
    ///
    /// Exactly one state-changing transaction is submitted; a failed
    /// deployment is never resubmitted, and every failure propagates to the
    /// caller unchanged.
    pub async fn deploy(&self) -> Result<DeployReport> {
        let rpc = RpcClient::new(&self.rpc_url)?;

        if let Some(expected) = self.expected_chain_id {
            let chain_id = rpc.chain_id().await?;
            if chain_id != expected {
                anyhow::bail!(
                    "Chain ID mismatch: endpoint reports {}, expected {}",
                    chain_id,
                    expected
                );
            }
            tracing::debug!(chain_id, "Chain ID verified");
        }

        let accounts = rpc
            .accounts()
            .await
            .context("Failed to resolve signer accounts")?;
        let deployer = *accounts
            .first()
            .context("The endpoint exposes no signer accounts")?;

        let begin_balance = rpc
            .balance(deployer)
            .await
            .context("Failed to query deployer balance")?;

        tracing::info!(
            deployer = %deployer,
            balance = %format_ether(begin_balance),
            "Resolved deployer account"
        );

        let data = contract::deployment_data(self.sale_start_time, self.inventory, self.signer);

        tracing::info!(
            sale_start_time = self.sale_start_time,
            inventory = %self.inventory,
            signer = %self.signer,
            "Submitting Telescope deployment..."
        );

        let tx_hash = rpc
            .send_transaction(serde_json::json!({
                "from": deployer,
                "data": data
            }))
            .await
            .context("Failed to submit deployment transaction")?;

        tracing::info!(tx_hash = %tx_hash, "Deployment transaction sent");

        let receipt = rpc
            .wait_for_receipt(
                tx_hash,
                Duration::from_secs(self.confirmation_timeout_secs),
            )
            .await?;

        if !receipt.succeeded() {
            anyhow::bail!("Deployment transaction {} reverted", tx_hash);
        }

        let contract_address = receipt
            .contract_address
            .context("Deployment receipt carries no contract address")?;

        tracing::info!(contract = %contract_address, "Telescope contract deployed");

        let end_balance = rpc
            .balance(deployer)
            .await
            .context("Failed to query deployer balance after deployment")?;

        let gas_spent = begin_balance
            .checked_sub(end_balance)
            .context("Deployer balance increased during deployment")?;

        Ok(DeployReport {
            deployer,
            begin_balance,
            contract_address,
            end_balance,
            gas_spent,
        })
    }
}

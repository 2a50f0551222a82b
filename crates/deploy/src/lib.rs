//! telescope-deploy - Deployment library for the Telescope sale contract.
//!
//! This crate provides the deployment pipeline behind the `telescope` CLI:
//! an explicit [`Deployer`] configuration, the JSON-RPC transport it runs
//! over, the contract build artifact, and the [`DeployReport`] collected
//! over a successful run.

mod deployer;
pub use deployer::{DEFAULT_CONFIRMATION_TIMEOUT_SECS, Deployer, TELESCOPE_CONF_FILENAME};

pub mod contract;
pub mod rpc;

mod report;
pub use report::DeployReport;

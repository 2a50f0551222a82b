//! Report of a completed deployment run.

use std::fmt;

use alloy_core::primitives::{Address, U256, utils::format_ether};

/// Values recorded over one deployment run.
///
/// Balances are wei quantities; they are only converted to decimal ether
/// at display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    /// Account that authorized and paid for the deployment.
    pub deployer: Address,
    /// Deployer balance before submission.
    pub begin_balance: U256,
    /// Address of the deployed Telescope contract.
    pub contract_address: Address,
    /// Deployer balance after confirmation.
    pub end_balance: U256,
    /// Fees paid: begin balance minus end balance.
    pub gas_spent: U256,
}

impl fmt::Display for DeployReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deployer: {}", self.deployer)?;
        writeln!(f, "Balance: {}", format_ether(self.begin_balance))?;
        writeln!(f, "Telescope contract: {}", self.contract_address)?;
        writeln!(f)?;
        writeln!(f, "Latest balance: {}", format_ether(self.end_balance))?;
        write!(f, "Gas: {}", format_ether(self.gas_spent))
    }
}

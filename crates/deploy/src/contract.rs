//! Telescope build artifact and constructor calldata.

use alloy_core::primitives::Address;

/// Creation bytecode of the compiled Telescope contract.
///
/// Compiler output hex with no `0x` prefix, as emitted by `solc --bin`.
pub const TELESCOPE_BYTECODE: &str = include_str!("../artifacts/Telescope.bin");

/// ABI-encode the Telescope constructor arguments.
///
/// The constructor takes three static parameters, encoded as one 32-byte
/// word each, in this exact order:
/// `uint256 saleStartTime`, `address inventory`, `address signer`.
pub fn constructor_calldata(sale_start_time: u64, inventory: Address, signer: Address) -> String {
    let sale_start_word = format!("{:064x}", sale_start_time);
    let inventory_word = format!("{:0>64}", hex::encode(inventory));
    let signer_word = format!("{:0>64}", hex::encode(signer));

    format!("{}{}{}", sale_start_word, inventory_word, signer_word)
}

/// The `data` payload of the deployment transaction: creation bytecode
/// followed by the encoded constructor arguments.
pub fn deployment_data(sale_start_time: u64, inventory: Address, signer: Address) -> String {
    format!(
        "0x{}{}",
        TELESCOPE_BYTECODE.trim(),
        constructor_calldata(sale_start_time, inventory, signer)
    )
}

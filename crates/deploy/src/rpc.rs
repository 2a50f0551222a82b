//! JSON-RPC transport for interacting with the target Ethereum endpoint.

use std::time::{Duration, Instant};

use alloy_core::primitives::{Address, B256, U256};
use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use url::Url;

/// Timeout for individual RPC requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Interval between polling attempts while waiting for a receipt.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// The fields of a mined transaction receipt the deployment pipeline reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Address of the created contract. Present for deployment transactions.
    pub contract_address: Option<Address>,
    /// Post-execution status quantity (`0x1` on success).
    pub status: Option<String>,
}

impl TransactionReceipt {
    /// Whether the transaction executed without reverting.
    pub fn succeeded(&self) -> bool {
        matches!(self.status.as_deref(), Some("0x1"))
    }
}

/// Client for a single Ethereum JSON-RPC endpoint.
pub struct RpcClient {
    http: reqwest::Client,
    url: Url,
}

impl RpcClient {
    /// Create a client for the endpoint at `url`.
    pub fn new(url: &str) -> Result<Self, anyhow::Error> {
        let url = Url::parse(url).with_context(|| format!("Invalid RPC URL: {}", url))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { http, url })
    }

    /// Make a JSON-RPC call and deserialize the result.
    ///
    /// Node-side error objects are surfaced as errors carrying the node's
    /// message.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, anyhow::Error> {
        let response = self
            .http
            .post(self.url.clone())
            .json(&serde_json::json!({
                "jsonrpc": "2.0",
                "method": method,
                "params": params,
                "id": 1
            }))
            .send()
            .await
            .with_context(|| format!("Failed to send {} request", method))?;

        let result: Value = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} response", method))?;

        if let Some(error) = result.get("error") {
            anyhow::bail!(
                "RPC error from {}: {}",
                method,
                error
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown")
            );
        }

        let result_value = result
            .get("result")
            .context("No result in response")?
            .clone();

        serde_json::from_value(result_value)
            .with_context(|| format!("Failed to deserialize {} result", method))
    }

    /// Accounts the endpoint is configured to sign for.
    pub async fn accounts(&self) -> Result<Vec<Address>, anyhow::Error> {
        self.call("eth_accounts", vec![]).await
    }

    /// Latest balance of `address`, in wei.
    pub async fn balance(&self, address: Address) -> Result<U256, anyhow::Error> {
        self.call(
            "eth_getBalance",
            vec![serde_json::json!(address), serde_json::json!("latest")],
        )
        .await
    }

    /// Chain ID reported by the endpoint.
    pub async fn chain_id(&self) -> Result<u64, anyhow::Error> {
        let quantity: String = self.call("eth_chainId", vec![]).await?;
        parse_hex_quantity(&quantity)
    }

    /// Submit a transaction to be signed by the endpoint, returning its hash.
    pub async fn send_transaction(&self, tx: Value) -> Result<B256, anyhow::Error> {
        self.call("eth_sendTransaction", vec![tx]).await
    }

    /// Receipt of a transaction, or `None` while it is unmined.
    pub async fn transaction_receipt(
        &self,
        tx_hash: B256,
    ) -> Result<Option<TransactionReceipt>, anyhow::Error> {
        self.call("eth_getTransactionReceipt", vec![serde_json::json!(tx_hash)])
            .await
    }

    /// Poll for the receipt of `tx_hash` until it is mined or `timeout` elapses.
    pub async fn wait_for_receipt(
        &self,
        tx_hash: B256,
        timeout: Duration,
    ) -> Result<TransactionReceipt, anyhow::Error> {
        let start = Instant::now();

        loop {
            if let Some(receipt) = self.transaction_receipt(tx_hash).await? {
                return Ok(receipt);
            }

            if start.elapsed() > timeout {
                anyhow::bail!(
                    "Timeout waiting for transaction {} to be mined",
                    tx_hash
                );
            }

            tracing::trace!(tx_hash = %tx_hash, "Transaction not yet mined, retrying...");
            tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
        }
    }
}

/// Parse a `0x`-prefixed hex quantity into a u64.
fn parse_hex_quantity(quantity: &str) -> Result<u64, anyhow::Error> {
    u64::from_str_radix(quantity.trim_start_matches("0x"), 16)
        .with_context(|| format!("Invalid hex quantity: {}", quantity))
}

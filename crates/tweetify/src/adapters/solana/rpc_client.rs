//! Lightweight Solana RPC client
//!
//! Implements only the JSON-RPC methods the launcher needs instead of pulling
//! in the solana-client networking stack.

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};
use solana_sdk::{signature::Signature, transaction::VersionedTransaction};
use tracing::{debug, info};

use crate::core::{LaunchError, LaunchResult, TransactionSubmitter};

/// Lightweight RPC client for Solana
pub struct LightRpcClient {
    url: String,
    commitment: String,
    agent: ureq::Agent,
}

/// RPC response wrapper
#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

/// RPC error structure
#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

impl LightRpcClient {
    pub fn new(url: String, commitment: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout_read(Duration::from_secs(30))
            .build();

        Self { url, commitment, agent }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make a JSON-RPC call
    async fn call<T>(&self, method: &str, params: Value) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request_body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params
        });

        debug!("RPC call: {}", method);

        // ureq is blocking
        let response_body = tokio::task::spawn_blocking({
            let agent = self.agent.clone();
            let url = self.url.clone();
            let body = request_body.to_string();

            move || -> Result<String> {
                let response = agent
                    .post(&url)
                    .set("Content-Type", "application/json")
                    .send_string(&body)
                    .map_err(|e| anyhow!("RPC transport error: {}", e))?;
                Ok(response.into_string()?)
            }
        })
        .await??;

        let rpc_response: RpcResponse<T> = serde_json::from_str(&response_body)?;

        if let Some(error) = rpc_response.error {
            return Err(anyhow!("RPC error {}: {}", error.code, error.message));
        }

        rpc_response
            .result
            .ok_or_else(|| anyhow!("No result in RPC response"))
    }

    /// Submit a signed transaction, returning its signature
    pub async fn send_versioned_transaction(&self, transaction: &VersionedTransaction) -> Result<Signature> {
        let tx_data = bincode::serialize(transaction)
            .map_err(|e| anyhow!("Failed to serialize transaction: {}", e))?;
        let tx_base64 = base64::engine::general_purpose::STANDARD.encode(tx_data);

        let params = json!([
            tx_base64,
            {
                "encoding": "base64",
                "preflightCommitment": self.commitment
            }
        ]);

        let signature: String = self.call("sendTransaction", params).await?;
        info!("Transaction submitted: {}", signature);

        signature
            .parse()
            .map_err(|e| anyhow!("Failed to parse signature {}: {}", signature, e))
    }

    /// Current slot, used as a connectivity check
    pub async fn get_slot(&self) -> Result<u64> {
        self.call("getSlot", json!([{ "commitment": self.commitment }])).await
    }
}

#[async_trait]
impl TransactionSubmitter for LightRpcClient {
    async fn send_transaction(&self, transaction: &VersionedTransaction) -> LaunchResult<Signature> {
        self.send_versioned_transaction(transaction)
            .await
            .map_err(|e| LaunchError::Deployment(e.to_string()))
    }
}

//! PumpPortal `trade-local` client
//!
//! PumpPortal builds the creation transaction and returns it unsigned; the
//! launcher signs and submits it itself. The endpoint is a constant and is
//! not part of the configuration surface.

use async_trait::async_trait;
use tracing::debug;

use crate::core::error::status_text;
use crate::core::{CreateTokenRequest, LaunchError, LaunchResult, TradeApi};

pub const TRADE_LOCAL_URL: &str = "https://pumpportal.fun/api/trade-local";

pub struct PumpPortalClient {
    client: reqwest::Client,
    url: String,
}

impl PumpPortalClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, TRADE_LOCAL_URL)
    }

    /// Point the client at a PumpPortal-compatible server other than the public one
    pub fn with_endpoint(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl TradeApi for PumpPortalClient {
    async fn create_transaction(&self, request: &CreateTokenRequest) -> LaunchResult<Vec<u8>> {
        debug!(
            "Requesting create transaction: mint={}, symbol={}",
            request.mint, request.token_metadata.symbol
        );

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| LaunchError::Deployment(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(LaunchError::Deployment(status_text(response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LaunchError::Deployment(format!("failed to read transaction: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

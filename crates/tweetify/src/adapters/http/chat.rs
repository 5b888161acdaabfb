//! Text generation client used to name the token

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::core::error::status_text;
use crate::core::{IdentifierSource, LaunchError, LaunchResult};

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

pub struct ChatIdentifierClient {
    client: reqwest::Client,
    url: String,
}

impl ChatIdentifierClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl IdentifierSource for ChatIdentifierClient {
    async fn generate(&self, message: &str) -> LaunchResult<String> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "message": message }))
            .send()
            .await
            .map_err(|e| LaunchError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LaunchError::Generation(status_text(response.status())));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| LaunchError::Generation(format!("invalid response body: {}", e)))?;

        debug!("Chat response: {:?}", body.response);
        Ok(body.response)
    }
}

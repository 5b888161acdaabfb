//! Live feed of recently created tokens

use async_trait::async_trait;

use crate::core::error::status_text;
use crate::core::{FeedEntry, FeedSource, LaunchError, LaunchResult};

pub struct LiveFeedClient {
    client: reqwest::Client,
    url: String,
}

impl LiveFeedClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl FeedSource for LiveFeedClient {
    async fn fetch_feed(&self) -> LaunchResult<Vec<FeedEntry>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LaunchError::Feed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LaunchError::Feed(status_text(response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| LaunchError::Feed(format!("invalid response body: {}", e)))
    }
}

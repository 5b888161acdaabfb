//! Tweet metadata lookup

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::core::error::status_text;
use crate::core::{LaunchError, LaunchResult, PostMetadata, PostSource};

/// Response of the fetch-tweet service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetResponse {
    pub tweet: TweetBody,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetBody {
    pub text: String,
}

impl From<TweetResponse> for PostMetadata {
    fn from(response: TweetResponse) -> Self {
        Self {
            text: response.tweet.text,
            media_url: response.media_url,
            profile_image_url: response.profile_image_url,
            author_handle: response.username,
        }
    }
}

pub struct TweetFetcher {
    client: reqwest::Client,
    url: String,
}

impl TweetFetcher {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl PostSource for TweetFetcher {
    async fn fetch_post(&self, link: &str) -> LaunchResult<PostMetadata> {
        debug!("Fetching tweet metadata for {}", link);

        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "twitterLink": link }))
            .send()
            .await
            .map_err(|e| LaunchError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LaunchError::Fetch(status_text(response.status())));
        }

        let body: TweetResponse = response
            .json()
            .await
            .map_err(|e| LaunchError::Fetch(format!("invalid response body: {}", e)))?;

        Ok(body.into())
    }
}

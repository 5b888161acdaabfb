//! Announcement tweet publisher

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::core::error::status_text;
use crate::core::{AnnouncementReference, Announcer, LaunchError, LaunchResult, TokenIdentifiers};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostTweetResponse {
    tweet_id: Value,
}

pub struct TweetAnnouncer {
    client: reqwest::Client,
    url: String,
    status_base_url: String,
}

impl TweetAnnouncer {
    pub fn new(client: reqwest::Client, url: impl Into<String>, status_base_url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            status_base_url: status_base_url.into(),
        }
    }

    fn status_url(&self, tweet_id: &Value) -> LaunchResult<AnnouncementReference> {
        let id = match tweet_id {
            Value::String(id) if !id.is_empty() => id.clone(),
            Value::Number(id) => id.to_string(),
            other => {
                return Err(LaunchError::Publish(format!("unexpected tweetId: {}", other)));
            }
        };
        Ok(AnnouncementReference(format!("{}{}", self.status_base_url, id)))
    }
}

#[async_trait]
impl Announcer for TweetAnnouncer {
    async fn announce(
        &self,
        identifiers: &TokenIdentifiers,
        link: &str,
    ) -> LaunchResult<AnnouncementReference> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({
                "name": identifiers.name,
                "ticker": identifiers.ticker,
                "link": link,
            }))
            .send()
            .await
            .map_err(|e| LaunchError::Publish(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LaunchError::Publish(status_text(response.status())));
        }

        let body: PostTweetResponse = response
            .json()
            .await
            .map_err(|e| LaunchError::Publish(format!("invalid response body: {}", e)))?;

        let reference = self.status_url(&body.tweet_id)?;
        info!("Announcement posted: {}", reference.0);
        Ok(reference)
    }
}

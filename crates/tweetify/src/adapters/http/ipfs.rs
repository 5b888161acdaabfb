//! IPFS metadata gateway client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::error::status_text;
use crate::core::{LaunchError, LaunchResult, MetadataReference, MetadataStore, TokenMetadata};

/// Upload body; the social fields are always sent empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataUploadRequest {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub twitter: String,
    pub website: String,
    pub telegram: String,
    pub show_name: String,
    pub image_url: String,
}

impl From<&TokenMetadata> for MetadataUploadRequest {
    fn from(metadata: &TokenMetadata) -> Self {
        Self {
            name: metadata.name.clone(),
            symbol: metadata.symbol.clone(),
            description: metadata.description.clone(),
            twitter: String::new(),
            website: String::new(),
            telegram: String::new(),
            show_name: "true".to_string(),
            image_url: metadata.image_url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataUploadResponse {
    metadata_uri: String,
}

pub struct IpfsMetadataStore {
    client: reqwest::Client,
    url: String,
}

impl IpfsMetadataStore {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl MetadataStore for IpfsMetadataStore {
    async fn upload(&self, metadata: &TokenMetadata) -> LaunchResult<MetadataReference> {
        let response = self
            .client
            .post(&self.url)
            .json(&MetadataUploadRequest::from(metadata))
            .send()
            .await
            .map_err(|e| LaunchError::Upload(e.to_string()))?;

        // The gateway answers 200 and nothing else on success
        if response.status() != reqwest::StatusCode::OK {
            return Err(LaunchError::Upload(status_text(response.status())));
        }

        let body: MetadataUploadResponse = response
            .json()
            .await
            .map_err(|e| LaunchError::Upload(format!("invalid response body: {}", e)))?;

        info!("Metadata uploaded: {}", body.metadata_uri);
        Ok(MetadataReference(body.metadata_uri))
    }
}

//! Service container for dependency injection
//!
//! Builds every process-scoped collaborator once: the HTTP client, the RPC
//! client, the signing authority and the adapters wired into the pipeline.

use std::sync::Arc;

use tracing::info;

use crate::adapters::http::{
    ChatIdentifierClient, IpfsMetadataStore, LiveFeedClient, PumpPortalClient, TweetAnnouncer,
    TweetFetcher,
};
use crate::adapters::solana::{LaunchSigner, LightRpcClient};
use crate::config::LauncherConfig;
use crate::core::{FeedSource, LaunchError, LaunchResult};
use crate::domain::{LaunchPipeline, TokenDeployer};
use crate::services::FeedPoller;

pub struct ServiceContainer {
    pub config: LauncherConfig,
    pub http: reqwest::Client,
    pub rpc: Arc<LightRpcClient>,
}

impl ServiceContainer {
    pub fn new(config: LauncherConfig) -> LaunchResult<Self> {
        info!("Initializing service container");

        let http = reqwest::Client::builder()
            .user_agent(concat!("tweetify/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LaunchError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        let rpc = Arc::new(LightRpcClient::new(
            config.solana.rpc_endpoint.clone(),
            config.solana.commitment.clone(),
        ));

        Ok(Self { config, http, rpc })
    }

    /// Decode the configured signing secret
    pub fn signer(&self) -> LaunchResult<Arc<LaunchSigner>> {
        let secret = self
            .config
            .signer_secret()
            .map_err(|e| LaunchError::Configuration(e.to_string()))?;
        Ok(Arc::new(LaunchSigner::from_base58_secret(secret)?))
    }

    pub fn pipeline(&self, signer: Arc<LaunchSigner>) -> LaunchPipeline {
        let endpoints = &self.config.endpoints;

        let deployer = TokenDeployer::new(
            Arc::new(PumpPortalClient::new(self.http.clone())),
            self.rpc.clone(),
            signer,
        );

        LaunchPipeline::new(
            Arc::new(TweetFetcher::new(self.http.clone(), &endpoints.fetch_post_url)),
            Arc::new(ChatIdentifierClient::new(self.http.clone(), &endpoints.chat_url)),
            Arc::new(TweetAnnouncer::new(
                self.http.clone(),
                &endpoints.announce_url,
                &self.config.announcement.status_base_url,
            )),
            Arc::new(IpfsMetadataStore::new(self.http.clone(), &endpoints.metadata_upload_url)),
            deployer,
        )
    }

    pub fn feed_source(&self) -> Arc<dyn FeedSource> {
        Arc::new(LiveFeedClient::new(self.http.clone(), &self.config.endpoints.live_feed_url))
    }

    pub fn feed_poller(&self) -> FeedPoller {
        FeedPoller::new(self.feed_source(), self.config.poll_interval())
    }
}

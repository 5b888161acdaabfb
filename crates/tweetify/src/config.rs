//! Configuration management for the launcher
//!
//! Values come from an optional TOML file, then environment overrides. The
//! PumpPortal endpoint is a constant and has no setting here.

use std::fmt;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::DEFAULT_POLL_INTERVAL;

pub const ENV_RPC_ENDPOINT: &str = "TWEETIFY_RPC_ENDPOINT";
pub const ENV_FETCH_POST_URL: &str = "TWEETIFY_FETCH_POST_URL";
pub const ENV_CHAT_URL: &str = "TWEETIFY_CHAT_URL";
pub const ENV_ANNOUNCE_URL: &str = "TWEETIFY_ANNOUNCE_URL";
pub const ENV_METADATA_UPLOAD_URL: &str = "TWEETIFY_METADATA_UPLOAD_URL";
pub const ENV_LIVE_FEED_URL: &str = "TWEETIFY_LIVE_FEED_URL";
pub const ENV_SIGNER_SECRET_KEY: &str = "TWEETIFY_SIGNER_SECRET_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LauncherConfig {
    #[validate]
    pub endpoints: EndpointsConfig,
    #[validate]
    pub solana: SolanaConfig,
    pub signer: SignerConfig,
    #[validate]
    pub announcement: AnnouncementConfig,
    #[validate]
    pub feed: FeedConfig,
    pub api: ApiConfig,
    pub monitoring: MonitoringConfig,
}

/// External services of the launch pipeline
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EndpointsConfig {
    #[validate(url)]
    pub fetch_post_url: String,
    #[validate(url)]
    pub chat_url: String,
    #[validate(url)]
    pub announce_url: String,
    #[validate(url)]
    pub metadata_upload_url: String,
    #[validate(url)]
    pub live_feed_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SolanaConfig {
    #[validate(url)]
    pub rpc_endpoint: String,
    pub commitment: String,
}

/// Holder of the base58 signing secret
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerConfig {
    pub secret_key: Option<String>,
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = self.secret_key.as_ref().map(|_| "<redacted>");
        f.debug_struct("SignerConfig").field("secret_key", &secret).finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AnnouncementConfig {
    /// Prefix the returned tweet id is appended to
    #[validate(url)]
    pub status_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FeedConfig {
    #[validate(range(min = 1, max = 3600))]
    pub poll_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub bind_address: String,
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub log_level: String,
    pub structured_logging: bool,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            fetch_post_url: "http://localhost:3001/fetch-tweet".to_string(),
            chat_url: "http://localhost:3001/chat".to_string(),
            announce_url: "http://localhost:3001/post-tweet".to_string(),
            metadata_upload_url: "http://localhost:3001/upload-metadata".to_string(),
            live_feed_url: "https://frontend-api.pump.fun/coins/currently-live".to_string(),
        }
    }
}

impl Default for SolanaConfig {
    fn default() -> Self {
        Self {
            rpc_endpoint: "https://api.mainnet-beta.solana.com".to_string(),
            commitment: "confirmed".to_string(),
        }
    }
}

impl Default for AnnouncementConfig {
    fn default() -> Self {
        Self {
            status_base_url: "https://twitter.com/TweetifySOL/status/".to_string(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL.as_secs(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            enable_cors: true,
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            structured_logging: false,
        }
    }
}

impl LauncherConfig {
    /// Load configuration from file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply `TWEETIFY_*` overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup; empty values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(ENV_RPC_ENDPOINT) {
            self.solana.rpc_endpoint = value;
        }
        if let Some(value) = get(ENV_FETCH_POST_URL) {
            self.endpoints.fetch_post_url = value;
        }
        if let Some(value) = get(ENV_CHAT_URL) {
            self.endpoints.chat_url = value;
        }
        if let Some(value) = get(ENV_ANNOUNCE_URL) {
            self.endpoints.announce_url = value;
        }
        if let Some(value) = get(ENV_METADATA_UPLOAD_URL) {
            self.endpoints.metadata_upload_url = value;
        }
        if let Some(value) = get(ENV_LIVE_FEED_URL) {
            self.endpoints.live_feed_url = value;
        }
        if let Some(value) = get(ENV_SIGNER_SECRET_KEY) {
            self.signer.secret_key = Some(value);
        }
    }

    /// Validate configuration
    pub fn check(&self) -> Result<()> {
        Validate::validate(self).map_err(|e| anyhow!("Invalid configuration: {}", e))?;

        match self.solana.commitment.as_str() {
            "processed" | "confirmed" | "finalized" => {}
            other => return Err(anyhow!("Unknown commitment level: {}", other)),
        }
        Ok(())
    }

    /// Signing secret, required for anything that deploys
    pub fn signer_secret(&self) -> Result<&str> {
        self.signer
            .secret_key
            .as_deref()
            .filter(|secret| !secret.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "Signer secret key is not configured (set [signer].secret_key or {})",
                    ENV_SIGNER_SECRET_KEY
                )
            })
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.feed.poll_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LauncherConfig::default();
        assert!(config.check().is_ok());
        assert_eq!(config.feed.poll_interval_secs, 30);
        assert_eq!(config.poll_interval(), DEFAULT_POLL_INTERVAL);
        assert!(config.signer_secret().is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let mut config = LauncherConfig::default();
        config.signer.secret_key = Some("5ecretKeyMaterial".to_string());
        let printed = format!("{:?}", config);
        assert!(!printed.contains("5ecretKeyMaterial"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_bad_commitment() {
        let mut config = LauncherConfig::default();
        config.solana.commitment = "eventually".to_string();
        assert!(config.check().is_err());
    }
}

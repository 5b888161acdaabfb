//! Core trait abstractions (ports) for every external collaborator

use async_trait::async_trait;
use solana_sdk::{signature::Signature, transaction::VersionedTransaction};

use super::error::LaunchResult;
use super::types::*;

/// Resolves a tweet link into its text, media and author
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_post(&self, link: &str) -> LaunchResult<PostMetadata>;
}

/// Text generation service; returns the raw `label: value` response
#[async_trait]
pub trait IdentifierSource: Send + Sync {
    async fn generate(&self, message: &str) -> LaunchResult<String>;
}

/// Posts the announcement tweet for a new token
#[async_trait]
pub trait Announcer: Send + Sync {
    async fn announce(
        &self,
        identifiers: &TokenIdentifiers,
        link: &str,
    ) -> LaunchResult<AnnouncementReference>;
}

/// Content-addressed metadata gateway
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn upload(&self, metadata: &TokenMetadata) -> LaunchResult<MetadataReference>;
}

/// Third-party trading API that builds unsigned creation transactions
#[async_trait]
pub trait TradeApi: Send + Sync {
    /// Raw serialized `VersionedTransaction` awaiting signatures
    async fn create_transaction(&self, request: &CreateTokenRequest) -> LaunchResult<Vec<u8>>;
}

/// Chain submission
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn send_transaction(&self, transaction: &VersionedTransaction) -> LaunchResult<Signature>;
}

/// Recently created tokens
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_feed(&self) -> LaunchResult<Vec<FeedEntry>>;
}

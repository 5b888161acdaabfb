//! Centralized error types for the launcher

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main launcher error type
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to fetch tweet metadata: {0}")]
    Fetch(String),

    #[error("Failed to generate token identifiers: {0}")]
    Generation(String),

    #[error("Malformed identifier response: {0}")]
    Parse(String),

    #[error("Failed to post tweet: {0}")]
    Publish(String),

    #[error("Failed to upload metadata to IPFS: {0}")]
    Upload(String),

    #[error("Failed to create token: {0}")]
    Deployment(String),

    #[error("Failed to fetch live feed: {0}")]
    Feed(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Signer error: {0}")]
    Signer(String),

    #[error("Pipeline state error: {0}")]
    State(String),
}

/// Which pipeline stage produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidInput,
    Fetch,
    Generation,
    Parse,
    Publish,
    Upload,
    Deployment,
    Other,
}

impl LaunchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            LaunchError::InvalidInput(_) => FailureKind::InvalidInput,
            LaunchError::Fetch(_) => FailureKind::Fetch,
            LaunchError::Generation(_) => FailureKind::Generation,
            LaunchError::Parse(_) => FailureKind::Parse,
            LaunchError::Publish(_) => FailureKind::Publish,
            LaunchError::Upload(_) => FailureKind::Upload,
            LaunchError::Deployment(_) | LaunchError::Signer(_) => FailureKind::Deployment,
            LaunchError::Feed(_) | LaunchError::Configuration(_) | LaunchError::State(_) => {
                FailureKind::Other
            }
        }
    }
}

/// Result type alias for launcher operations
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Human readable status for a non-success response
pub fn status_text(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

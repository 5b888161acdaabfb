//! API response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{LaunchReport, PipelineState};

/// Message shown for any failed submission; details stay in the logs
pub const PROCESSING_FAILED: &str = "processing failed";

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchRequest {
    pub link: String,
}

/// Card shown once identifiers are known
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinCard {
    pub ticker: String,
    pub name: String,
    pub username: String,
    pub profile_image_url: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchResponse {
    pub submission_id: Uuid,
    pub status: String,
    pub state: PipelineState,
    pub message: Option<String>,
    pub coin: Option<CoinCard>,
    pub tweet_link: Option<String>,
    pub metadata_uri: Option<String>,
    pub mint: Option<String>,
    pub transaction_link: Option<String>,
}

impl From<&LaunchReport> for LaunchResponse {
    fn from(report: &LaunchReport) -> Self {
        let progress = &report.progress;

        let coin = match (&progress.identifiers, &progress.post) {
            (Some(identifiers), Some(post)) => Some(CoinCard {
                ticker: identifiers.ticker.clone(),
                name: identifiers.name.clone(),
                username: post.author_handle.clone(),
                profile_image_url: post.profile_image_url.clone(),
                image_url: progress.image_url.clone(),
            }),
            _ => None,
        };

        let deployment = progress.deployment.as_ref();

        Self {
            submission_id: report.submission_id,
            status: if report.succeeded() { "succeeded" } else { "failed" }.to_string(),
            state: report.final_state(),
            message: (!report.succeeded()).then(|| PROCESSING_FAILED.to_string()),
            coin,
            tweet_link: progress.announcement.as_ref().map(|a| a.0.clone()),
            metadata_uri: progress.metadata_uri.as_ref().map(|m| m.0.clone()),
            mint: deployment.map(|d| d.mint.clone()),
            transaction_link: deployment.map(|d| d.transaction.url.clone()),
        }
    }
}

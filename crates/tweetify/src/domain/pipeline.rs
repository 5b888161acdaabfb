//! Launch pipeline: tweet link in, token on chain out
//!
//! Steps run strictly one after another. A failure halts the pipeline at that
//! step; whatever earlier steps produced stays in the report and nothing is
//! rolled back.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, Instrument};
use uuid::Uuid;

use super::deployer::{Deployment, TokenDeployer};
use super::identifiers::parse_identifiers;
use super::input::normalize_link;
use super::state::{PipelineState, StateMachine};
use crate::core::{
    AnnouncementReference, Announcer, IdentifierSource, LaunchError, MetadataReference,
    MetadataStore, PostMetadata, PostSource, TokenIdentifiers, TokenMetadata,
};

/// Results gathered so far by a submission
#[derive(Debug, Clone, Default, Serialize)]
pub struct LaunchProgress {
    pub link: Option<String>,
    pub post: Option<PostMetadata>,
    pub identifiers: Option<TokenIdentifiers>,
    pub image_url: Option<String>,
    pub announcement: Option<AnnouncementReference>,
    pub metadata_uri: Option<MetadataReference>,
    pub deployment: Option<Deployment>,
}

/// Everything known about one finished submission
#[derive(Debug)]
pub struct LaunchReport {
    pub submission_id: Uuid,
    pub states: Vec<PipelineState>,
    pub progress: LaunchProgress,
    pub outcome: Result<Deployment, LaunchError>,
}

impl LaunchReport {
    pub fn final_state(&self) -> PipelineState {
        self.states.last().copied().unwrap_or(PipelineState::Idle)
    }

    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub struct LaunchPipeline {
    posts: Arc<dyn PostSource>,
    identifiers: Arc<dyn IdentifierSource>,
    announcer: Arc<dyn Announcer>,
    metadata_store: Arc<dyn MetadataStore>,
    deployer: TokenDeployer,
}

impl LaunchPipeline {
    pub fn new(
        posts: Arc<dyn PostSource>,
        identifiers: Arc<dyn IdentifierSource>,
        announcer: Arc<dyn Announcer>,
        metadata_store: Arc<dyn MetadataStore>,
        deployer: TokenDeployer,
    ) -> Self {
        Self {
            posts,
            identifiers,
            announcer,
            metadata_store,
            deployer,
        }
    }

    pub fn deployer(&self) -> &TokenDeployer {
        &self.deployer
    }

    /// Run one submission to completion
    pub async fn launch(&self, raw_link: &str) -> LaunchReport {
        let submission_id = Uuid::new_v4();
        let span = tracing::info_span!("launch", submission_id = %submission_id);

        async move {
            let mut machine = StateMachine::new();
            let mut progress = LaunchProgress::default();

            let outcome = self.run_steps(raw_link, &mut machine, &mut progress).await;

            let terminal = match &outcome {
                Ok(deployment) => {
                    info!("Token created: {}", deployment.transaction.url);
                    PipelineState::Succeeded
                }
                Err(e) => {
                    error!("Error processing tweet data in state {:?}: {}", machine.current(), e);
                    PipelineState::Failed(e.kind())
                }
            };
            // Every step leaves a running state, so a terminal state is always reachable
            let _ = machine.transition(terminal);

            LaunchReport {
                submission_id,
                states: machine.into_history(),
                progress,
                outcome,
            }
        }
        .instrument(span)
        .await
    }

    async fn run_steps(
        &self,
        raw_link: &str,
        machine: &mut StateMachine,
        progress: &mut LaunchProgress,
    ) -> Result<Deployment, LaunchError> {
        let link = normalize_link(raw_link)?;
        progress.link = Some(link.clone());

        enter(machine, PipelineState::FetchingPost)?;
        let post = self.posts.fetch_post(&link).await?;
        progress.post = Some(post.clone());

        enter(machine, PipelineState::GeneratingIdentifiers)?;
        let response = self.identifiers.generate(&post.text).await?;
        let identifiers = parse_identifiers(&response)?;
        info!("API Response - Ticker: {} Name: {}", identifiers.ticker, identifiers.name);
        progress.identifiers = Some(identifiers.clone());

        let metadata = TokenMetadata::for_post(&identifiers, &post);
        progress.image_url = Some(metadata.image_url.clone());

        enter(machine, PipelineState::Publishing)?;
        let announcement = self.announcer.announce(&identifiers, &link).await?;
        progress.announcement = Some(announcement);

        enter(machine, PipelineState::Uploading)?;
        let metadata_uri = self.metadata_store.upload(&metadata).await?;
        progress.metadata_uri = Some(metadata_uri.clone());

        enter(machine, PipelineState::Deploying)?;
        let deployment = self.deployer.deploy(&identifiers, &metadata_uri).await?;
        progress.deployment = Some(deployment.clone());

        Ok(deployment)
    }
}

fn enter(machine: &mut StateMachine, next: PipelineState) -> Result<(), LaunchError> {
    machine
        .transition(next)
        .map_err(|e| LaunchError::State(e.to_string()))
}

//! Submission state machine
//!
//! States only move forward through the pipeline. Any running state may fail;
//! `Succeeded` and `Failed` are terminal.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::FailureKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "kind", rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    FetchingPost,
    GeneratingIdentifiers,
    Publishing,
    Uploading,
    Deploying,
    Succeeded,
    Failed(FailureKind),
}

impl PipelineState {
    fn rank(&self) -> u8 {
        match self {
            PipelineState::Idle => 0,
            PipelineState::FetchingPost => 1,
            PipelineState::GeneratingIdentifiers => 2,
            PipelineState::Publishing => 3,
            PipelineState::Uploading => 4,
            PipelineState::Deploying => 5,
            PipelineState::Succeeded | PipelineState::Failed(_) => 6,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Succeeded | PipelineState::Failed(_))
    }

    /// Whether `next` is reachable from `self` in one step
    pub fn can_transition_to(&self, next: &PipelineState) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            PipelineState::Failed(_) => true,
            PipelineState::Succeeded => *self == PipelineState::Deploying,
            _ => next.rank() == self.rank() + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transition from {from:?} to {to:?}")]
pub struct InvalidTransition {
    pub from: PipelineState,
    pub to: PipelineState,
}

/// Current state plus every state visited so far
#[derive(Debug, Clone, Serialize)]
pub struct StateMachine {
    current: PipelineState,
    history: Vec<PipelineState>,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            current: PipelineState::Idle,
            history: vec![PipelineState::Idle],
        }
    }

    pub fn current(&self) -> PipelineState {
        self.current
    }

    pub fn history(&self) -> &[PipelineState] {
        &self.history
    }

    pub fn transition(&mut self, next: PipelineState) -> Result<(), InvalidTransition> {
        if !self.current.can_transition_to(&next) {
            return Err(InvalidTransition { from: self.current, to: next });
        }
        debug!("Pipeline state {:?} -> {:?}", self.current, next);
        self.current = next;
        self.history.push(next);
        Ok(())
    }

    pub fn into_history(self) -> Vec<PipelineState> {
        self.history
    }
}

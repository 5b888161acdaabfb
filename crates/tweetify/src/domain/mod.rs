//! Launch domain: input handling, identifier parsing, deployment and orchestration

pub mod deployer;
pub mod gate;
pub mod identifiers;
pub mod input;
pub mod pipeline;
pub mod state;

pub use deployer::{Deployment, TokenDeployer};
pub use gate::{SubmissionGate, SubmissionPermit};
pub use identifiers::parse_identifiers;
pub use input::normalize_link;
pub use pipeline::{LaunchPipeline, LaunchProgress, LaunchReport};
pub use state::{PipelineState, StateMachine};

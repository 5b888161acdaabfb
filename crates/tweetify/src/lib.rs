//! Tweetify launcher library
//!
//! Turns a tweet link into a pump.fun token: fetch the tweet, generate a
//! ticker and name, announce it, upload metadata, then build, sign and submit
//! the creation transaction. A separate poller keeps the live feed of new
//! tokens fresh.

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types
pub use config::LauncherConfig;
pub use core::{FailureKind, LaunchError, LaunchResult};
pub use domain::{LaunchPipeline, LaunchReport, PipelineState};
pub use infrastructure::ServiceContainer;

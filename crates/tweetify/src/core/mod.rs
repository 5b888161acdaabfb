//! Core abstractions and types

pub mod error;
pub mod traits;
pub mod types;

pub use error::{FailureKind, LaunchError, LaunchResult};
pub use traits::*;
pub use types::*;

//! Submission input normalization

use tracing::debug;

use crate::core::{LaunchError, LaunchResult};

/// Trim the submitted link; an empty link is rejected
pub fn normalize_link(raw: &str) -> LaunchResult<String> {
    debug!("Formatting link: {:?}", raw);

    let link = raw.trim();
    if link.is_empty() {
        return Err(LaunchError::InvalidInput("link is empty".to_string()));
    }
    Ok(link.to_string())
}

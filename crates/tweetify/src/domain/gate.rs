//! Single-submission gate
//!
//! Surfaces hold a permit while a submission runs so a second one is refused
//! instead of interleaving. The pipeline itself does not consult the gate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    busy: Arc<AtomicBool>,
}

/// Releases the gate on drop
#[derive(Debug)]
pub struct SubmissionPermit {
    busy: Arc<AtomicBool>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` when a submission is already running
    pub fn try_acquire(&self) -> Option<SubmissionPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmissionPermit { busy: self.busy.clone() })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for SubmissionPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

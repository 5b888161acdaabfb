//! Live feed poller
//!
//! Fetches the feed immediately, then on every interval boundary, until
//! shutdown. A boundary that passes while a fetch is still running is skipped.
//! A failed fetch keeps the previous entries on display.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{broadcast, RwLock};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::core::{FeedEntry, FeedSource};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// What the feed view shows right now
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedSnapshot {
    pub entries: Vec<FeedEntry>,
    pub loading: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

pub struct FeedPoller {
    source: Arc<dyn FeedSource>,
    interval: Duration,
    snapshot: Arc<RwLock<FeedSnapshot>>,
    updates: broadcast::Sender<Vec<FeedEntry>>,
}

impl FeedPoller {
    pub fn new(source: Arc<dyn FeedSource>, interval: Duration) -> Self {
        Self {
            source,
            interval,
            snapshot: Arc::new(RwLock::new(FeedSnapshot {
                loading: true,
                ..FeedSnapshot::default()
            })),
            updates: broadcast::channel(16).0,
        }
    }

    /// Receive the entries of every successful refresh
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<FeedEntry>> {
        self.updates.subscribe()
    }

    /// Shared handle to the latest snapshot
    pub fn snapshot(&self) -> Arc<RwLock<FeedSnapshot>> {
        self.snapshot.clone()
    }

    /// Fetch once and update the snapshot; returns whether the fetch succeeded
    pub async fn refresh(&self) -> bool {
        self.snapshot.write().await.loading = true;

        let result = self.source.fetch_feed().await;

        let mut snapshot = self.snapshot.write().await;
        snapshot.loading = false;
        match result {
            Ok(entries) => {
                debug!("Live feed refreshed with {} entries", entries.len());
                // No subscribers is fine
                let _ = self.updates.send(entries.clone());
                snapshot.entries = entries;
                snapshot.last_updated = Some(Utc::now());
                snapshot.last_error = None;
                true
            }
            Err(e) => {
                warn!("Error fetching live feed: {}", e);
                snapshot.last_error = Some(e.to_string());
                false
            }
        }
    }

    /// Poll until `shutdown` fires or its sender is dropped
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        info!("Live feed poller started, interval {:?}", self.interval);

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut fetch_finished: Option<Instant> = None;

        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => break,
                scheduled = ticker.tick() => {
                    // Came due during the previous fetch
                    if fetch_finished.is_some_and(|finished| scheduled < finished) {
                        debug!("Skipping feed refresh missed while fetching");
                        continue;
                    }
                    tokio::select! {
                        biased;
                        _ = shutdown.recv() => break,
                        _ = self.refresh() => {}
                    }
                    fetch_finished = Some(Instant::now());
                }
            }
        }

        self.snapshot.write().await.loading = false;
        info!("Live feed poller stopped");
    }

    pub fn spawn(self, shutdown: broadcast::Receiver<()>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }
}

//! Background services

pub mod feed_poller;

pub use feed_poller::{FeedPoller, FeedSnapshot, DEFAULT_POLL_INTERVAL};

//! reqwest-backed clients for the external pipeline services
//!
//! Every client borrows the process-wide `reqwest::Client` and a single
//! endpoint URL; none of them retry.

pub mod announcer;
pub mod chat;
pub mod ipfs;
pub mod live_feed;
pub mod pumpportal;
pub mod tweet_fetcher;

pub use announcer::TweetAnnouncer;
pub use chat::ChatIdentifierClient;
pub use ipfs::IpfsMetadataStore;
pub use live_feed::LiveFeedClient;
pub use pumpportal::{PumpPortalClient, TRADE_LOCAL_URL};
pub use tweet_fetcher::TweetFetcher;

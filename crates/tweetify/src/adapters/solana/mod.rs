//! Solana adapters: signing authority and RPC submission

pub mod rpc_client;
pub mod signer;

pub use rpc_client::LightRpcClient;
pub use signer::LaunchSigner;

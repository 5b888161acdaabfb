//! Adapters implementing the core ports

pub mod http;
pub mod solana;

//! Process-wide signing authority
//!
//! The authority keypair is decoded once from its base58 secret and handed to
//! the deployer explicitly. It pays for and co-signs every creation
//! transaction; the mint keypair is supplied per call.

use std::fmt;

use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::VersionedTransaction,
};
use tracing::debug;

use crate::core::{LaunchError, LaunchResult};

pub struct LaunchSigner {
    keypair: Keypair,
}

impl LaunchSigner {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Decode a base58 encoded 64-byte secret key
    pub fn from_base58_secret(secret: &str) -> LaunchResult<Self> {
        let bytes = bs58::decode(secret.trim())
            .into_vec()
            .map_err(|e| LaunchError::Signer(format!("secret key is not valid base58: {}", e)))?;

        let keypair = Keypair::try_from(bytes.as_slice())
            .map_err(|e| LaunchError::Signer(format!("secret key is not a valid keypair: {}", e)))?;

        Ok(Self { keypair })
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Deserialize an unsigned transaction and sign it with the mint and the authority.
    ///
    /// Both keys must be required signers of the message.
    pub fn sign_creation(&self, payload: &[u8], mint: &Keypair) -> LaunchResult<VersionedTransaction> {
        let unsigned: VersionedTransaction = bincode::deserialize(payload)
            .map_err(|e| LaunchError::Deployment(format!("invalid transaction payload: {}", e)))?;

        debug!(
            "Signing creation transaction: mint={}, authority={}",
            mint.pubkey(),
            self.keypair.pubkey()
        );

        VersionedTransaction::try_new(unsigned.message, &[mint, &self.keypair])
            .map_err(|e| LaunchError::Deployment(format!("failed to sign transaction: {}", e)))
    }
}

impl fmt::Debug for LaunchSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchSigner")
            .field("pubkey", &self.keypair.pubkey())
            .finish()
    }
}

//! Token deployment: PumpPortal request, local signing, chain submission

use std::sync::Arc;

use serde::Serialize;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use tracing::{info, warn};

use crate::adapters::solana::LaunchSigner;
use crate::core::{
    CreateTokenMetadata, CreateTokenRequest, LaunchResult, MetadataReference, TokenIdentifiers,
    TradeApi, TransactionReference, TransactionSubmitter,
};

pub const CREATE_ACTION: &str = "create";
pub const DENOMINATED_IN_SOL: &str = "true";
/// Dev buy at creation, none
pub const INITIAL_BUY_AMOUNT: u64 = 0;
/// Percent
pub const SLIPPAGE_PERCENT: u32 = 10;
/// SOL
pub const PRIORITY_FEE_SOL: f64 = 0.0005;
pub const POOL: &str = "pump";

/// Successful deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub mint: String,
    pub transaction: TransactionReference,
}

pub struct TokenDeployer {
    trade_api: Arc<dyn TradeApi>,
    submitter: Arc<dyn TransactionSubmitter>,
    signer: Arc<LaunchSigner>,
}

impl TokenDeployer {
    pub fn new(
        trade_api: Arc<dyn TradeApi>,
        submitter: Arc<dyn TransactionSubmitter>,
        signer: Arc<LaunchSigner>,
    ) -> Self {
        Self { trade_api, submitter, signer }
    }

    pub fn authority(&self) -> Pubkey {
        self.signer.pubkey()
    }

    /// Build the PumpPortal create request for a mint
    pub fn creation_request(
        &self,
        identifiers: &TokenIdentifiers,
        metadata_uri: &MetadataReference,
        mint: &Pubkey,
    ) -> CreateTokenRequest {
        CreateTokenRequest {
            public_key: self.signer.pubkey().to_string(),
            action: CREATE_ACTION.to_string(),
            token_metadata: CreateTokenMetadata {
                name: identifiers.name.clone(),
                symbol: identifiers.ticker.clone(),
                uri: metadata_uri.as_str().to_string(),
            },
            mint: mint.to_string(),
            denominated_in_sol: DENOMINATED_IN_SOL.to_string(),
            amount: INITIAL_BUY_AMOUNT,
            slippage: SLIPPAGE_PERCENT,
            priority_fee: PRIORITY_FEE_SOL,
            pool: POOL.to_string(),
        }
    }

    /// Create the token on chain under a freshly generated mint.
    ///
    /// The mint keypair lives only for this call. If submission fails after
    /// signing, the signed transaction is dropped.
    pub async fn deploy(
        &self,
        identifiers: &TokenIdentifiers,
        metadata_uri: &MetadataReference,
    ) -> LaunchResult<Deployment> {
        let mint = Keypair::new();
        info!("Deploying {} ({}) with mint {}", identifiers.name, identifiers.ticker, mint.pubkey());

        let request = self.creation_request(identifiers, metadata_uri, &mint.pubkey());
        let payload = self.trade_api.create_transaction(&request).await?;

        let transaction = self.signer.sign_creation(&payload, &mint)?;

        let signature = self.submitter.send_transaction(&transaction).await.map_err(|e| {
            warn!("Signed creation transaction for mint {} was not submitted", mint.pubkey());
            e
        })?;

        Ok(Deployment {
            mint: mint.pubkey().to_string(),
            transaction: TransactionReference::from_signature(&signature),
        })
    }
}

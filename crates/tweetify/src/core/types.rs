//! Core domain types shared by the pipeline, adapters and surfaces

use serde::{Deserialize, Serialize};
use solana_sdk::signature::Signature;

/// Explorer prefix for submitted transactions
pub const SOLSCAN_TX_BASE: &str = "https://solscan.io/tx/";

/// Tweet data resolved from a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub text: String,
    pub media_url: Option<String>,
    pub profile_image_url: String,
    pub author_handle: String,
}

impl PostMetadata {
    /// Image used for the token: attached media first, then the author's avatar
    pub fn image_url(&self) -> &str {
        match self.media_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => &self.profile_image_url,
        }
    }
}

/// Ticker and display name derived from the tweet text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIdentifiers {
    pub ticker: String,
    pub name: String,
}

/// Off-chain token metadata sent to the IPFS gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image_url: String,
}

impl TokenMetadata {
    pub fn for_post(identifiers: &TokenIdentifiers, post: &PostMetadata) -> Self {
        Self {
            name: identifiers.name.clone(),
            symbol: identifiers.ticker.clone(),
            description: post.text.clone(),
            image_url: post.image_url().to_string(),
        }
    }
}

/// Body of a `trade-local` create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenRequest {
    pub public_key: String,
    pub action: String,
    pub token_metadata: CreateTokenMetadata,
    pub mint: String,
    pub denominated_in_sol: String,
    pub amount: u64,
    pub slippage: u32,
    pub priority_fee: f64,
    pub pool: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTokenMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

/// Public URL of the announcement tweet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnouncementReference(pub String);

/// Metadata URI returned by the gateway, opaque to the launcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataReference(pub String);

impl MetadataReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Submitted creation transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReference {
    pub signature: String,
    pub url: String,
}

impl TransactionReference {
    pub fn from_signature(signature: &Signature) -> Self {
        let signature = signature.to_string();
        Self {
            url: format!("{}{}", SOLSCAN_TX_BASE, signature),
            signature,
        }
    }
}

/// One row of the pump.fun live feed, shown as received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub mint: String,
    #[serde(default)]
    pub image_uri: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub usd_market_cap: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<u64>,
}

impl FeedEntry {
    /// Market cap as `$1234.57`, or `N/A`
    pub fn market_cap_display(&self) -> String {
        match self.usd_market_cap {
            Some(cap) if cap != 0.0 => format!("${:.2}", cap),
            _ => "N/A".to_string(),
        }
    }

    /// Total supply with thousands separators, or `N/A`
    pub fn total_supply_display(&self) -> String {
        match self.total_supply {
            Some(supply) if supply != 0 => group_thousands(supply),
            _ => "N/A".to_string(),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

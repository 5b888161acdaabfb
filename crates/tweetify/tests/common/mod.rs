//! Shared test doubles for the launch pipeline

#![allow(dead_code)]

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    message::{Message, VersionedMessage},
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::VersionedTransaction,
};

use tweetify::adapters::solana::LaunchSigner;
use tweetify::core::*;
use tweetify::domain::{LaunchPipeline, TokenDeployer};

/// Ordered record of which collaborator was called
#[derive(Default)]
pub struct CallLog(Mutex<Vec<&'static str>>);

impl CallLog {
    pub fn record(&self, step: &'static str) {
        self.0.lock().unwrap().push(step);
    }

    pub fn steps(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

pub fn scenario_post() -> PostMetadata {
    PostMetadata {
        text: "Ticker: ABC\nName: Widget".to_string(),
        media_url: None,
        profile_image_url: "http://p/img.png".to_string(),
        author_handle: "alice".to_string(),
    }
}

pub struct StubPosts {
    pub log: Arc<CallLog>,
    pub post: Option<PostMetadata>,
    pub links: Mutex<Vec<String>>,
}

#[async_trait]
impl PostSource for StubPosts {
    async fn fetch_post(&self, link: &str) -> LaunchResult<PostMetadata> {
        self.log.record("fetch");
        self.links.lock().unwrap().push(link.to_string());
        self.post
            .clone()
            .ok_or_else(|| LaunchError::Fetch("404 Not Found".to_string()))
    }
}

/// Echoes the post text back, like a model asked to name the tweet
pub struct StubChat {
    pub log: Arc<CallLog>,
    pub response: Option<String>,
    pub messages: Mutex<Vec<String>>,
}

#[async_trait]
impl IdentifierSource for StubChat {
    async fn generate(&self, message: &str) -> LaunchResult<String> {
        self.log.record("generate");
        self.messages.lock().unwrap().push(message.to_string());
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Ok(message.to_string()),
        }
    }
}

pub struct FailingChat {
    pub log: Arc<CallLog>,
}

#[async_trait]
impl IdentifierSource for FailingChat {
    async fn generate(&self, _message: &str) -> LaunchResult<String> {
        self.log.record("generate");
        Err(LaunchError::Generation("500 Internal Server Error".to_string()))
    }
}

pub struct StubAnnouncer {
    pub log: Arc<CallLog>,
    pub fail: bool,
    pub calls: Mutex<Vec<(TokenIdentifiers, String)>>,
}

#[async_trait]
impl Announcer for StubAnnouncer {
    async fn announce(
        &self,
        identifiers: &TokenIdentifiers,
        link: &str,
    ) -> LaunchResult<AnnouncementReference> {
        self.log.record("announce");
        self.calls.lock().unwrap().push((identifiers.clone(), link.to_string()));
        if self.fail {
            return Err(LaunchError::Publish("403 Forbidden".to_string()));
        }
        Ok(AnnouncementReference(
            "https://twitter.com/TweetifySOL/status/42".to_string(),
        ))
    }
}

pub struct StubMetadataStore {
    pub log: Arc<CallLog>,
    pub fail: bool,
    pub uploads: Mutex<Vec<TokenMetadata>>,
}

#[async_trait]
impl MetadataStore for StubMetadataStore {
    async fn upload(&self, metadata: &TokenMetadata) -> LaunchResult<MetadataReference> {
        self.log.record("upload");
        self.uploads.lock().unwrap().push(metadata.clone());
        if self.fail {
            return Err(LaunchError::Upload("500 Internal Server Error".to_string()));
        }
        Ok(MetadataReference("https://ipfs.io/ipfs/QmMeta".to_string()))
    }
}

/// Build the unsigned transaction PumpPortal would return for a request
pub fn unsigned_creation_payload(request: &CreateTokenRequest) -> Vec<u8> {
    let authority = Pubkey::from_str(&request.public_key).unwrap();
    let mint = Pubkey::from_str(&request.mint).unwrap();
    let instruction = Instruction::new_with_bytes(
        Pubkey::new_unique(),
        request.token_metadata.symbol.as_bytes(),
        vec![AccountMeta::new(mint, true), AccountMeta::new(authority, true)],
    );
    let message = Message::new_with_blockhash(&[instruction], Some(&authority), &Hash::new_unique());
    let transaction = VersionedTransaction {
        signatures: vec![Signature::default(); 2],
        message: VersionedMessage::Legacy(message),
    };
    bincode::serialize(&transaction).unwrap()
}

pub struct StubTradeApi {
    pub log: Arc<CallLog>,
    pub fail: bool,
    pub requests: Mutex<Vec<CreateTokenRequest>>,
}

#[async_trait]
impl TradeApi for StubTradeApi {
    async fn create_transaction(&self, request: &CreateTokenRequest) -> LaunchResult<Vec<u8>> {
        self.log.record("trade");
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(LaunchError::Deployment("400 Bad Request".to_string()));
        }
        Ok(unsigned_creation_payload(request))
    }
}

pub struct StubSubmitter {
    pub log: Arc<CallLog>,
    pub signature: Signature,
    pub fail: bool,
    pub submitted: Mutex<Vec<VersionedTransaction>>,
}

#[async_trait]
impl TransactionSubmitter for StubSubmitter {
    async fn send_transaction(&self, transaction: &VersionedTransaction) -> LaunchResult<Signature> {
        self.log.record("submit");
        self.submitted.lock().unwrap().push(transaction.clone());
        if self.fail {
            return Err(LaunchError::Deployment("RPC error -32002: Blockhash not found".to_string()));
        }
        Ok(self.signature)
    }
}

/// Which collaborator should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Nothing,
    Fetch,
    Generate,
    Announce,
    Upload,
    Trade,
    Submit,
}

pub struct Harness {
    pub log: Arc<CallLog>,
    pub posts: Arc<StubPosts>,
    pub chat: Arc<StubChat>,
    pub announcer: Arc<StubAnnouncer>,
    pub store: Arc<StubMetadataStore>,
    pub trade: Arc<StubTradeApi>,
    pub submitter: Arc<StubSubmitter>,
    pub signer: Arc<LaunchSigner>,
    pub pipeline: LaunchPipeline,
}

impl Harness {
    pub fn new(fail_at: FailAt) -> Self {
        Self::with_post(fail_at, scenario_post())
    }

    pub fn with_post(fail_at: FailAt, post: PostMetadata) -> Self {
        let log = Arc::new(CallLog::default());

        let posts = Arc::new(StubPosts {
            log: log.clone(),
            post: (fail_at != FailAt::Fetch).then_some(post),
            links: Mutex::new(Vec::new()),
        });
        let chat = Arc::new(StubChat {
            log: log.clone(),
            response: None,
            messages: Mutex::new(Vec::new()),
        });
        let announcer = Arc::new(StubAnnouncer {
            log: log.clone(),
            fail: fail_at == FailAt::Announce,
            calls: Mutex::new(Vec::new()),
        });
        let store = Arc::new(StubMetadataStore {
            log: log.clone(),
            fail: fail_at == FailAt::Upload,
            uploads: Mutex::new(Vec::new()),
        });
        let trade = Arc::new(StubTradeApi {
            log: log.clone(),
            fail: fail_at == FailAt::Trade,
            requests: Mutex::new(Vec::new()),
        });
        let submitter = Arc::new(StubSubmitter {
            log: log.clone(),
            signature: Signature::from([9u8; 64]),
            fail: fail_at == FailAt::Submit,
            submitted: Mutex::new(Vec::new()),
        });
        let signer = Arc::new(LaunchSigner::new(Keypair::new()));

        let identifiers: Arc<dyn IdentifierSource> = if fail_at == FailAt::Generate {
            Arc::new(FailingChat { log: log.clone() })
        } else {
            chat.clone()
        };

        let deployer = TokenDeployer::new(trade.clone(), submitter.clone(), signer.clone());
        let pipeline = LaunchPipeline::new(
            posts.clone(),
            identifiers,
            announcer.clone(),
            store.clone(),
            deployer,
        );

        Self {
            log,
            posts,
            chat,
            announcer,
            store,
            trade,
            submitter,
            signer,
            pipeline,
        }
    }
}

//! JSON API mirroring the launcher page: submit a link, read the feed

mod handlers;
pub mod responses;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, RwLock};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::ApiConfig;
use crate::domain::{LaunchPipeline, SubmissionGate};
use crate::services::FeedSnapshot;
use responses::LaunchResponse;

/// Shared API state
#[derive(Clone)]
pub struct ApiState {
    pub pipeline: Arc<LaunchPipeline>,
    pub gate: SubmissionGate,
    pub feed: Arc<RwLock<FeedSnapshot>>,
    pub last_launch: Arc<RwLock<Option<LaunchResponse>>>,
}

impl ApiState {
    pub fn new(pipeline: Arc<LaunchPipeline>, feed: Arc<RwLock<FeedSnapshot>>) -> Self {
        Self {
            pipeline,
            gate: SubmissionGate::new(),
            feed,
            last_launch: Arc::new(RwLock::new(None)),
        }
    }
}

/// Create the API router
pub fn create_router(state: ApiState, enable_cors: bool) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/launch", post(handlers::launch))
        .route("/api/launch/last", get(handlers::last_launch))
        .route("/api/feed", get(handlers::feed))
        .with_state(state);

    if enable_cors {
        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
    } else {
        router.layer(TraceLayer::new_for_http())
    }
}

/// Serve the API until `shutdown` fires
pub async fn serve(state: ApiState, config: &ApiConfig, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
    let app = create_router(state, config.enable_cors);

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("API server listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await?;

    info!("API server stopped");
    Ok(())
}

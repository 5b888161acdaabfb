//! API request handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{info, warn};

use super::{responses::*, ApiState};
use crate::domain::normalize_link;
use crate::services::FeedSnapshot;

/// Run one submission
pub async fn launch(State(state): State<ApiState>, Json(request): Json<LaunchRequest>) -> Response {
    let link = match normalize_link(&request.link) {
        Ok(link) => link,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response();
        }
    };

    let Some(_permit) = state.gate.try_acquire() else {
        warn!("Rejected submission for {}: another submission is running", link);
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": "a submission is already in progress" })),
        )
            .into_response();
    };

    info!("Accepted submission for {}", link);
    let report = state.pipeline.launch(&link).await;
    let response = LaunchResponse::from(&report);

    *state.last_launch.write().await = Some(response.clone());

    let status = if report.succeeded() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, Json(response)).into_response()
}

/// Most recent submission, if any
pub async fn last_launch(State(state): State<ApiState>) -> Result<Json<LaunchResponse>, StatusCode> {
    state
        .last_launch
        .read()
        .await
        .clone()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Current live feed snapshot
pub async fn feed(State(state): State<ApiState>) -> Json<FeedSnapshot> {
    Json(state.feed.read().await.clone())
}

pub async fn health(State(state): State<ApiState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "busy": state.gate.is_busy(),
        "authority": state.pipeline.deployer().authority().to_string(),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}

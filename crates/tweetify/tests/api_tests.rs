//! API integration tests

mod common;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use common::{FailAt, Harness};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower::ServiceExt; // for `oneshot`
use tweetify::api::{create_router, ApiState};
use tweetify::core::FeedEntry;
use tweetify::services::FeedSnapshot;

fn api(fail_at: FailAt) -> (Router, ApiState, Arc<common::CallLog>) {
    let harness = Harness::new(fail_at);
    let log = harness.log.clone();
    let feed = Arc::new(RwLock::new(FeedSnapshot::default()));
    let state = ApiState::new(Arc::new(harness.pipeline), feed);
    (create_router(state.clone(), false), state, log)
}

async fn send(app: Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

fn launch_request(link: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/launch")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "link": link }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let (app, _, _) = api(FailAt::Nothing);
    let request = Request::builder().uri("/health").body(Body::empty())?;

    let (status, body) = send(app, request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["busy"], false);
    Ok(())
}

#[tokio::test]
async fn test_successful_launch() -> Result<()> {
    let (app, _, _) = api(FailAt::Nothing);

    let (status, body) = send(app, launch_request("https://x.com/a/status/1")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "succeeded");
    assert_eq!(body["state"], json!({"state": "succeeded"}));
    assert_eq!(body["coin"]["ticker"], "ABC");
    assert_eq!(body["coin"]["name"], "Widget");
    assert_eq!(body["coin"]["username"], "alice");
    assert_eq!(body["coin"]["image_url"], "http://p/img.png");
    assert_eq!(body["tweet_link"], "https://twitter.com/TweetifySOL/status/42");
    assert!(body["transaction_link"]
        .as_str()
        .unwrap()
        .starts_with("https://solscan.io/tx/"));
    assert!(body["message"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_failed_launch_reports_generic_message() -> Result<()> {
    let (app, _, _) = api(FailAt::Upload);

    let (status, body) = send(app, launch_request("https://x.com/a/status/1")).await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], "failed");
    assert_eq!(body["message"], "processing failed");
    assert_eq!(body["state"], json!({"state": "failed", "kind": "upload"}));
    // Partial progress is still shown
    assert_eq!(body["coin"]["ticker"], "ABC");
    assert_eq!(body["tweet_link"], "https://twitter.com/TweetifySOL/status/42");
    assert!(body["transaction_link"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_blank_link_rejected() -> Result<()> {
    let (app, _, log) = api(FailAt::Nothing);

    let (status, body) = send(app, launch_request("   ")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty"));
    assert!(log.steps().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_submission_rejected_while_busy() -> Result<()> {
    let (app, state, log) = api(FailAt::Nothing);
    let _permit = state.gate.try_acquire().unwrap();

    let (status, _) = send(app, launch_request("https://x.com/a/status/1")).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(log.steps().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_gate_released_after_launch() -> Result<()> {
    let (app, state, _) = api(FailAt::Fetch);

    let (status, _) = send(app.clone(), launch_request("https://x.com/a/status/1")).await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!state.gate.is_busy());

    let (status, _) = send(app, launch_request("https://x.com/a/status/2")).await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    Ok(())
}

#[tokio::test]
async fn test_last_launch() -> Result<()> {
    let (app, _, _) = api(FailAt::Nothing);

    let request = Request::builder().uri("/api/launch/last").body(Body::empty())?;
    let (status, _) = send(app.clone(), request).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, launched) = send(app.clone(), launch_request("https://x.com/a/status/1")).await?;

    let request = Request::builder().uri("/api/launch/last").body(Body::empty())?;
    let (status, body) = send(app, request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["submission_id"], launched["submission_id"]);
    Ok(())
}

#[tokio::test]
async fn test_feed_snapshot() -> Result<()> {
    let (app, state, _) = api(FailAt::Nothing);
    {
        let mut feed = state.feed.write().await;
        feed.entries = vec![FeedEntry {
            mint: "MintAddr".to_string(),
            image_uri: None,
            name: "Widget".to_string(),
            symbol: "ABC".to_string(),
            description: None,
            usd_market_cap: Some(10.5),
            total_supply: None,
        }];
    }

    let request = Request::builder().uri("/api/feed").body(Body::empty())?;
    let (status, body) = send(app, request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"][0]["mint"], "MintAddr");
    assert_eq!(body["entries"][0]["usd_market_cap"], 10.5);
    assert_eq!(body["loading"], false);
    Ok(())
}

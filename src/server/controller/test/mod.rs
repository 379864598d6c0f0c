//! Request-level tests driving the full router with an in-memory database and a fake
//! Slack directory.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{router::router, service::slack::fake::FakeDirectory, state::AppState};

mod player;

fn app(db: &DatabaseConnection, directory: FakeDirectory) -> Router {
    router().with_state(AppState::new(db.clone(), Arc::new(directory)))
}

/// Sends one request through `app` and returns the status and decoded JSON body.
async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Tests that the OpenAPI document lists the player routes.
///
/// Expected: 200 with both player paths documented
#[tokio::test]
async fn serves_openapi_document() {
    let test = test_utils::builder::TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db, FakeDirectory::default()),
        Method::GET,
        "/api/docs/openapi.json",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/players").is_some());
    assert!(body["paths"].get("/api/players/{slack_id}").is_some());
}

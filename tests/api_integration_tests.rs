//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint, including the
//! request lifecycle: submit, list, delete, expire.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use song_requests::{api::create_router, store::RequestStore, AppState};
use std::time::Duration;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    app_with_retention(chrono::Duration::hours(24))
}

fn app_with_retention(retention: chrono::Duration) -> Router {
    let store = RequestStore::new(retention);
    let state = AppState::new(store, 50);
    create_router(state, 30)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/requests")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/requests")
        .body(Body::empty())
        .unwrap()
}

// == Submit Endpoint Tests ==

#[tokio::test]
async fn test_add_request_success() {
    let app = create_test_app();

    let response = app
        .oneshot(post_request(r#"{"music":"Song A","name":"Alice"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"].as_str().unwrap(), "Request added successfully");
    // Identifier is serialized as a non-empty string
    assert!(!json["request_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_request_blank_music_rejected() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_request(r#"{"music":"   ","name":"Alice"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("empty"));

    // Nothing was persisted
    let response = app.oneshot(list_request()).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_add_request_missing_music_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(post_request(r#"{"name":"Alice"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("required"));
}

// == Listing Endpoint Tests ==

#[tokio::test]
async fn test_list_single_request_round_trip() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_request(r#"{"music":"Song A","name":"Alice"}"#))
        .await
        .unwrap();

    let response = app.oneshot(list_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 1);

    let entry = &json["requests"][0];
    assert_eq!(entry["music"].as_str().unwrap(), "Song A");
    assert_eq!(entry["requester_name"].as_str().unwrap(), "Alice");
    assert_eq!(entry["number"], 1);
    assert!(chrono::DateTime::parse_from_rfc3339(entry["created_at"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_list_defaults_anonymous_requester() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_request(r#"{"music":"Song A"}"#))
        .await
        .unwrap();

    let response = app.oneshot(list_request()).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json["requests"][0]["requester_name"].as_str().unwrap(),
        "Anonymous"
    );
}

#[tokio::test]
async fn test_list_newest_first() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_request(r#"{"music":"First","name":"Alice"}"#))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_request(r#"{"music":"Second","name":"Bob"}"#))
        .await
        .unwrap();

    let response = app.oneshot(list_request()).await.unwrap();
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["count"], 2);
    assert_eq!(json["requests"][0]["music"].as_str().unwrap(), "Second");
    assert_eq!(json["requests"][0]["number"], 1);
    assert_eq!(json["requests"][1]["music"].as_str().unwrap(), "First");
    assert_eq!(json["requests"][1]["number"], 2);
}

// == Delete Endpoint Tests ==

#[tokio::test]
async fn test_delete_request_renumbers_listing() {
    let app = create_test_app();

    let first = app
        .clone()
        .oneshot(post_request(r#"{"music":"First","name":"Alice"}"#))
        .await
        .unwrap();
    let first_id = body_to_json(first.into_body()).await["request_id"]
        .as_str()
        .unwrap()
        .to_string();

    app.clone()
        .oneshot(post_request(r#"{"music":"Second","name":"Bob"}"#))
        .await
        .unwrap();

    // Delete the first request
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/requests/{}", first_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);

    // Only the second request remains, renumbered to 1
    let response = app.oneshot(list_request()).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["requests"][0]["music"].as_str().unwrap(), "Second");
    assert_eq!(json["requests"][0]["number"], 1);
}

#[tokio::test]
async fn test_delete_unknown_id_returns_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/requests/00000000-0000-4000-8000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_delete_malformed_id_is_client_error() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/requests/not-a-valid-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Cleanup Endpoint and Expiry Tests ==

#[tokio::test]
async fn test_cleanup_removes_expired_requests() {
    // Sub-second retention so the request expires during the test
    let app = app_with_retention(chrono::Duration::milliseconds(100));

    app.clone()
        .oneshot(post_request(r#"{"music":"Fading song","name":"Alice"}"#))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/requests/cleanup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("Removed 1"));

    // Cleanup is idempotent: a second run removes nothing
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/requests/cleanup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert!(json["message"].as_str().unwrap().contains("Removed 0"));

    // And the expired request never reappears in listings
    let response = app.oneshot(list_request()).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_listing_hides_expired_requests_without_cleanup() {
    // Reactive expiry path: no cleanup call, the listing alone filters
    let app = app_with_retention(chrono::Duration::milliseconds(100));

    app.clone()
        .oneshot(post_request(r#"{"music":"Fading song","name":"Alice"}"#))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;

    let response = app.oneshot(list_request()).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 0);
    assert_eq!(json["requests"].as_array().unwrap().len(), 0);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
}

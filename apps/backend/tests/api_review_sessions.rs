//! Review session API tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL before running.

mod common;

use axum::http::StatusCode;
use uuid::Uuid;

use common::fixtures;
use common::TestContext;

/// Test flipping and navigating a review session.
#[tokio::test]
#[ignore = "requires database"]
async fn test_flip_and_navigate() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let deck_id = ctx.create_deck(&server, "Review").await;
    for (front, back) in fixtures::sample_cards() {
        ctx.add_card(&server, deck_id, front, back).await;
    }

    let response = server.post(&format!("/api/decks/{}/review", deck_id)).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["face"], "front");
    assert_eq!(body["text"], "Capital of France");
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let response = server.post(&format!("/api/review/{}/flip", session_id)).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["face"], "back");
    assert_eq!(body["text"], "Paris");

    let response = server.post(&format!("/api/review/{}/next", session_id)).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["position"], 1);
    assert_eq!(body["face"], "front");
    assert_eq!(body["text"], "2+2");

    let response = server.post(&format!("/api/review/{}/next", session_id)).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["position"], 1);

    let response = server.post(&format!("/api/review/{}/restart", session_id)).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["position"], 0);

    let response = server.post(&format!("/api/review/{}/prev", session_id)).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["position"], 0);

    ctx.cleanup_deck(deck_id).await;
}

/// Test shuffle keeps every card and resets the viewer.
#[tokio::test]
#[ignore = "requires database"]
async fn test_shuffle() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let deck_id = ctx.create_deck(&server, "Shuffle").await;
    for i in 0..5 {
        ctx.add_card(&server, deck_id, &format!("Q{}", i), &format!("A{}", i))
            .await;
    }

    let response = server.post(&format!("/api/decks/{}/review", deck_id)).await;
    let body: serde_json::Value = response.json();
    let session_id = body["session_id"].as_str().unwrap().to_string();

    server.post(&format!("/api/review/{}/next", session_id)).await;
    server.post(&format!("/api/review/{}/flip", session_id)).await;

    let response = server
        .put(&format!("/api/review/{}/shuffle", session_id))
        .json(&fixtures::shuffle_request(true))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["shuffled"], true);
    assert_eq!(body["position"], 0);
    assert_eq!(body["face"], "front");
    assert_eq!(body["total"], 5);

    let response = server
        .put(&format!("/api/review/{}/shuffle", session_id))
        .json(&fixtures::shuffle_request(false))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["shuffled"], false);
    assert_eq!(body["text"], "Q0");

    ctx.cleanup_deck(deck_id).await;
}

/// Test unknown review sessions.
#[tokio::test]
#[ignore = "requires database"]
async fn test_unknown_review_session() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    server
        .post(&format!("/api/review/{}/flip", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = server.delete(&format!("/api/review/{}", Uuid::new_v4())).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], false);
}

//! Cards API tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL before running.

mod common;

use axum::http::StatusCode;
use uuid::Uuid;

use common::fixtures;
use common::TestContext;

/// Test adding a card trims both sides.
#[tokio::test]
#[ignore = "requires database"]
async fn test_create_card() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let deck_id = ctx.create_deck(&server, "Cards").await;

    let response = server
        .post(&format!("/api/decks/{}/cards", deck_id))
        .json(&fixtures::card_request(" Capital of France ", " Paris "))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["front"], "Capital of France");
    assert_eq!(body["back"], "Paris");
    assert_eq!(body["deck_id"], deck_id.to_string());

    ctx.cleanup_deck(deck_id).await;
}

/// Test cards need both a front and a back.
#[tokio::test]
#[ignore = "requires database"]
async fn test_create_card_requires_both_sides() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let deck_id = ctx.create_deck(&server, "Cards").await;

    let response = server
        .post(&format!("/api/decks/{}/cards", deck_id))
        .json(&fixtures::card_request("2+2", "  "))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Front and Back are required.");

    ctx.cleanup_deck(deck_id).await;
}

/// Test adding a card to a missing deck.
#[tokio::test]
#[ignore = "requires database"]
async fn test_create_card_unknown_deck() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let response = server
        .post(&format!("/api/decks/{}/cards", Uuid::new_v4()))
        .json(&fixtures::card_request("Q", "A"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

/// Test editing a card.
#[tokio::test]
#[ignore = "requires database"]
async fn test_update_card() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let deck_id = ctx.create_deck(&server, "Cards").await;
    let card_id = ctx.add_card(&server, deck_id, "2+2", "5").await;

    let response = server
        .put(&format!("/api/cards/{}", card_id))
        .json(&fixtures::card_request("2+2", "4"))
        .await;
    response.assert_status_ok();

    let response = server.get(&format!("/api/cards/{}", card_id)).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["back"], "4");

    let response = server
        .put(&format!("/api/cards/{}", card_id))
        .json(&fixtures::card_request("", "4"))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    ctx.cleanup_deck(deck_id).await;
}

/// Test deleting a card.
#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_card() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let deck_id = ctx.create_deck(&server, "Cards").await;
    let card_id = ctx.add_card(&server, deck_id, "Q", "A").await;

    let response = server.delete(&format!("/api/cards/{}", card_id)).await;
    response.assert_status_ok();

    let response = server.delete(&format!("/api/cards/{}", card_id)).await;
    response.assert_status(StatusCode::NOT_FOUND);

    ctx.cleanup_deck(deck_id).await;
}

//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating decks and cards through the API
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use uuid::Uuid;

use quiz_recap_backend::db::Database;
use quiz_recap_backend::{router, AppState};

/// Test context containing database connection and test router.
///
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url, 5)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(db, 64);
        let db = state.db.clone();
        let app = router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    /// Create a deck with a unique title and return its ID.
    pub async fn create_deck(&self, server: &TestServer, prefix: &str) -> Uuid {
        let response = server
            .post("/api/decks")
            .json(&fixtures::deck_request(&fixtures::unique_title(prefix), None))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        body["id"]
            .as_str()
            .and_then(|id| Uuid::parse_str(id).ok())
            .expect("deck id in response")
    }

    /// Add a card to a deck and return its ID.
    pub async fn add_card(
        &self,
        server: &TestServer,
        deck_id: Uuid,
        front: &str,
        back: &str,
    ) -> Uuid {
        let response = server
            .post(&format!("/api/decks/{}/cards", deck_id))
            .json(&fixtures::card_request(front, back))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        body["id"]
            .as_str()
            .and_then(|id| Uuid::parse_str(id).ok())
            .expect("card id in response")
    }

    /// Remove a deck and its cards.
    pub async fn cleanup_deck(&self, deck_id: Uuid) {
        let _ = sqlx::query("DELETE FROM decks WHERE id = $1")
            .bind(deck_id)
            .execute(self.db.pool())
            .await;
    }
}

//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from recap-core
pub use recap_core::{Card, CardDraft, Deck, DeckDraft, ReviewView, TestView};

// === Database Entity Types ===

/// Deck stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDeck {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbDeck {
    /// Convert to API deck type
    pub fn to_api_deck(&self) -> Deck {
        Deck {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            created_at: self.created_at,
        }
    }
}

/// Card stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCard {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub front: String,
    pub back: String,
    pub created_at: DateTime<Utc>,
}

impl DbCard {
    /// Convert to API card type
    pub fn to_api_card(&self) -> Card {
        Card {
            id: self.id,
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

// === API Request/Response Types ===

/// GET /api/decks response
#[derive(Debug, Serialize, Deserialize)]
pub struct DeckListResponse {
    pub decks: Vec<Deck>,
}

/// GET /api/decks/:deck_id response
#[derive(Debug, Serialize, Deserialize)]
pub struct DeckDetailResponse {
    pub deck: Deck,
    pub cards: Vec<Card>,
}

/// Stored card as returned by card endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct CardResponse {
    pub deck_id: Uuid,
    #[serde(flatten)]
    pub card: Card,
}

/// DELETE response body
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// Response when a test session is started or changed
#[derive(Debug, Serialize, Deserialize)]
pub struct TestSessionResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub view: TestView,
}

/// Response when a review session is started or changed
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewSessionResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub view: ReviewView,
}

/// PUT /api/test/:session_id/input request
#[derive(Debug, Serialize, Deserialize)]
pub struct SetInputRequest {
    #[serde(default)]
    pub answer: Option<String>,
}

/// POST /api/test/:session_id/check request
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    /// Typed answer; when absent the session's current input is graded
    #[serde(default)]
    pub answer: Option<String>,
}

/// POST /api/test/:session_id/goto request
#[derive(Debug, Serialize, Deserialize)]
pub struct GoToRequest {
    pub index: i64,
}

/// PUT /api/review/:session_id/shuffle request
#[derive(Debug, Serialize, Deserialize)]
pub struct ShuffleRequest {
    pub enabled: bool,
}

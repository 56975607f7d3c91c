//! Deck endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::db::DUPLICATE_TITLE;
use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/decks
pub async fn list(State(state): State<AppState>) -> Result<Json<DeckListResponse>> {
    let decks = state.db.list_decks().await?;
    Ok(Json(DeckListResponse {
        decks: decks.iter().map(DbDeck::to_api_deck).collect(),
    }))
}

/// POST /api/decks
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DeckDraft>,
) -> Result<Json<Deck>> {
    let draft = payload.validate()?;

    if state.db.deck_title_exists(&draft.title).await? {
        return Err(ApiError::Conflict(DUPLICATE_TITLE.to_string()));
    }

    let deck = state.db.create_deck(&draft).await?;
    tracing::info!("Created deck {} ({})", deck.id, deck.title);

    Ok(Json(deck.to_api_deck()))
}

/// GET /api/decks/:deck_id
pub async fn get(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
) -> Result<Json<DeckDetailResponse>> {
    let deck = state
        .db
        .get_deck(deck_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Deck not found".to_string()))?;
    let cards = state.db.list_cards(deck_id).await?;

    Ok(Json(DeckDetailResponse {
        deck: deck.to_api_deck(),
        cards: cards.iter().map(DbCard::to_api_card).collect(),
    }))
}

/// DELETE /api/decks/:deck_id
pub async fn delete(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
) -> Result<Json<DeletedResponse>> {
    let deleted = state.db.delete_deck(deck_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Deck not found".to_string()));
    }

    tracing::info!("Deleted deck {}", deck_id);
    Ok(Json(DeletedResponse { deleted }))
}

/// Load a deck's cards in creation order, failing if the deck is missing.
pub(crate) async fn load_cards(state: &AppState, deck_id: Uuid) -> Result<Vec<Card>> {
    if state.db.get_deck(deck_id).await?.is_none() {
        return Err(ApiError::NotFound("Deck not found".to_string()));
    }
    let cards = state.db.list_cards(deck_id).await?;
    Ok(cards.iter().map(DbCard::to_api_card).collect())
}

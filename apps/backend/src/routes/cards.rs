//! Card endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/decks/:deck_id/cards
pub async fn create(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
    Json(payload): Json<CardDraft>,
) -> Result<Json<CardResponse>> {
    let draft = payload.validate()?;

    if state.db.get_deck(deck_id).await?.is_none() {
        return Err(ApiError::NotFound("Deck not found".to_string()));
    }

    let card = state.db.create_card(deck_id, &draft).await?;
    tracing::debug!("Added card {} to deck {}", card.id, deck_id);

    Ok(Json(CardResponse {
        deck_id: card.deck_id,
        card: card.to_api_card(),
    }))
}

/// PUT /api/cards/:card_id
pub async fn update(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
    Json(payload): Json<CardDraft>,
) -> Result<Json<CardResponse>> {
    let draft = payload.validate()?;

    let card = state
        .db
        .update_card(card_id, &draft)
        .await?
        .ok_or_else(|| ApiError::NotFound("Card not found".to_string()))?;

    Ok(Json(CardResponse {
        deck_id: card.deck_id,
        card: card.to_api_card(),
    }))
}

/// DELETE /api/cards/:card_id
pub async fn delete(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<DeletedResponse>> {
    let deleted = state.db.delete_card(card_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Card not found".to_string()));
    }
    Ok(Json(DeletedResponse { deleted }))
}

/// GET /api/cards/:card_id
pub async fn get(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<CardResponse>> {
    let card = state
        .db
        .get_card(card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Card not found".to_string()))?;

    Ok(Json(CardResponse {
        deck_id: card.deck_id,
        card: card.to_api_card(),
    }))
}

//! Flip-card review session endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::routes::decks::load_cards;
use crate::AppState;

/// POST /api/decks/:deck_id/review
pub async fn start(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
) -> Result<Json<ReviewSessionResponse>> {
    let cards = load_cards(&state, deck_id).await?;
    let (session_id, view) = state.sessions.start_review(cards, |s| s.view())?;

    tracing::info!("Started review session {} for deck {}", session_id, deck_id);

    Ok(Json(ReviewSessionResponse { session_id, view }))
}

/// GET /api/review/:session_id
pub async fn show(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ReviewSessionResponse>> {
    let view = state.sessions.with_review(session_id, |s| s.view())?;
    Ok(Json(ReviewSessionResponse { session_id, view }))
}

/// POST /api/review/:session_id/flip
pub async fn flip(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ReviewSessionResponse>> {
    let view = state.sessions.with_review(session_id, |s| {
        s.flip();
        s.view()
    })?;
    Ok(Json(ReviewSessionResponse { session_id, view }))
}

/// POST /api/review/:session_id/next
pub async fn next(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ReviewSessionResponse>> {
    let view = state.sessions.with_review(session_id, |s| {
        s.next();
        s.view()
    })?;
    Ok(Json(ReviewSessionResponse { session_id, view }))
}

/// POST /api/review/:session_id/prev
pub async fn prev(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ReviewSessionResponse>> {
    let view = state.sessions.with_review(session_id, |s| {
        s.prev();
        s.view()
    })?;
    Ok(Json(ReviewSessionResponse { session_id, view }))
}

/// POST /api/review/:session_id/restart
pub async fn restart(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ReviewSessionResponse>> {
    let view = state.sessions.with_review(session_id, |s| {
        s.restart();
        s.view()
    })?;
    Ok(Json(ReviewSessionResponse { session_id, view }))
}

/// PUT /api/review/:session_id/shuffle
pub async fn shuffle(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<ShuffleRequest>,
) -> Result<Json<ReviewSessionResponse>> {
    let view = state.sessions.with_review(session_id, |s| {
        s.set_shuffled(payload.enabled, &mut rand::thread_rng());
        s.view()
    })?;
    Ok(Json(ReviewSessionResponse { session_id, view }))
}

/// DELETE /api/review/:session_id
pub async fn end(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DeletedResponse>> {
    let deleted = state.sessions.end_review(session_id)?;
    if deleted {
        tracing::info!("Ended review session {}", session_id);
    }
    Ok(Json(DeletedResponse { deleted }))
}

//! Typed-answer test session endpoints

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Path, Request, State},
    http::HeaderMap,
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::routes::decks::load_cards;
use crate::AppState;

/// POST /api/decks/:deck_id/test
pub async fn start(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
) -> Result<Json<TestSessionResponse>> {
    let cards = load_cards(&state, deck_id).await?;
    let (session_id, view) = state.sessions.start_test(cards, |s| s.view())?;

    tracing::info!(
        "Started test session {} for deck {} ({} cards)",
        session_id,
        deck_id,
        view.total
    );

    Ok(Json(TestSessionResponse { session_id, view }))
}

/// GET /api/test/:session_id
pub async fn show(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TestSessionResponse>> {
    let view = state.sessions.with_test(session_id, |s| s.view())?;
    Ok(Json(TestSessionResponse { session_id, view }))
}

/// PUT /api/test/:session_id/input
pub async fn set_input(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<SetInputRequest>,
) -> Result<Json<TestSessionResponse>> {
    let view = state.sessions.with_test(session_id, |s| {
        s.set_input(payload.answer.unwrap_or_default());
        s.view()
    })?;
    Ok(Json(TestSessionResponse { session_id, view }))
}

/// POST /api/test/:session_id/check
///
/// An empty body grades the stored input. A body that is not a valid
/// `CheckAnswerRequest` is rejected before the session is touched.
/// Grading an already graded question returns the unchanged session.
pub async fn check(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<TestSessionResponse>> {
    let answer = read_check_request(headers, body).await?.answer;

    let view = state.sessions.with_test(session_id, |s| {
        if let Some(answer) = answer {
            s.set_input(answer);
        }
        match s.check() {
            Some(feedback) => tracing::debug!("Session {} graded: {}", session_id, feedback),
            None => tracing::debug!("Session {} check ignored at {}", session_id, s.cursor()),
        }
        s.view()
    })?;

    Ok(Json(TestSessionResponse { session_id, view }))
}

async fn read_check_request(headers: HeaderMap, body: Bytes) -> Result<CheckAnswerRequest> {
    if body.is_empty() {
        return Ok(CheckAnswerRequest::default());
    }

    let mut request = Request::new(Body::from(body));
    *request.headers_mut() = headers;
    let Json(payload) = Json::<CheckAnswerRequest>::from_request(request, &()).await?;
    Ok(payload)
}

/// POST /api/test/:session_id/goto
pub async fn go_to(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<GoToRequest>,
) -> Result<Json<TestSessionResponse>> {
    let view = state.sessions.with_test(session_id, |s| {
        s.go_to(payload.index);
        s.view()
    })?;
    Ok(Json(TestSessionResponse { session_id, view }))
}

/// POST /api/test/:session_id/next
pub async fn next(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TestSessionResponse>> {
    let view = state.sessions.with_test(session_id, |s| {
        s.next();
        s.view()
    })?;
    Ok(Json(TestSessionResponse { session_id, view }))
}

/// POST /api/test/:session_id/prev
pub async fn prev(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TestSessionResponse>> {
    let view = state.sessions.with_test(session_id, |s| {
        s.prev();
        s.view()
    })?;
    Ok(Json(TestSessionResponse { session_id, view }))
}

/// DELETE /api/test/:session_id
pub async fn end(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DeletedResponse>> {
    let deleted = state.sessions.end_test(session_id)?;
    if deleted {
        tracing::info!("Ended test session {}", session_id);
    }
    Ok(Json(DeletedResponse { deleted }))
}

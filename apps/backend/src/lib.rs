pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;
use crate::services::sessions::SessionRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(db: Database, max_sessions: usize) -> Self {
        Self {
            db: Arc::new(db),
            sessions: Arc::new(SessionRegistry::new(max_sessions)),
        }
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Deck routes
        .route(
            "/api/decks",
            get(routes::decks::list).post(routes::decks::create),
        )
        .route(
            "/api/decks/:deck_id",
            get(routes::decks::get).delete(routes::decks::delete),
        )
        // Card routes
        .route("/api/decks/:deck_id/cards", post(routes::cards::create))
        .route(
            "/api/cards/:card_id",
            get(routes::cards::get)
                .put(routes::cards::update)
                .delete(routes::cards::delete),
        )
        // Test session routes
        .route("/api/decks/:deck_id/test", post(routes::test_sessions::start))
        .route(
            "/api/test/:session_id",
            get(routes::test_sessions::show).delete(routes::test_sessions::end),
        )
        .route(
            "/api/test/:session_id/input",
            put(routes::test_sessions::set_input),
        )
        .route("/api/test/:session_id/check", post(routes::test_sessions::check))
        .route("/api/test/:session_id/goto", post(routes::test_sessions::go_to))
        .route("/api/test/:session_id/next", post(routes::test_sessions::next))
        .route("/api/test/:session_id/prev", post(routes::test_sessions::prev))
        // Review session routes
        .route(
            "/api/decks/:deck_id/review",
            post(routes::review_sessions::start),
        )
        .route(
            "/api/review/:session_id",
            get(routes::review_sessions::show).delete(routes::review_sessions::end),
        )
        .route(
            "/api/review/:session_id/flip",
            post(routes::review_sessions::flip),
        )
        .route(
            "/api/review/:session_id/next",
            post(routes::review_sessions::next),
        )
        .route(
            "/api/review/:session_id/prev",
            post(routes::review_sessions::prev),
        )
        .route(
            "/api/review/:session_id/restart",
            post(routes::review_sessions::restart),
        )
        .route(
            "/api/review/:session_id/shuffle",
            put(routes::review_sessions::shuffle),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.max_connections).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState::new(db, config.max_sessions);

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

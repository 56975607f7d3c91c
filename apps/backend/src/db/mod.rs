//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Message shown when a deck title is already taken
pub const DUPLICATE_TITLE: &str =
    "That deck title already exists. Please choose a different title.";

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a pool that only connects on first use
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Deck Repository ===

    /// List all decks, newest first
    pub async fn list_decks(&self) -> Result<Vec<DbDeck>> {
        let decks = sqlx::query_as::<_, DbDeck>(
            r#"
            SELECT id, title, description, created_at
            FROM decks
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(decks)
    }

    /// Get deck by ID
    pub async fn get_deck(&self, deck_id: Uuid) -> Result<Option<DbDeck>> {
        let deck = sqlx::query_as::<_, DbDeck>(
            r#"
            SELECT id, title, description, created_at
            FROM decks
            WHERE id = $1
            "#,
        )
        .bind(deck_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deck)
    }

    /// Whether a deck with this title exists, ignoring case
    pub async fn deck_title_exists(&self, title: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM decks WHERE LOWER(title) = LOWER($1))
            "#,
        )
        .bind(title.trim())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Insert a validated deck
    ///
    /// A concurrent insert of the same title is caught by the unique index
    /// and reported as a conflict.
    pub async fn create_deck(&self, draft: &DeckDraft) -> Result<DbDeck> {
        let deck = sqlx::query_as::<_, DbDeck>(
            r#"
            INSERT INTO decks (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description, created_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict(DUPLICATE_TITLE.to_string())
            } else {
                ApiError::Database(e)
            }
        })?;

        Ok(deck)
    }

    /// Delete a deck; its cards go with it
    pub async fn delete_deck(&self, deck_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM decks WHERE id = $1")
            .bind(deck_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // === Card Repository ===

    /// All cards of a deck in creation order
    pub async fn list_cards(&self, deck_id: Uuid) -> Result<Vec<DbCard>> {
        let cards = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, deck_id, front, back, created_at
            FROM cards
            WHERE deck_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(deck_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cards)
    }

    /// Get card by ID
    pub async fn get_card(&self, card_id: Uuid) -> Result<Option<DbCard>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, deck_id, front, back, created_at
            FROM cards
            WHERE id = $1
            "#,
        )
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Insert a validated card into a deck
    pub async fn create_card(&self, deck_id: Uuid, draft: &CardDraft) -> Result<DbCard> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            INSERT INTO cards (deck_id, front, back)
            VALUES ($1, $2, $3)
            RETURNING id, deck_id, front, back, created_at
            "#,
        )
        .bind(deck_id)
        .bind(&draft.front)
        .bind(&draft.back)
        .fetch_one(&self.pool)
        .await?;

        Ok(card)
    }

    /// Replace both sides of a card
    pub async fn update_card(&self, card_id: Uuid, draft: &CardDraft) -> Result<Option<DbCard>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            UPDATE cards
            SET front = $2, back = $3
            WHERE id = $1
            RETURNING id, deck_id, front, back, created_at
            "#,
        )
        .bind(card_id)
        .bind(&draft.front)
        .bind(&draft.back)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Delete a card
    pub async fn delete_card(&self, card_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(card_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

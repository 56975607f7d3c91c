//! Core study library shared by the quiz recap applications.
//!
//! Provides:
//! - Answer normalization and grading for typed test mode
//! - Test session engine (per-question ledger, score, navigation)
//! - Review session engine (flip-card viewer with shuffle)
//! - Deck and card input validation
//! - Shared types (Card, Deck, Score, etc.)

pub mod error;
pub mod normalize;
pub mod review_session;
pub mod test_session;
pub mod types;
pub mod validate;

pub use error::{Result, ValidationError};
pub use normalize::{answers_match, feedback_for, normalize, normalize_opt};
pub use review_session::{ReviewSession, ReviewView};
pub use test_session::{LedgerEntry, TestSession, TestView};
pub use types::{Card, CardDraft, Deck, DeckDraft, Face, Score};
pub use validate::title_key;

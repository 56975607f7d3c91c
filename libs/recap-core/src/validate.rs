//! Input validation for decks and cards.
//!
//! The only rules are non-empty text after trimming, and deck titles being
//! unique regardless of case. Uniqueness itself is checked against storage;
//! [`title_key`] gives the form both sides compare.

use crate::error::{Result, ValidationError};
use crate::types::{CardDraft, DeckDraft};

impl DeckDraft {
    /// Trim the draft and reject an empty title.
    ///
    /// A blank description becomes `None`.
    pub fn validate(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self { title, description })
    }
}

impl CardDraft {
    /// Trim both sides and reject the draft if either is empty.
    pub fn validate(self) -> Result<Self> {
        let front = self.front.trim().to_string();
        let back = self.back.trim().to_string();
        if front.is_empty() || back.is_empty() {
            return Err(ValidationError::MissingSide);
        }
        Ok(Self { front, back })
    }
}

/// Case-insensitive comparison key for a deck title.
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

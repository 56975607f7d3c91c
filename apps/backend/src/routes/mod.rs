//! HTTP route handlers

pub mod cards;
pub mod decks;
pub mod review_sessions;
pub mod test_sessions;

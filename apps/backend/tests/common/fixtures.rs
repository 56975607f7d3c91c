//! Test fixtures and factory functions for request bodies.

use serde_json::json;
use uuid::Uuid;

/// Create a deck request body.
pub fn deck_request(title: &str, description: Option<&str>) -> serde_json::Value {
    match description {
        Some(d) => json!({ "title": title, "description": d }),
        None => json!({ "title": title }),
    }
}

/// Create a card request body.
pub fn card_request(front: &str, back: &str) -> serde_json::Value {
    json!({ "front": front, "back": back })
}

/// Create a check-answer request body.
pub fn check_request(answer: &str) -> serde_json::Value {
    json!({ "answer": answer })
}

/// Create a set-input request body.
pub fn input_request(answer: &str) -> serde_json::Value {
    json!({ "answer": answer })
}

/// Create a go-to request body.
pub fn goto_request(index: i64) -> serde_json::Value {
    json!({ "index": index })
}

/// Create a shuffle toggle request body.
pub fn shuffle_request(enabled: bool) -> serde_json::Value {
    json!({ "enabled": enabled })
}

/// The two-card deck used throughout the session tests.
pub fn sample_cards() -> Vec<(&'static str, &'static str)> {
    vec![("Capital of France", "Paris"), ("2+2", "4")]
}

/// Generate a unique deck title to avoid collisions between runs.
pub fn unique_title(prefix: &str) -> String {
    format!("{} {}", prefix, &Uuid::new_v4().to_string()[..8])
}

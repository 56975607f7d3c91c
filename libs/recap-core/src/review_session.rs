//! Flip-card review mode.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{Card, Face};

/// Snapshot of a review session for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewView {
    pub position: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    pub face: Face,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub shuffled: bool,
    pub is_first: bool,
    pub is_last: bool,
}

/// Flip-card viewer over a deck's cards, with optional shuffle.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    original: Vec<Card>,
    cards: Vec<Card>,
    cursor: usize,
    face: Face,
    shuffled: bool,
}

impl ReviewSession {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            original: cards.clone(),
            cards,
            cursor: 0,
            face: Face::Front,
            shuffled: false,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the order they are currently shown.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_flipped(&self) -> bool {
        self.face == Face::Back
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.cards.len()
    }

    /// Text on the visible side of the current card.
    pub fn visible_text(&self) -> Option<&str> {
        self.current().map(|card| match self.face {
            Face::Front => card.front.as_str(),
            Face::Back => card.back.as_str(),
        })
    }

    pub fn flip(&mut self) {
        self.face = self.face.flipped();
    }

    pub fn next(&mut self) {
        self.face = Face::Front;
        if self.cursor + 1 < self.cards.len() {
            self.cursor += 1;
        }
    }

    pub fn prev(&mut self) {
        self.face = Face::Front;
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.face = Face::Front;
        self.cursor = 0;
    }

    /// Turn shuffle on or off.
    ///
    /// Turning it on draws a fresh permutation of the original cards, even if
    /// shuffle was already on. Turning it off restores load order. Both go
    /// back to the first card, front side up.
    pub fn set_shuffled<R: Rng + ?Sized>(&mut self, on: bool, rng: &mut R) {
        self.cards = self.original.clone();
        if on {
            self.cards.shuffle(rng);
        }
        self.shuffled = on;
        self.restart();
    }

    pub fn view(&self) -> ReviewView {
        ReviewView {
            position: self.cursor,
            total: self.cards.len(),
            card: self.current().cloned(),
            face: self.face,
            text: self.visible_text().map(str::to_string),
            shuffled: self.shuffled,
            is_first: self.is_first(),
            is_last: self.is_last(),
        }
    }
}

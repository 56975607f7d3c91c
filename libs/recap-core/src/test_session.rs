//! Typed-answer test mode: grading and navigation.
//!
//! A [`TestSession`] walks a fixed list of cards. Each position can be graded
//! once; the submitted answer and feedback are kept in a ledger so that
//! moving back to a graded question shows it exactly as it was left.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::normalize::{answers_match, feedback_for};
use crate::types::{Card, Score};

/// Record of one graded question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub card_id: Uuid,
    /// Answer exactly as submitted, before normalization.
    pub answer: String,
    pub correct: bool,
    pub feedback: String,
}

/// Snapshot of a test session for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestView {
    pub position: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub checked: bool,
    pub is_first: bool,
    pub is_last: bool,
    pub finished: bool,
    pub score: Score,
}

/// Test session over an ordered list of cards.
#[derive(Debug, Clone)]
pub struct TestSession {
    cards: Vec<Card>,
    cursor: usize,
    input: String,
    feedback: Option<String>,
    score: Score,
    ledger: BTreeMap<usize, LedgerEntry>,
}

impl TestSession {
    /// Start a session. The order of `cards` is fixed from here on.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            cursor: 0,
            input: String::new(),
            feedback: None,
            score: Score::default(),
            ledger: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Card at the cursor, `None` for an empty session.
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Ledger entry for a position, if it has been graded.
    pub fn entry(&self, position: usize) -> Option<&LedgerEntry> {
        self.ledger.get(&position)
    }

    /// Whether the current question has been graded.
    pub fn is_checked(&self) -> bool {
        self.ledger.contains_key(&self.cursor)
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.cards.len()
    }

    pub fn graded_count(&self) -> usize {
        self.ledger.len()
    }

    /// True once every question in a non-empty session has been graded.
    pub fn is_finished(&self) -> bool {
        !self.cards.is_empty() && self.ledger.len() == self.cards.len()
    }

    /// Replace the typed answer. Ignored once the question is graded.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.is_checked() {
            return;
        }
        self.input = text.into();
    }

    /// Grade the typed answer for the current question.
    ///
    /// Returns the feedback on the first grade of a position and `None` on
    /// every later attempt, leaving the score and ledger untouched.
    pub fn check(&mut self) -> Option<&str> {
        if self.is_checked() {
            return None;
        }
        let card = self.cards.get(self.cursor)?;

        let correct = answers_match(&self.input, &card.back);
        let feedback = feedback_for(correct, &card.back);

        self.ledger.insert(
            self.cursor,
            LedgerEntry {
                card_id: card.id,
                answer: self.input.clone(),
                correct,
                feedback: feedback.clone(),
            },
        );
        self.score.record(correct);
        self.feedback = Some(feedback);
        self.feedback.as_deref()
    }

    /// Type `answer` and grade it in one step.
    pub fn submit(&mut self, answer: impl Into<String>) -> Option<&str> {
        self.set_input(answer);
        self.check()
    }

    /// Move to `index`, clamped into the session.
    ///
    /// Restores the stored answer and feedback of a graded question, and
    /// clears both otherwise.
    pub fn go_to(&mut self, index: i64) {
        let last = self.cards.len().saturating_sub(1) as i64;
        self.cursor = index.clamp(0, last) as usize;

        match self.ledger.get(&self.cursor) {
            Some(entry) => {
                self.input = entry.answer.clone();
                self.feedback = Some(entry.feedback.clone());
            }
            None => {
                self.input.clear();
                self.feedback = None;
            }
        }
    }

    pub fn next(&mut self) {
        self.go_to(self.cursor as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.cursor as i64 - 1);
    }

    pub fn view(&self) -> TestView {
        TestView {
            position: self.cursor,
            total: self.cards.len(),
            card: self.current().cloned(),
            input: self.input.clone(),
            feedback: self.feedback.clone(),
            checked: self.is_checked(),
            is_first: self.is_first(),
            is_last: self.is_last(),
            finished: self.is_finished(),
            score: self.score,
        }
    }
}

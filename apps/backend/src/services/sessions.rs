//! In-memory registry of live study sessions.
//!
//! Every session is an independent engine instance keyed by a generated ID.
//! Handlers lock the registry, apply one engine operation and snapshot the
//! result, so no lock is ever held across an await point.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use recap_core::{Card, ReviewSession, TestSession};
use uuid::Uuid;

use crate::error::{ApiError, Result};

/// Sessions of one kind, remembering insertion order for eviction.
#[derive(Debug)]
struct SessionMap<S> {
    sessions: HashMap<Uuid, S>,
    order: VecDeque<Uuid>,
    capacity: usize,
}

impl<S> SessionMap<S> {
    fn new(capacity: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    fn insert(&mut self, session: S) -> Uuid {
        while self.sessions.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            if self.sessions.remove(&oldest).is_some() {
                tracing::info!("Evicted session {}", oldest);
            }
        }

        let id = Uuid::new_v4();
        self.sessions.insert(id, session);
        self.order.push_back(id);
        id
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut S> {
        self.sessions.get_mut(&id)
    }

    fn remove(&mut self, id: Uuid) -> bool {
        self.order.retain(|existing| *existing != id);
        self.sessions.remove(&id).is_some()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

/// Live test and review sessions
#[derive(Debug)]
pub struct SessionRegistry {
    tests: Mutex<SessionMap<TestSession>>,
    reviews: Mutex<SessionMap<ReviewSession>>,
}

impl SessionRegistry {
    /// Create a registry holding at most `capacity` sessions of each kind.
    pub fn new(capacity: usize) -> Self {
        Self {
            tests: Mutex::new(SessionMap::new(capacity)),
            reviews: Mutex::new(SessionMap::new(capacity)),
        }
    }

    // === Test sessions ===

    /// Start a test session over `cards` and apply `f` to it.
    pub fn start_test<T>(
        &self,
        cards: Vec<Card>,
        f: impl FnOnce(&TestSession) -> T,
    ) -> Result<(Uuid, T)> {
        let session = TestSession::new(cards);
        let out = f(&session);
        let id = lock(&self.tests)?.insert(session);
        Ok((id, out))
    }

    /// Run `f` against an existing test session.
    pub fn with_test<T>(&self, id: Uuid, f: impl FnOnce(&mut TestSession) -> T) -> Result<T> {
        let mut tests = lock(&self.tests)?;
        let session = tests
            .get_mut(id)
            .ok_or_else(|| ApiError::NotFound(format!("Test session {}", id)))?;
        Ok(f(session))
    }

    /// Drop a test session. Returns whether it existed.
    pub fn end_test(&self, id: Uuid) -> Result<bool> {
        Ok(lock(&self.tests)?.remove(id))
    }

    pub fn test_count(&self) -> Result<usize> {
        Ok(lock(&self.tests)?.len())
    }

    // === Review sessions ===

    /// Start a review session over `cards` and apply `f` to it.
    pub fn start_review<T>(
        &self,
        cards: Vec<Card>,
        f: impl FnOnce(&ReviewSession) -> T,
    ) -> Result<(Uuid, T)> {
        let session = ReviewSession::new(cards);
        let out = f(&session);
        let id = lock(&self.reviews)?.insert(session);
        Ok((id, out))
    }

    /// Run `f` against an existing review session.
    pub fn with_review<T>(&self, id: Uuid, f: impl FnOnce(&mut ReviewSession) -> T) -> Result<T> {
        let mut reviews = lock(&self.reviews)?;
        let session = reviews
            .get_mut(id)
            .ok_or_else(|| ApiError::NotFound(format!("Review session {}", id)))?;
        Ok(f(session))
    }

    /// Drop a review session. Returns whether it existed.
    pub fn end_review(&self, id: Uuid) -> Result<bool> {
        Ok(lock(&self.reviews)?.remove(id))
    }

    pub fn review_count(&self) -> Result<usize> {
        Ok(lock(&self.reviews)?.len())
    }
}

fn lock<S>(map: &Mutex<SessionMap<S>>) -> Result<MutexGuard<'_, SessionMap<S>>> {
    map.lock()
        .map_err(|_| ApiError::Internal("session registry lock poisoned".to_string()))
}

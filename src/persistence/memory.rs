//! In-process store for tests and headless runs

use std::collections::HashMap;

use super::{BEST_SCORE_KEY, IDENTITY_KEY, ScoreStore, StoreError, parse_best_score};

/// String map with the same key layout as the browser store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    /// Simulate a full or locked backend: every write fails
    pub read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already has an identity registered
    pub fn with_identity(token: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(IDENTITY_KEY.to_string(), token.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Unavailable);
        }
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

impl ScoreStore for MemoryStore {
    fn best_score(&self) -> u64 {
        parse_best_score(self.get(BEST_SCORE_KEY))
    }

    fn set_best_score(&mut self, score: u64) -> Result<(), StoreError> {
        self.set(BEST_SCORE_KEY, score.to_string())
    }

    fn identity(&self) -> Option<String> {
        self.get(IDENTITY_KEY).map(str::to_string)
    }

    fn set_identity(&mut self, token: &str) -> Result<(), StoreError> {
        self.set(IDENTITY_KEY, token.to_string())
    }
}

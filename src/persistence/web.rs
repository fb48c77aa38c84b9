//! Browser LocalStorage store (wasm32 only)

use web_sys::Storage;

use super::{BEST_SCORE_KEY, IDENTITY_KEY, ScoreStore, StoreError, parse_best_score};

/// Reads and writes go straight to `window.localStorage`. When storage is
/// blocked (private mode, sandboxed iframe) reads act as empty and writes fail.
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    fn get(key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::Unavailable)
    }
}

impl ScoreStore for LocalStorageStore {
    fn best_score(&self) -> u64 {
        parse_best_score(Self::get(BEST_SCORE_KEY).as_deref())
    }

    fn set_best_score(&mut self, score: u64) -> Result<(), StoreError> {
        Self::set(BEST_SCORE_KEY, &score.to_string())
    }

    fn identity(&self) -> Option<String> {
        Self::get(IDENTITY_KEY)
    }

    fn set_identity(&mut self, token: &str) -> Result<(), StoreError> {
        Self::set(IDENTITY_KEY, token)
    }
}

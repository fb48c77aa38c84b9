//! Best score and player identity storage
//!
//! Two independent scalar values:
//! - `bestScore`: highest score ever reached, never decreases
//! - `playerId`: opaque identity token, input is ignored until it exists
//!
//! Reads never fail: a missing or unreadable value is the baseline (0 / no
//! identity). Writes can fail; callers treat them as best effort.

mod file;
mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

use thiserror::Error;

/// Storage key for the best score
pub const BEST_SCORE_KEY: &str = "bestScore";
/// Storage key for the identity token
pub const IDENTITY_KEY: &str = "playerId";

/// Failed write to a score store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode store: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable")]
    Unavailable,
}

/// Narrow key-value interface the game needs from its host
pub trait ScoreStore {
    /// Stored best score, 0 when absent
    fn best_score(&self) -> u64;

    fn set_best_score(&mut self, score: u64) -> Result<(), StoreError>;

    /// Current identity token, if any
    fn identity(&self) -> Option<String>;

    fn set_identity(&mut self, token: &str) -> Result<(), StoreError>;

    /// Whether activation input is accepted
    fn has_identity(&self) -> bool {
        self.identity().is_some_and(|t| !t.is_empty())
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn best_score(&self) -> u64 {
        (**self).best_score()
    }

    fn set_best_score(&mut self, score: u64) -> Result<(), StoreError> {
        (**self).set_best_score(score)
    }

    fn identity(&self) -> Option<String> {
        (**self).identity()
    }

    fn set_identity(&mut self, token: &str) -> Result<(), StoreError> {
        (**self).set_identity(token)
    }
}

/// Parse a stored best score the way a browser store hands it back
pub(crate) fn parse_best_score(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_score() {
        assert_eq!(parse_best_score(None), 0);
        assert_eq!(parse_best_score(Some("17")), 17);
        assert_eq!(parse_best_score(Some(" 3 ")), 3);
        assert_eq!(parse_best_score(Some("NaN")), 0);
        assert_eq!(parse_best_score(Some("")), 0);
    }

    #[test]
    fn test_empty_identity_is_absent() {
        let mut store = MemoryStore::new();
        assert!(!store.has_identity());
        store.set_identity("").unwrap();
        assert!(!store.has_identity());
        store.set_identity("team-moon").unwrap();
        assert!(store.has_identity());
    }
}

//! JSON file store for native hosts

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ScoreStore, StoreError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(rename = "bestScore", default)]
    best_score: u64,
    #[serde(rename = "playerId", default, skip_serializing_if = "Option::is_none")]
    player_id: Option<String>,
}

/// Store backed by a small JSON document. The whole file is rewritten on
/// every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    data: StoreFile,
}

impl FileStore {
    /// Open `path`. A missing or corrupt file starts out empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    log::info!("Loaded store from {}", path.display());
                    data
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable store {}: {}", path.display(), e);
                    StoreFile::default()
                }
            },
            Err(_) => {
                log::info!("No store at {}, starting fresh", path.display());
                StoreFile::default()
            }
        };
        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn best_score(&self) -> u64 {
        self.data.best_score
    }

    fn set_best_score(&mut self, score: u64) -> Result<(), StoreError> {
        self.data.best_score = score;
        self.save()
    }

    fn identity(&self) -> Option<String> {
        self.data.player_id.clone()
    }

    fn set_identity(&mut self, token: &str) -> Result<(), StoreError> {
        self.data.player_id = Some(token.to_string());
        self.save()
    }
}

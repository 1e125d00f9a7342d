use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "snake-arcade";
const SCORE_FILE_NAME: &str = "highscore.json";

/// Failure modes of a high-score write.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("could not write score file: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode score file: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Reads and writes the single persisted high score.
///
/// Loading never fails: a missing, unreadable, or malformed file all degrade
/// to 0 (with a warning for the latter two). Writes are best-effort; a
/// failure never touches the in-memory value.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store at the platform-correct data location.
    #[must_use]
    pub fn at_default_location() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SCORE_FILE_NAME);
        Self { path: base }
    }

    /// Store at an explicit path, for tests.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored high score, or 0 when none is usable.
    #[must_use]
    pub fn load(&self) -> u32 {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return 0,
            Err(error) => {
                warn!("high score file unreadable, starting from 0: {error}");
                return 0;
            }
        };

        match serde_json::from_str::<ScoreFile>(&raw) {
            Ok(file) => file.high_score,
            Err(error) => {
                warn!("high score file malformed, starting from 0: {error}");
                0
            }
        }
    }

    /// Writes `score` to disk, creating parent directories when needed.
    pub fn save(&self, score: u32) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = ScoreFile { high_score: score };
        let json = serde_json::to_string_pretty(&payload)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

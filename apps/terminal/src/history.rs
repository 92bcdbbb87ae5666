//! Persistent log of finished games.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use numquiz_core::{GameType, SessionSummary};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Number of games kept; older ones are dropped on append.
pub const MAX_SESSIONS: usize = 100;

/// Aggregate statistics over the stored games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_games: usize,
    pub total_questions: usize,
    pub correct_answers: usize,
    /// Percentage of correct answers over all planned questions.
    pub accuracy: f64,
    pub average_score: f64,
}

/// Game history stored as a JSON array, newest first.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored games, newest first. A missing file is an empty history;
    /// an unreadable or corrupt one is logged and treated as empty.
    pub fn load(&self) -> Vec<SessionSummary> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read history");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(sessions) => sessions,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt history");
                Vec::new()
            }
        }
    }

    /// Record a finished game at the front of the history.
    pub fn append(&self, summary: SessionSummary) -> Result<()> {
        let mut sessions = self.load();
        sessions.insert(0, summary);
        sessions.truncate(MAX_SESSIONS);
        self.write(&sessions)?;

        tracing::info!(path = %self.path.display(), games = sessions.len(), "history saved");
        Ok(())
    }

    /// Stored games of one type, newest first.
    pub fn by_game_type(&self, game_type: GameType) -> Vec<SessionSummary> {
        self.load()
            .into_iter()
            .filter(|s| s.game_type == game_type)
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        let sessions = self.load();

        let total_games = sessions.len();
        let total_questions = sessions.iter().map(|s| s.questions_count).sum();
        let correct_answers = sessions.iter().map(|s| s.correct_answers).sum();
        let total_score: u64 = sessions.iter().map(|s| u64::from(s.total_score)).sum();

        let accuracy = if total_questions > 0 {
            correct_answers as f64 / total_questions as f64 * 100.0
        } else {
            0.0
        };
        let average_score = if total_games > 0 {
            total_score as f64 / total_games as f64
        } else {
            0.0
        };

        Statistics {
            total_games,
            total_questions,
            correct_answers,
            accuracy,
            average_score,
        }
    }

    /// Delete all stored games.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, sessions: &[SessionSummary]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(sessions)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

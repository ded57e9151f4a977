//! Runtime configuration.

use std::path::{Path, PathBuf};

/// Default database file, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "scores.sqlite";

/// Number of runs shown by the leaderboard command
pub const DEFAULT_LEADERBOARD_SIZE: i64 = 10;

/// Settings shared by every front-end.
#[derive(Debug, Clone)]
pub struct Config {
    db_path: PathBuf,
    leaderboard_size: i64,
}

impl Config {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }

    pub fn with_leaderboard_size(mut self, size: i64) -> Self {
        self.leaderboard_size = size;
        self
    }

    /// Path of the SQLite file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn leaderboard_size(&self) -> i64 {
        self.leaderboard_size
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

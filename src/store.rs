use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use tracing::debug;

/// A single named persisted integer record: the high score.
pub trait ScoreStore {
    /// Read the persisted high score. Absence of a valid stored value is 0,
    /// not an error; this never fails the caller.
    fn load(&self) -> u32;

    /// Overwrite the persisted high score. Failure is loggable but non-fatal
    /// for gameplay.
    fn save(&self, score: u32) -> Result<()>;
}

/// High score persisted as the plain decimal text of the integer. No schema,
/// no versioning.
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default record location under the per-user data directory, with a
    /// working-directory fallback.
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "simon-rs", "simon") {
            proj_dirs.data_dir().join("highscore.txt")
        } else {
            PathBuf::from("highscore.txt")
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(content) => match content.trim().parse() {
                Ok(score) => score,
                Err(_) => {
                    debug!(
                        "unparseable high score record at {}; defaulting to 0",
                        self.path.display()
                    );
                    0
                }
            },
            Err(e) => {
                debug!(
                    "no high score record at {} ({}); defaulting to 0",
                    self.path.display(),
                    e
                );
                0
            }
        }
    }

    fn save(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

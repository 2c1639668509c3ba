use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Timing and difficulty tunables for the game engine.
///
/// The defaults reproduce the canonical cabinet behavior; the struct mostly
/// exists so tests and odd hardware can tighten or stretch the loop without
/// touching engine code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    /// Base input timeout in seconds, before difficulty scaling.
    pub base_input_timeout_secs: f64,
    /// How long each replayed entry is shown, in seconds, at difficulty 1.0.
    pub entry_show_secs: f64,
    /// Gap between replayed entries, in seconds, at difficulty 1.0.
    pub entry_gap_secs: f64,
    /// Step time for the attract-mode sweeps and toggles, in seconds.
    pub attract_step_secs: f64,
    /// Settle time after a button release, against contact bounce.
    pub settle_secs: f64,
    /// Interval between button poll passes.
    pub poll_interval_secs: f64,
    /// Pause after a fully matched round, before the next replay.
    pub round_pause_secs: f64,
    /// Number of light toggles when flashing the entry the player missed.
    pub flash_toggles: u32,
    /// Step time per flash toggle, in seconds.
    pub flash_step_secs: f64,
    /// Difficulty reduction per active difficulty switch.
    pub switch_decrement: f64,
    /// Lower clamp for the difficulty scalar.
    pub difficulty_floor: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            base_input_timeout_secs: 5.0,
            entry_show_secs: 0.5,
            entry_gap_secs: 0.2,
            attract_step_secs: 0.1,
            settle_secs: 0.2,
            poll_interval_secs: 0.01,
            round_pause_secs: 1.0,
            flash_toggles: 12,
            flash_step_secs: 0.1,
            switch_decrement: 0.4,
            difficulty_floor: 0.2,
        }
    }
}

impl GameSettings {
    /// Load settings from disk, falling back to defaults on any failure.
    pub fn load() -> Self {
        Self::load_from_file().unwrap_or_default()
    }

    fn load_from_file() -> Result<Self> {
        let path = Self::settings_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn settings_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "simon-rs", "simon") {
            Ok(proj_dirs.config_dir().join("settings.json"))
        } else {
            Ok(PathBuf::from(".simon-settings.json"))
        }
    }

    pub fn base_input_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.base_input_timeout_secs)
    }

    pub fn attract_step(&self) -> Duration {
        Duration::from_secs_f64(self.attract_step_secs)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_secs_f64(self.settle_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs_f64(self.poll_interval_secs)
    }

    pub fn round_pause(&self) -> Duration {
        Duration::from_secs_f64(self.round_pause_secs)
    }

    pub fn flash_step(&self) -> Duration {
        Duration::from_secs_f64(self.flash_step_secs)
    }
}

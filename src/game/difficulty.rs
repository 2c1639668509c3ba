use std::time::Duration;

use crate::config::GameSettings;

/// Timing multiplier in (0, 1] derived once per game from the difficulty
/// switches. Each active switch subtracts a fixed decrement; the result is
/// clamped to a floor so the timers never collapse to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty(f64);

impl Difficulty {
    pub fn from_switches(switches: &[bool], settings: &GameSettings) -> Self {
        let active = switches.iter().filter(|&&on| on).count();
        let value = 1.0 - settings.switch_decrement * active as f64;
        Self(value.max(settings.difficulty_floor))
    }

    #[cfg(test)]
    pub fn from_value(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Per-game input deadline: base timeout scaled by this difficulty.
    pub fn input_timeout(self, settings: &GameSettings) -> Duration {
        self.scale(settings.base_input_timeout())
    }

    pub fn scale(self, base: Duration) -> Duration {
        base.mul_f64(self.0)
    }
}

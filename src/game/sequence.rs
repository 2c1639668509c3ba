use rand::Rng;
use tracing::debug;

use crate::config::GameSettings;
use crate::game::{Channel, Difficulty};
use crate::traits::Clock;

/// The growing sequence the player must reproduce.
///
/// Entries are channel indices into the controller's channel set. The
/// sequence is append-only: it grows by exactly one entry per round and only
/// ever shrinks by being cleared on reset.
#[derive(Debug, Default)]
pub struct Sequence {
    entries: Vec<usize>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append one uniformly-random entry (with replacement; repeats are
    /// expected) and return it. The RNG is caller-supplied so sequence
    /// generation is deterministic under test.
    pub fn grow<R: Rng>(&mut self, channel_count: usize, rng: &mut R) -> usize {
        let entry = rng.gen_range(0..channel_count);
        self.entries.push(entry);
        entry
    }

    /// Present every entry in order, each shown for `entry_show * difficulty`
    /// with a gap of `entry_gap * difficulty` between entries. Blocking and
    /// strictly ordered; entries never overlap.
    pub fn replay(
        &self,
        clock: &dyn Clock,
        channels: &mut [Channel],
        difficulty: Difficulty,
        settings: &GameSettings,
    ) {
        let show = difficulty.scale(std::time::Duration::from_secs_f64(settings.entry_show_secs));
        let gap = difficulty.scale(std::time::Duration::from_secs_f64(settings.entry_gap_secs));

        debug!("replaying {} entries", self.entries.len());
        for &entry in &self.entries {
            channels[entry].show(clock, show);
            clock.sleep(gap);
        }
    }
}

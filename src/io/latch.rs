use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::traits::Button;

/// Single-writer cell holding the currently pressed channel.
///
/// This is the seam between an edge-triggered press source (interrupt
/// handler, input thread) and the engine's polling loop. Discipline: one
/// press is latched at a time; a second press while another channel is held
/// is logged and dropped until the first is released.
pub struct PressLatch {
    cell: Mutex<Option<usize>>,
}

impl PressLatch {
    pub fn new() -> Self {
        Self {
            cell: Mutex::new(None),
        }
    }

    /// Latch a press edge for `channel`.
    pub fn press(&self, channel: usize) {
        let mut cell = self.cell.lock().unwrap();
        match *cell {
            None => *cell = Some(channel),
            Some(held) if held == channel => {}
            Some(held) => {
                warn!(
                    "ignoring press on channel {} while channel {} is latched",
                    channel, held
                );
            }
        }
    }

    /// Clear the latch for `channel`. A release that doesn't match the
    /// latched channel is an input anomaly: logged, ignored.
    pub fn release(&self, channel: usize) {
        let mut cell = self.cell.lock().unwrap();
        match *cell {
            Some(held) if held == channel => *cell = None,
            Some(held) => {
                debug!(
                    "release on channel {} does not match latched channel {}",
                    channel, held
                );
            }
            None => debug!("release on channel {} without a matching press", channel),
        }
    }

    pub fn is_pressed(&self, channel: usize) -> bool {
        *self.cell.lock().unwrap() == Some(channel)
    }
}

impl Default for PressLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-channel polled view over a shared PressLatch. The engine's capture
/// loop polls these exactly like level-triggered hardware buttons.
pub struct LatchButton {
    channel: usize,
    latch: Arc<PressLatch>,
}

impl LatchButton {
    pub fn new(channel: usize, latch: Arc<PressLatch>) -> Self {
        Self { channel, latch }
    }
}

impl Button for LatchButton {
    fn is_pressed(&self) -> bool {
        self.latch.is_pressed(self.channel)
    }
}

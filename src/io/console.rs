use std::io::BufRead;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::game::Channel;
use crate::io::{LatchButton, PressLatch};
use crate::traits::{DifficultySwitches, Indicator, ScoreDisplay};

/// The canonical four channels: name and tone frequency. The notes are
/// C4/D4/E4/F4 from the C major scale.
pub const CANONICAL_CHANNELS: [(&str, u32); 4] = [
    ("Green", 262),
    ("Red", 294),
    ("Yellow", 330),
    ("Blue", 349),
];

/// Indicator that renders light/tone transitions as console lines. Stands in
/// for the LED + buzzer pair on real hardware.
pub struct ConsoleIndicator {
    name: String,
    tone_hz: u32,
}

impl ConsoleIndicator {
    pub fn new(name: impl Into<String>, tone_hz: u32) -> Self {
        Self {
            name: name.into(),
            tone_hz,
        }
    }
}

impl Indicator for ConsoleIndicator {
    fn set_light(&mut self, on: bool) {
        if on {
            println!("  [{}] ●", self.name);
        } else {
            println!("  [{}] ○", self.name);
        }
    }

    fn set_tone(&mut self, on: bool) {
        if on {
            println!("  [{}] ♪ {} Hz", self.name, self.tone_hz);
        }
    }
}

/// Two-line label+value rendering on stdout.
pub struct ConsoleScoreDisplay;

impl ConsoleScoreDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleScoreDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreDisplay for ConsoleScoreDisplay {
    fn render(&mut self, label: &str, value: u32) {
        println!("== {} ==", label);
        println!("   {}", value);
    }
}

/// Difficulty switches fixed at process start (set from the command line).
pub struct FixedSwitches {
    states: Vec<bool>,
}

impl FixedSwitches {
    /// `active` of `total` switches set, in order.
    pub fn with_active(active: usize, total: usize) -> Self {
        Self {
            states: (0..total).map(|i| i < active).collect(),
        }
    }
}

impl DifficultySwitches for FixedSwitches {
    fn sample(&self) -> Vec<bool> {
        self.states.clone()
    }
}

/// Build the canonical channel set against console indicators and the shared
/// press latch.
pub fn console_channels(latch: &Arc<PressLatch>) -> Vec<Channel> {
    CANONICAL_CHANNELS
        .iter()
        .enumerate()
        .map(|(index, &(name, tone_hz))| {
            Channel::new(
                name,
                Box::new(ConsoleIndicator::new(name, tone_hz)),
                Box::new(LatchButton::new(index, latch.clone())),
            )
        })
        .collect()
}

/// Turn typed digits into press/hold/release edges against the latch.
///
/// This is the interrupt-style press source: a separate execution context
/// whose only shared state with the game loop is the single-writer latch.
/// Each digit 1..=N latches the matching channel, holds it for `hold`, then
/// releases it, approximating a physical button tap.
pub fn spawn_stdin_reader(
    latch: Arc<PressLatch>,
    channel_count: usize,
    hold: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("stdin read failed: {}", e);
                    break;
                }
            };
            for c in line.chars() {
                match c.to_digit(10) {
                    Some(digit) if (1..=channel_count as u32).contains(&digit) => {
                        let channel = digit as usize - 1;
                        latch.press(channel);
                        thread::sleep(hold);
                        latch.release(channel);
                    }
                    _ => debug!("ignoring input {:?}", c),
                }
            }
        }
        debug!("stdin closed; no further button input");
    })
}

use std::time::Duration;

use tracing::debug;

use crate::config::GameSettings;
use crate::game::Channel;
use crate::traits::Clock;

/// Outcome of comparing one captured response against the expected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgment {
    Match,
    Mismatch,
}

/// Pure equality comparison on channel identity. Absence (a timeout) always
/// judges as a mismatch.
pub fn judge(expected: usize, actual: Option<usize>) -> Judgment {
    match actual {
        Some(channel) if channel == expected => Judgment::Match,
        _ => Judgment::Mismatch,
    }
}

/// Captures one player response under a deadline.
///
/// The capture is level-triggered and synchronous, simulating a physical
/// button hold: on a press it renders feedback, blocks until release, then
/// waits a short settle time against contact bounce before returning.
pub struct InputJudge {
    poll_interval: Duration,
    settle: Duration,
}

impl InputJudge {
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            poll_interval: settings.poll_interval(),
            settle: settings.settle(),
        }
    }

    /// Poll all channel buttons until exactly one produces a fresh press
    /// edge, or the deadline elapses with none (`None`, which the controller
    /// treats as a loss).
    ///
    /// A level that is already high when capture begins is a hold carried
    /// over from a previous press; it is ignored until observed low once, so
    /// it can never be misattributed to this entry. When a scan pass reads
    /// several buttons pressed, the first channel in scan order wins the
    /// pass; there is no simultaneous-press arbitration.
    pub fn capture(
        &self,
        clock: &dyn Clock,
        channels: &mut [Channel],
        timeout: Duration,
    ) -> Option<usize> {
        let deadline = clock.now() + timeout;
        let mut held_at_entry: Vec<bool> =
            channels.iter().map(|channel| channel.is_pressed()).collect();

        while clock.now() < deadline {
            let mut hit = None;
            for (index, channel) in channels.iter().enumerate() {
                if channel.is_pressed() {
                    if !held_at_entry[index] {
                        hit = Some(index);
                        break;
                    }
                } else {
                    // Carried-over hold released; a future press is a fresh edge.
                    held_at_entry[index] = false;
                }
            }

            if let Some(index) = hit {
                let channel = &mut channels[index];
                debug!("button {} pressed", channel.name());
                channel.set_feedback(true);
                while channel.is_pressed() {
                    clock.sleep(self.poll_interval);
                }
                channel.set_feedback(false);
                debug!("button {} released", channel.name());
                clock.sleep(self.settle);
                return Some(index);
            }

            clock.sleep(self.poll_interval);
        }

        debug!("input deadline elapsed");
        None
    }
}

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::GameSettings;
use crate::game::{Channel, Difficulty, InputJudge, Judgment, Sequence, judge};
use crate::store::ScoreStore;
use crate::traits::{Clock, DifficultySwitches, ScoreDisplay};

/// Phase of the single live game. Exactly one phase is active at a time and
/// each phase fully completes before the next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Resetting,
    Attract,
    Playing,
    Judging,
    Lost,
}

/// Outcome of one complete reset-to-loss cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameReport {
    /// Rounds fully matched before the loss.
    pub score: u32,
    /// High score loaded at reset, before this game's result.
    pub high_score: u32,
    /// Difficulty sampled for this game.
    pub difficulty: f64,
    /// Input deadline derived from the difficulty.
    pub input_timeout: Duration,
}

/// Top-level state machine: reset, attract, grow-replay-judge rounds, loss
/// feedback, high-score persistence, repeat.
pub struct GameController<C: Clock, R: Rng> {
    channels: Vec<Channel>,
    switches: Box<dyn DifficultySwitches>,
    store: Box<dyn ScoreStore>,
    display: Option<Box<dyn ScoreDisplay>>,
    clock: C,
    rng: R,
    settings: GameSettings,
    judge: InputJudge,
    sequence: Sequence,
    phase: GamePhase,
}

impl<C: Clock, R: Rng> GameController<C, R> {
    pub fn new(
        channels: Vec<Channel>,
        switches: Box<dyn DifficultySwitches>,
        store: Box<dyn ScoreStore>,
        display: Option<Box<dyn ScoreDisplay>>,
        clock: C,
        rng: R,
        settings: GameSettings,
    ) -> Self {
        let judge = InputJudge::new(&settings);
        Self {
            channels,
            switches,
            store,
            display,
            clock,
            rng,
            settings,
            judge,
            sequence: Sequence::new(),
            phase: GamePhase::Resetting,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Run games forever. There's no escape.
    pub fn run(&mut self) -> ! {
        loop {
            self.run_game();
        }
    }

    /// One full cycle: reset, attract, play until the player loses, persist
    /// an improved high score, and report the result.
    pub fn run_game(&mut self) -> GameReport {
        self.enter(GamePhase::Resetting);
        for channel in &mut self.channels {
            channel.set_feedback(false);
        }
        self.sequence.clear();
        let mut score: u32 = 0;
        let high_score = self.store.load();
        info!("reset; high score {}", high_score);

        self.enter(GamePhase::Attract);
        self.render("Highscore", high_score);
        self.attract();

        // Sampled once per game; timing is constant within a game.
        let samples = self.switches.sample();
        let difficulty = Difficulty::from_switches(&samples, &self.settings);
        let input_timeout = difficulty.input_timeout(&self.settings);
        info!(
            "difficulty {} (input timeout {:?})",
            difficulty.value(),
            input_timeout
        );

        self.enter(GamePhase::Playing);
        let failed_entry = loop {
            let entry = self.sequence.grow(self.channels.len(), &mut self.rng);
            debug!("appended entry {}", self.channels[entry].name());

            self.render("Score", score);
            self.sequence
                .replay(&self.clock, &mut self.channels, difficulty, &self.settings);

            let round = self.sequence.entries().to_vec();
            let mut failed = None;
            for expected in round {
                self.enter(GamePhase::Judging);
                let actual = self
                    .judge
                    .capture(&self.clock, &mut self.channels, input_timeout);
                self.enter(GamePhase::Playing);

                if judge(expected, actual) == Judgment::Mismatch {
                    failed = Some(expected);
                    break;
                }
            }

            if let Some(entry) = failed {
                break entry;
            }

            score += 1;
            debug!("round cleared; score {}", score);
            // Keep the tail of the last release from bleeding into the next
            // replay.
            self.clock.sleep(self.settings.round_pause());
        };

        info!(
            "lost on {}; final score {}",
            self.channels[failed_entry].name(),
            score
        );
        self.flash_failure(failed_entry);

        self.enter(GamePhase::Lost);
        if score > high_score {
            info!("new high score {}", score);
            if let Err(e) = self.store.save(score) {
                // Never let storage block the reset cycle.
                warn!("failed to persist high score: {}", e);
            }
        }

        GameReport {
            score,
            high_score,
            difficulty: difficulty.value(),
            input_timeout,
        }
    }

    fn enter(&mut self, phase: GamePhase) {
        debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn render(&mut self, label: &str, value: u32) {
        if let Some(display) = &mut self.display {
            display.render(label, value);
        }
    }

    /// Idle animation between games: two forward-on/backward-off sweeps
    /// across the channel set, then four all-channel toggles. No player
    /// input is read here.
    fn attract(&mut self) {
        let step = self.settings.attract_step();

        for _ in 0..2 {
            for index in 0..self.channels.len() {
                self.channels[index].set_feedback(true);
                self.clock.sleep(step);
            }
            for index in (0..self.channels.len()).rev() {
                self.channels[index].set_feedback(false);
                self.clock.sleep(step);
            }
        }

        for _ in 0..4 {
            for channel in &mut self.channels {
                channel.toggle_light();
            }
            self.clock.sleep(step);
        }
    }

    /// Rub the correct answer in: tone held while the missed entry's light
    /// toggles.
    fn flash_failure(&mut self, entry: usize) {
        let channel = &mut self.channels[entry];
        channel.set_tone(true);
        for _ in 0..self.settings.flash_toggles {
            channel.toggle_light();
            self.clock.sleep(self.settings.flash_step());
        }
        channel.set_tone(false);
        channel.set_light(false);
    }
}

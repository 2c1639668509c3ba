/// One player-visible output unit: a binary light plus a binary tone at a
/// frequency fixed at construction time.
/// Implementations: ConsoleIndicator (host simulation), RecordingIndicator
/// (testing).
pub trait Indicator {
    fn set_light(&mut self, on: bool);
    fn set_tone(&mut self, on: bool);
}

/// Debounced boolean state of one channel's button, polled repeatedly by the
/// input judge.
pub trait Button {
    fn is_pressed(&self) -> bool;
}

/// A small set of binary inputs that bias timing, sampled once per game at
/// the attract-to-playing transition.
pub trait DifficultySwitches {
    fn sample(&self) -> Vec<bool>;
}

/// Two-line label+value rendering. Best effort: implementations swallow
/// their own failures, and the controller works without a display at all.
pub trait ScoreDisplay {
    fn render(&mut self, label: &str, value: u32);
}

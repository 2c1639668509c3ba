mod console;
mod latch;

pub use console::{
    CANONICAL_CHANNELS, ConsoleIndicator, ConsoleScoreDisplay, FixedSwitches, console_channels,
    spawn_stdin_reader,
};
pub use latch::{LatchButton, PressLatch};

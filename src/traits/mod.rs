mod io;
mod time;

pub use io::{Button, DifficultySwitches, Indicator, ScoreDisplay};
pub use time::{Clock, MockClock, SystemClock};

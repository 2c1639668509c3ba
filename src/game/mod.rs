mod channel;
mod controller;
mod difficulty;
mod judge;
mod sequence;

pub use channel::Channel;
pub use controller::{GameController, GamePhase, GameReport};
pub use difficulty::Difficulty;
pub use judge::{InputJudge, Judgment, judge};
pub use sequence::Sequence;

//! Test fakes for driving deterministic games: recording outputs, scripted
//! buttons, and in-memory stores.

pub mod fakes {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    use anyhow::{Result, anyhow};

    use crate::game::Channel;
    use crate::io::CANONICAL_CHANNELS;
    use crate::store::ScoreStore;
    use crate::traits::{Button, DifficultySwitches, Indicator, ScoreDisplay};

    /// One observed light or tone transition.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum IndicatorEvent {
        Light { channel: usize, on: bool },
        Tone { channel: usize, on: bool },
    }

    pub type EventLog = Rc<RefCell<Vec<IndicatorEvent>>>;

    pub fn new_event_log() -> EventLog {
        Rc::new(RefCell::new(Vec::new()))
    }

    /// Indicator that appends every transition to a shared log.
    pub struct RecordingIndicator {
        channel: usize,
        log: EventLog,
    }

    impl RecordingIndicator {
        pub fn new(channel: usize, log: EventLog) -> Self {
            Self { channel, log }
        }
    }

    impl Indicator for RecordingIndicator {
        fn set_light(&mut self, on: bool) {
            self.log.borrow_mut().push(IndicatorEvent::Light {
                channel: self.channel,
                on,
            });
        }

        fn set_tone(&mut self, on: bool) {
            self.log.borrow_mut().push(IndicatorEvent::Tone {
                channel: self.channel,
                on,
            });
        }
    }

    /// Button that is never pressed.
    pub struct NullButton;

    impl Button for NullButton {
        fn is_pressed(&self) -> bool {
            false
        }
    }

    /// Button whose level is scripted against its own poll count: pressed
    /// whenever the 1-based call number falls inside one of the inclusive
    /// windows. Lets capture tests place edges on exact scan passes.
    pub struct WindowButton {
        windows: Vec<(u32, u32)>,
        calls: Cell<u32>,
    }

    impl WindowButton {
        pub fn pressed_during(windows: &[(u32, u32)]) -> Self {
            Self {
                windows: windows.to_vec(),
                calls: Cell::new(0),
            }
        }
    }

    impl Button for WindowButton {
        fn is_pressed(&self) -> bool {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            self.windows
                .iter()
                .any(|&(start, end)| call >= start && call <= end)
        }
    }

    /// One scripted press directive: after `delay_polls` reads of the target
    /// button, hold it down for the next `hold_polls` reads.
    #[derive(Debug, Clone, Copy)]
    pub struct Press {
        pub channel: usize,
        pub delay_polls: u32,
        pub hold_polls: u32,
    }

    /// A global press script shared by all scripted buttons. Directives run
    /// strictly in order; only the front directive's channel ever reads
    /// pressed, which is how one script drives a whole deterministic game.
    pub struct ButtonScript {
        queue: VecDeque<Press>,
        seen: u32,
    }

    impl ButtonScript {
        pub fn new(presses: Vec<Press>) -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                queue: presses.into(),
                seen: 0,
            }))
        }

        pub fn remaining(&self) -> usize {
            self.queue.len()
        }

        fn poll(&mut self, channel: usize) -> bool {
            let Some(front) = self.queue.front() else {
                return false;
            };
            if front.channel != channel {
                return false;
            }
            self.seen += 1;
            if self.seen <= front.delay_polls {
                false
            } else if self.seen <= front.delay_polls + front.hold_polls {
                true
            } else {
                self.queue.pop_front();
                self.seen = 0;
                false
            }
        }
    }

    pub struct ScriptedButton {
        channel: usize,
        script: Rc<RefCell<ButtonScript>>,
    }

    impl ScriptedButton {
        pub fn new(channel: usize, script: Rc<RefCell<ButtonScript>>) -> Self {
            Self { channel, script }
        }
    }

    impl Button for ScriptedButton {
        fn is_pressed(&self) -> bool {
            self.script.borrow_mut().poll(self.channel)
        }
    }

    /// Four canonical channels with recording indicators and never-pressed
    /// buttons.
    pub fn recording_channels(log: &EventLog) -> Vec<Channel> {
        (0..CANONICAL_CHANNELS.len())
            .map(|index| recording_channel(index, log, Box::new(NullButton)))
            .collect()
    }

    pub fn recording_channel(index: usize, log: &EventLog, button: Box<dyn Button>) -> Channel {
        Channel::new(
            CANONICAL_CHANNELS[index].0,
            Box::new(RecordingIndicator::new(index, log.clone())),
            button,
        )
    }

    /// Four canonical channels with recording indicators and buttons driven
    /// by one shared press script.
    pub fn scripted_channels(log: &EventLog, script: &Rc<RefCell<ButtonScript>>) -> Vec<Channel> {
        (0..CANONICAL_CHANNELS.len())
            .map(|index| {
                recording_channel(index, log, Box::new(ScriptedButton::new(index, script.clone())))
            })
            .collect()
    }

    /// In-memory score store recording every save.
    #[derive(Clone)]
    pub struct RecordingStore {
        high_score: u32,
        saves: Rc<RefCell<Vec<u32>>>,
    }

    impl RecordingStore {
        pub fn with_high_score(high_score: u32) -> Self {
            Self {
                high_score,
                saves: Rc::new(RefCell::new(Vec::new())),
            }
        }

        pub fn saves(&self) -> Vec<u32> {
            self.saves.borrow().clone()
        }
    }

    impl ScoreStore for RecordingStore {
        fn load(&self) -> u32 {
            self.high_score
        }

        fn save(&self, score: u32) -> Result<()> {
            self.saves.borrow_mut().push(score);
            Ok(())
        }
    }

    /// Store whose saves always fail, for exercising the non-fatal
    /// persistence path.
    pub struct FailingStore;

    impl ScoreStore for FailingStore {
        fn load(&self) -> u32 {
            0
        }

        fn save(&self, _score: u32) -> Result<()> {
            Err(anyhow!("storage unavailable"))
        }
    }

    /// Display recording every rendered label/value pair.
    #[derive(Clone)]
    pub struct RecordingDisplay {
        renders: Rc<RefCell<Vec<(String, u32)>>>,
    }

    impl RecordingDisplay {
        pub fn new() -> Self {
            Self {
                renders: Rc::new(RefCell::new(Vec::new())),
            }
        }

        pub fn renders(&self) -> Vec<(String, u32)> {
            self.renders.borrow().clone()
        }
    }

    impl ScoreDisplay for RecordingDisplay {
        fn render(&mut self, label: &str, value: u32) {
            self.renders.borrow_mut().push((label.to_string(), value));
        }
    }

    /// Difficulty switches with fixed states.
    pub struct FixedFakeSwitches(pub Vec<bool>);

    impl DifficultySwitches for FixedFakeSwitches {
        fn sample(&self) -> Vec<bool> {
            self.0.clone()
        }
    }
}
